//! Query and result types

use bson::Document;

/// A classified query, constructed fresh per execution from user text.
#[derive(Debug, Clone, PartialEq)]
pub enum QuerySpec {
    /// Find query: filter document plus optional projection
    Find {
        filter: Document,
        projection: Option<Document>,
    },
    /// Aggregation pipeline: ordered sequence of stage documents
    Aggregate { pipeline: Vec<Document> },
}

impl QuerySpec {
    /// Short label for logs and the status bar.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Find { .. } => "find",
            Self::Aggregate { .. } => "aggregate",
        }
    }
}

/// Parsed user input: the query plus an optional collection override taken
/// from shell-style text (`db.<collection>.find({...})`).
#[derive(Debug, Clone, PartialEq)]
pub struct QueryInput {
    /// Collection named inside the query text, if the shell form was used
    pub collection: Option<String>,
    /// The classified query
    pub spec: QuerySpec,
}

/// One page of query results. Transient; recomputed per execution.
#[derive(Debug, Clone, Default)]
pub struct ResultPage {
    /// Documents on this page, in server order
    pub documents: Vec<Document>,
    /// Zero-based page index
    pub page: u64,
    /// Requested page size
    pub page_size: u64,
    /// Number of documents known to exist so far (offset + fetched)
    pub total_known: u64,
    /// Whether at least one more document exists past this page
    pub has_more: bool,
}

impl ResultPage {
    /// Build a page from an over-fetched batch (`page_size + 1` documents
    /// requested; the extra one only signals `has_more`).
    #[must_use]
    pub fn from_batch(mut documents: Vec<Document>, page: u64, page_size: u64) -> Self {
        let has_more = documents.len() as u64 > page_size;
        if has_more {
            documents.truncate(page_size as usize);
        }
        let total_known = page * page_size + documents.len() as u64 + u64::from(has_more);
        Self {
            documents,
            page,
            page_size,
            total_known,
            has_more,
        }
    }

    /// Whether the page is past the end of the result set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    fn batch(n: usize) -> Vec<Document> {
        (0..n).map(|i| doc! { "i": i as i32 }).collect()
    }

    #[test]
    fn from_batch_trims_overfetch() {
        let page = ResultPage::from_batch(batch(11), 0, 10);
        assert_eq!(page.documents.len(), 10);
        assert!(page.has_more);
        assert_eq!(page.total_known, 11);
    }

    #[test]
    fn from_batch_partial_last_page() {
        let page = ResultPage::from_batch(batch(5), 2, 10);
        assert_eq!(page.documents.len(), 5);
        assert!(!page.has_more);
        assert_eq!(page.total_known, 25);
    }

    #[test]
    fn from_batch_past_the_end_is_empty_not_error() {
        let page = ResultPage::from_batch(Vec::new(), 9, 10);
        assert!(page.is_empty());
        assert!(!page.has_more);
        assert_eq!(page.total_known, 90);
    }
}
