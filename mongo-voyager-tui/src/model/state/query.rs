//! Query page state

use mongo_voyager_core::types::ResultPage;

/// Query page state
#[derive(Debug, Default)]
pub struct QueryState {
    /// Target collection, set when entering from the collections page
    pub collection: Option<String>,
    /// Query text being edited
    pub query_text: String,
    /// Companion projection text for find queries, empty when unused
    pub projection_text: String,
    /// Whether typed characters go to the projection editor
    pub editing_projection: bool,
    /// Current result page number (0-based)
    pub page: u64,
    /// Last executed result page
    pub results: Option<ResultPage>,
    /// Table columns: union of top-level keys across the page
    pub columns: Vec<String>,
    /// Selected result row
    pub selected: usize,
    /// Error message of the last execution
    pub error: Option<String>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        let len = self.results.as_ref().map_or(0, |r| r.documents.len());
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    pub fn selected_document(&self) -> Option<&bson::Document> {
        self.results.as_ref()?.documents.get(self.selected)
    }

    /// Store a result page and recompute the column set.
    pub fn set_results(&mut self, results: ResultPage) {
        self.columns = column_union(&results.documents);
        self.selected = 0;
        self.error = None;
        self.page = results.page;
        self.results = Some(results);
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
        self.results = None;
        self.columns.clear();
        self.selected = 0;
    }

    /// The editor that currently receives typed characters.
    pub fn active_editor_mut(&mut self) -> &mut String {
        if self.editing_projection {
            &mut self.projection_text
        } else {
            &mut self.query_text
        }
    }

    /// Reset for a new target collection.
    pub fn set_collection(&mut self, collection: String) {
        self.collection = Some(collection);
        self.query_text.clear();
        self.projection_text.clear();
        self.editing_projection = false;
        self.page = 0;
        self.results = None;
        self.columns.clear();
        self.selected = 0;
        self.error = None;
    }
}

/// Union of the documents' top-level keys, `_id` first, the rest in
/// first-seen order.
fn column_union(documents: &[bson::Document]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for doc in documents {
        for key in doc.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    if let Some(pos) = columns.iter().position(|c| c == "_id") {
        let id = columns.remove(pos);
        columns.insert(0, id);
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn columns_are_union_in_first_seen_order() {
        let docs = vec![
            doc! { "name": "a", "age": 1 },
            doc! { "name": "b", "city": "x" },
        ];
        assert_eq!(column_union(&docs), vec!["name", "age", "city"]);
    }

    #[test]
    fn id_column_moves_first() {
        let docs = vec![doc! { "name": "a", "_id": 1 }];
        assert_eq!(column_union(&docs), vec!["_id", "name"]);
    }

    #[test]
    fn empty_page_has_no_columns() {
        assert!(column_union(&[]).is_empty());
    }
}
