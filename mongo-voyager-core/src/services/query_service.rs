//! Query execution service
//!
//! The Query Executor: parses user query text (before any connection is
//! opened), dispatches to the driver's find/aggregate calls, and returns a
//! bounded, paginated page of documents. One driver client is opened per
//! operation and dropped on scope exit; the driver's own timeouts bound
//! every call.

use std::time::Duration;

use bson::oid::ObjectId;
use bson::{doc, Bson, Document};
use futures::TryStreamExt;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, IndexModel};

use crate::error::{CoreError, CoreResult};
use crate::query;
use crate::types::{QuerySpec, ResolvedProfile, ResultPage};

/// Default page size when the caller does not specify one
pub const DEFAULT_PAGE_SIZE: u64 = 50;
/// Hard cap on documents fetched by a single operation
pub const MAX_QUERY_LIMIT: u64 = 1000;

/// Connection and server-selection timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const SKIP_STAGE: &str = "$skip";
const LIMIT_STAGE: &str = "$limit";

/// Query execution service
///
/// Stateless over the driver; every method takes a resolved profile and
/// opens its own short-lived client. `update_document`, `create_index`,
/// and `drop_index` are write operations for library consumers; the
/// bundled terminal UI surfaces the read paths only.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryService;

impl QueryService {
    /// Create a query service instance
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Execute user query text against a collection and return one page.
    ///
    /// The text is parsed and classified before any connection attempt.
    /// A shell-form query (`db.<coll>.find(...)`) overrides `collection`.
    pub async fn execute(
        &self,
        resolved: &ResolvedProfile,
        collection: &str,
        query_text: &str,
        projection_text: Option<&str>,
        page: u64,
        page_size: u64,
    ) -> CoreResult<ResultPage> {
        let input = query::parse(query_text, projection_text)?;
        let page_size = page_size.clamp(1, MAX_QUERY_LIMIT);

        let client = connect(resolved).await?;
        let db = client.database(&resolved.profile.database);
        let target = input.collection.as_deref().unwrap_or(collection);
        let coll = db.collection::<Document>(target);

        log::debug!(
            "Executing {} on {}.{} (page {page}, size {page_size})",
            input.spec.kind(),
            resolved.profile.database,
            target
        );

        let batch = match input.spec {
            QuerySpec::Find { filter, projection } => {
                run_find(&coll, filter, projection, page, page_size).await?
            }
            QuerySpec::Aggregate { pipeline } => {
                run_aggregate(&coll, pipeline, page, page_size).await?
            }
        };

        Ok(ResultPage::from_batch(batch, page, page_size))
    }

    /// List collection names in the profile's database, server order.
    pub async fn list_collections(&self, resolved: &ResolvedProfile) -> CoreResult<Vec<String>> {
        let client = connect(resolved).await?;
        client
            .database(&resolved.profile.database)
            .list_collection_names()
            .await
            .map_err(driver_error)
    }

    /// Fetch up to `limit` unfiltered documents for structural preview.
    pub async fn sample_documents(
        &self,
        resolved: &ResolvedProfile,
        collection: &str,
        limit: u64,
    ) -> CoreResult<Vec<Document>> {
        let limit = limit.clamp(1, MAX_QUERY_LIMIT);
        let client = connect(resolved).await?;
        let cursor = client
            .database(&resolved.profile.database)
            .collection::<Document>(collection)
            .find(doc! {})
            .limit(limit as i64)
            .await
            .map_err(driver_error)?;
        cursor.try_collect().await.map_err(driver_error)
    }

    /// Return the server's query plan for the given query text.
    pub async fn explain(
        &self,
        resolved: &ResolvedProfile,
        collection: &str,
        query_text: &str,
    ) -> CoreResult<Document> {
        let input = query::parse(query_text, None)?;
        let target = input.collection.as_deref().unwrap_or(collection);

        let explain_target = match input.spec {
            QuerySpec::Find { filter, .. } => doc! { "find": target, "filter": filter },
            QuerySpec::Aggregate { pipeline } => {
                let stages: Vec<Bson> = pipeline.into_iter().map(Bson::Document).collect();
                doc! { "aggregate": target, "pipeline": stages, "cursor": {} }
            }
        };

        let client = connect(resolved).await?;
        client
            .database(&resolved.profile.database)
            .run_command(doc! { "explain": explain_target, "verbosity": "queryPlanner" })
            .await
            .map_err(driver_error)
    }

    /// Replace a document by `_id`. Returns whether a document was modified.
    pub async fn update_document(
        &self,
        resolved: &ResolvedProfile,
        collection: &str,
        id: &str,
        replacement_text: &str,
    ) -> CoreResult<bool> {
        let replacement = query::parse_document(replacement_text)?;
        let client = connect(resolved).await?;
        let result = client
            .database(&resolved.profile.database)
            .collection::<Document>(collection)
            .replace_one(doc! { "_id": coerce_object_id(id) }, replacement)
            .await
            .map_err(driver_error)?;
        Ok(result.modified_count > 0)
    }

    /// List indexes of a collection as summary documents.
    pub async fn list_indexes(
        &self,
        resolved: &ResolvedProfile,
        collection: &str,
    ) -> CoreResult<Vec<Document>> {
        let client = connect(resolved).await?;
        let mut cursor = client
            .database(&resolved.profile.database)
            .collection::<Document>(collection)
            .list_indexes()
            .await
            .map_err(driver_error)?;

        let mut indexes = Vec::new();
        while let Some(model) = cursor.try_next().await.map_err(driver_error)? {
            indexes.push(index_summary(&model));
        }
        Ok(indexes)
    }

    /// Create an index. Returns the server-assigned index name.
    pub async fn create_index(
        &self,
        resolved: &ResolvedProfile,
        collection: &str,
        keys: Document,
        name: Option<String>,
        unique: bool,
    ) -> CoreResult<String> {
        let mut options = IndexOptions::default();
        options.name = name;
        options.unique = unique.then_some(true);

        let model = IndexModel::builder().keys(keys).options(options).build();

        let client = connect(resolved).await?;
        let result = client
            .database(&resolved.profile.database)
            .collection::<Document>(collection)
            .create_index(model)
            .await
            .map_err(driver_error)?;
        Ok(result.index_name)
    }

    /// Drop an index by name.
    pub async fn drop_index(
        &self,
        resolved: &ResolvedProfile,
        collection: &str,
        index_name: &str,
    ) -> CoreResult<()> {
        let client = connect(resolved).await?;
        client
            .database(&resolved.profile.database)
            .collection::<Document>(collection)
            .drop_index(index_name)
            .await
            .map_err(driver_error)
    }
}

/// Open a client for the profile and verify it with a ping.
///
/// Unreachable hosts and failed auth both surface as `ConnectionError`
/// within the bounded timeout.
pub(crate) async fn connect(resolved: &ResolvedProfile) -> CoreResult<Client> {
    let uri = build_connection_uri(resolved);

    let mut options = ClientOptions::parse(&uri)
        .await
        .map_err(|e| CoreError::ConnectionError(format!("invalid connection options: {e}")))?;
    options.app_name = Some("mongo-voyager".to_string());
    options.connect_timeout = Some(CONNECT_TIMEOUT);
    options.server_selection_timeout = Some(CONNECT_TIMEOUT);

    let client = Client::with_options(options)
        .map_err(|e| CoreError::ConnectionError(e.to_string()))?;

    client
        .database(&resolved.profile.database)
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| CoreError::ConnectionError(e.to_string()))?;

    Ok(client)
}

/// Build a `mongodb://` URI from a resolved profile, credentials URL-encoded.
fn build_connection_uri(resolved: &ResolvedProfile) -> String {
    let profile = &resolved.profile;
    let mut uri = String::from("mongodb://");

    let username = profile
        .username
        .as_deref()
        .filter(|u| !u.is_empty());
    if let Some(user) = username {
        uri.push_str(&urlencoding::encode(user));
        if !resolved.password.is_empty() {
            uri.push(':');
            uri.push_str(&urlencoding::encode(&resolved.password));
        }
        uri.push('@');
    }

    uri.push_str(&profile.host);
    uri.push(':');
    uri.push_str(&profile.port.to_string());
    uri.push('/');
    uri.push_str(&profile.database);

    let mut params = Vec::new();
    if username.is_some() {
        params.push("authSource=admin".to_string());
    }
    if profile.tls {
        params.push("tls=true".to_string());
    }
    if !params.is_empty() {
        uri.push('?');
        uri.push_str(&params.join("&"));
    }

    uri
}

/// Run a find with server-side skip/limit; one extra document is fetched to
/// detect `has_more`. A filter carrying its own `$skip`/`$limit` keys is
/// passed through with no pagination applied.
async fn run_find(
    coll: &Collection<Document>,
    filter: Document,
    projection: Option<Document>,
    page: u64,
    page_size: u64,
) -> CoreResult<Vec<Document>> {
    let paginate = filter_paginates(&filter);
    let mut find = coll.find(filter);
    if paginate {
        find = find.skip(page * page_size).limit(fetch_limit(page_size));
    }
    if let Some(projection) = projection {
        find = find.projection(projection);
    }
    let cursor = find.await.map_err(driver_error)?;
    cursor.try_collect().await.map_err(driver_error)
}

/// Skip/limit is applied only when the filter does not carry its own
/// `$skip`/`$limit` keys.
fn filter_paginates(filter: &Document) -> bool {
    !(filter.contains_key(SKIP_STAGE) || filter.contains_key(LIMIT_STAGE))
}

/// Run an aggregation. Pagination stages are appended only when the user
/// pipeline carries neither `$skip` nor `$limit`; otherwise the pipeline
/// runs unchanged and the page window is cut client-side, so user-intended
/// stage semantics are never altered.
async fn run_aggregate(
    coll: &Collection<Document>,
    mut pipeline: Vec<Document>,
    page: u64,
    page_size: u64,
) -> CoreResult<Vec<Document>> {
    let server_side = paginate_pipeline(&mut pipeline, page, page_size);

    let cursor = coll.aggregate(pipeline).await.map_err(driver_error)?;
    let documents: Vec<Document> = cursor.try_collect().await.map_err(driver_error)?;

    if server_side {
        return Ok(documents);
    }

    let start = usize::try_from(page * page_size)
        .unwrap_or(usize::MAX)
        .min(documents.len());
    let end = start
        .saturating_add(usize::try_from(fetch_limit(page_size)).unwrap_or(usize::MAX))
        .min(documents.len());
    Ok(documents[start..end].to_vec())
}

/// Append `$skip`/`$limit` when the pipeline has neither. Returns whether
/// server-side pagination was applied.
fn paginate_pipeline(pipeline: &mut Vec<Document>, page: u64, page_size: u64) -> bool {
    let has_skip = pipeline.iter().any(|stage| stage.contains_key(SKIP_STAGE));
    let has_limit = pipeline.iter().any(|stage| stage.contains_key(LIMIT_STAGE));
    if has_skip || has_limit {
        return false;
    }

    pipeline.push(doc! { SKIP_STAGE: (page * page_size) as i64 });
    pipeline.push(doc! { LIMIT_STAGE: fetch_limit(page_size) });
    true
}

/// Page size plus the one extra document that signals `has_more`.
fn fetch_limit(page_size: u64) -> i64 {
    i64::try_from(page_size.saturating_add(1)).unwrap_or(i64::MAX)
}

/// Interpret an id string as an `ObjectId` when it parses as one, else as a
/// plain string key.
fn coerce_object_id(id: &str) -> Bson {
    match ObjectId::parse_str(id) {
        Ok(oid) => Bson::ObjectId(oid),
        Err(_) => Bson::String(id.to_string()),
    }
}

/// Flatten a summary of an index model for display.
fn index_summary(model: &IndexModel) -> Document {
    let mut summary = Document::new();
    if let Some(options) = &model.options {
        if let Some(name) = &options.name {
            summary.insert("name", name.clone());
        }
        if let Some(unique) = options.unique {
            summary.insert("unique", unique);
        }
    }
    summary.insert("key", model.keys.clone());
    summary
}

/// Wrap a driver failure, server message verbatim.
fn driver_error(e: mongodb::error::Error) -> CoreError {
    CoreError::Driver(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConnectionProfile;

    fn resolved(username: Option<&str>, password: &str, tls: bool) -> ResolvedProfile {
        ResolvedProfile {
            profile: ConnectionProfile::new(
                "test",
                "db.example.com",
                27017,
                "appdb",
                username.map(str::to_string),
                tls,
            ),
            password: password.to_string(),
        }
    }

    #[test]
    fn uri_without_credentials() {
        let uri = build_connection_uri(&resolved(None, "", false));
        assert_eq!(uri, "mongodb://db.example.com:27017/appdb");
    }

    #[test]
    fn uri_with_credentials_sets_auth_source() {
        let uri = build_connection_uri(&resolved(Some("admin"), "pw", false));
        assert_eq!(
            uri,
            "mongodb://admin:pw@db.example.com:27017/appdb?authSource=admin"
        );
    }

    #[test]
    fn uri_encodes_reserved_characters() {
        let uri = build_connection_uri(&resolved(Some("user@corp"), "p@ss:word", false));
        assert!(uri.starts_with("mongodb://user%40corp:p%40ss%3Aword@"));
    }

    #[test]
    fn uri_with_tls_flag() {
        let uri = build_connection_uri(&resolved(None, "", true));
        assert_eq!(uri, "mongodb://db.example.com:27017/appdb?tls=true");
    }

    #[test]
    fn pipeline_pagination_appended_when_absent() {
        let mut pipeline = vec![doc! { "$match": { "status": "active" } }];
        let server_side = paginate_pipeline(&mut pipeline, 2, 10);

        assert!(server_side);
        assert_eq!(pipeline.len(), 3);
        assert_eq!(pipeline[1], doc! { "$skip": 20_i64 });
        assert_eq!(pipeline[2], doc! { "$limit": 11_i64 });
    }

    #[test]
    fn pipeline_with_own_limit_left_untouched() {
        let mut pipeline = vec![doc! { "$limit": 5 }];
        let server_side = paginate_pipeline(&mut pipeline, 0, 10);

        assert!(!server_side);
        assert_eq!(pipeline, vec![doc! { "$limit": 5 }]);
    }

    #[test]
    fn pipeline_with_own_skip_left_untouched() {
        let mut pipeline = vec![doc! { "$skip": 3 }, doc! { "$match": {} }];
        assert!(!paginate_pipeline(&mut pipeline, 1, 10));
        assert_eq!(pipeline.len(), 2);
    }

    #[test]
    fn plain_filter_paginates() {
        assert!(filter_paginates(&Document::new()));
        assert!(filter_paginates(&doc! { "status": "active" }));
    }

    #[test]
    fn filter_with_own_skip_or_limit_passes_through() {
        assert!(!filter_paginates(&doc! { "$skip": 5 }));
        assert!(!filter_paginates(&doc! { "$limit": 20, "status": "active" }));
    }

    #[test]
    fn index_summary_flattens_model() {
        let mut options = IndexOptions::default();
        options.name = Some("status_1".to_string());
        options.unique = Some(true);
        let model = IndexModel::builder()
            .keys(doc! { "status": 1 })
            .options(options)
            .build();

        let summary = index_summary(&model);
        assert_eq!(summary.get_str("name").unwrap(), "status_1");
        assert!(summary.get_bool("unique").unwrap());
        assert_eq!(summary.get_document("key").unwrap(), &doc! { "status": 1 });
    }

    #[test]
    fn index_summary_without_options_keeps_keys() {
        let model = IndexModel::builder().keys(doc! { "_id": 1 }).build();
        let summary = index_summary(&model);
        assert!(summary.get_str("name").is_err());
        assert_eq!(summary.get_document("key").unwrap(), &doc! { "_id": 1 });
    }

    #[test]
    fn object_id_coercion() {
        let hex = "507f1f77bcf86cd799439011";
        assert!(matches!(coerce_object_id(hex), Bson::ObjectId(_)));
        assert_eq!(
            coerce_object_id("plain-key"),
            Bson::String("plain-key".to_string())
        );
    }

    #[test]
    fn fetch_limit_is_page_size_plus_one() {
        assert_eq!(fetch_limit(10), 11);
        assert_eq!(fetch_limit(0), 1);
    }
}
