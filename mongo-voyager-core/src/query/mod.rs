//! Query text parsing and classification.
//!
//! Turns the raw text a user typed into a [`QueryInput`]: a JSON object
//! becomes a find filter, a JSON array becomes an aggregation pipeline, and
//! the shell forms `db.<collection>.find({...})` /
//! `db.<collection>.aggregate([...])` additionally carry the collection
//! name. Everything here is pure; no connection is opened until the text
//! has parsed and classified successfully.

mod relaxed;

pub use relaxed::make_json_compliant;

use bson::Document;
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::types::{QueryInput, QuerySpec};

/// Parse user query text into a classified query.
///
/// `projection_text` is the optional companion text area for find queries;
/// it must be a JSON object when present. An empty query text means
/// "match everything".
pub fn parse(query_text: &str, projection_text: Option<&str>) -> CoreResult<QueryInput> {
    let text = query_text.trim();

    // Shell form carries its own collection name.
    if let Some(shell) = extract_shell_form(text)? {
        return shell_to_input(shell, projection_text);
    }

    let spec = classify(text, projection_text)?;
    Ok(QueryInput {
        collection: None,
        spec,
    })
}

/// Parse text that must be a single JSON object, such as a replacement
/// document. Relaxed syntax is accepted here too.
pub fn parse_document(text: &str) -> CoreResult<Document> {
    let value = parse_json(text.trim())?;
    if !value.is_object() {
        return Err(CoreError::InvalidQueryShape(format!(
            "expected a JSON object, got {}",
            json_type_name(&value)
        )));
    }
    to_document(&value)
}

/// Classify plain (non-shell) query text.
fn classify(text: &str, projection_text: Option<&str>) -> CoreResult<QuerySpec> {
    if text.is_empty() {
        return Ok(QuerySpec::Find {
            filter: Document::new(),
            projection: parse_projection(projection_text)?,
        });
    }

    let value = parse_json(text)?;
    match value {
        Value::Object(_) => Ok(QuerySpec::Find {
            filter: to_document(&value)?,
            projection: parse_projection(projection_text)?,
        }),
        Value::Array(stages) => Ok(QuerySpec::Aggregate {
            pipeline: stages_to_documents(&stages)?,
        }),
        other => Err(CoreError::InvalidQueryShape(format!(
            "expected a JSON object (find) or array (pipeline), got {}",
            json_type_name(&other)
        ))),
    }
}

/// Parsed pieces of a `db.<collection>.<method>(<body>)` expression.
struct ShellForm<'a> {
    collection: String,
    method: &'a str,
    body: &'a str,
}

/// Recognize the shell form. Returns `Ok(None)` when the text does not
/// start with `db.`; malformed shell text is a parse error.
fn extract_shell_form(text: &str) -> CoreResult<Option<ShellForm<'_>>> {
    let Some(rest) = text.strip_prefix("db.") else {
        return Ok(None);
    };

    let malformed = || {
        CoreError::ParseError(
            "expected db.<collection>.find({...}) or db.<collection>.aggregate([...])".to_string(),
        )
    };

    let dot = rest.find('.').ok_or_else(malformed)?;
    let collection = &rest[..dot];
    if collection.is_empty() {
        return Err(malformed());
    }

    let call = &rest[dot + 1..];
    let open = call.find('(').ok_or_else(malformed)?;
    let close = call.rfind(')').ok_or_else(malformed)?;
    if close < open {
        return Err(malformed());
    }

    let method = call[..open].trim();
    let body = call[open + 1..close].trim();

    match method {
        "find" | "findOne" | "aggregate" => Ok(Some(ShellForm {
            collection: collection.to_string(),
            method,
            body,
        })),
        _ => Err(CoreError::InvalidQueryShape(format!(
            "unsupported shell method: {method}"
        ))),
    }
}

/// Turn a recognized shell form into a classified query.
fn shell_to_input(shell: ShellForm<'_>, projection_text: Option<&str>) -> CoreResult<QueryInput> {
    let spec = match shell.method {
        "aggregate" => {
            let value = parse_json(shell.body)?;
            let Value::Array(stages) = value else {
                return Err(CoreError::InvalidQueryShape(
                    "aggregate() takes a JSON array of stages".to_string(),
                ));
            };
            QuerySpec::Aggregate {
                pipeline: stages_to_documents(&stages)?,
            }
        }
        // find / findOne
        _ => {
            let filter = if shell.body.is_empty() {
                Document::new()
            } else {
                let value = parse_json(shell.body)?;
                if !value.is_object() {
                    return Err(CoreError::InvalidQueryShape(
                        "find() takes a JSON object filter".to_string(),
                    ));
                }
                to_document(&value)?
            };
            QuerySpec::Find {
                filter,
                projection: parse_projection(projection_text)?,
            }
        }
    };

    Ok(QueryInput {
        collection: Some(shell.collection),
        spec,
    })
}

/// Parse the optional projection text area.
fn parse_projection(projection_text: Option<&str>) -> CoreResult<Option<Document>> {
    let Some(text) = projection_text.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };
    let value = parse_json(text)?;
    if !value.is_object() {
        return Err(CoreError::InvalidQueryShape(
            "projection must be a JSON object".to_string(),
        ));
    }
    Ok(Some(to_document(&value)?))
}

/// Relaxed-syntax pass, then strict JSON parsing.
fn parse_json(text: &str) -> CoreResult<Value> {
    let compliant = make_json_compliant(text);
    serde_json::from_str(&compliant).map_err(|e| CoreError::ParseError(e.to_string()))
}

fn stages_to_documents(stages: &[Value]) -> CoreResult<Vec<Document>> {
    stages
        .iter()
        .map(|stage| {
            if stage.is_object() {
                to_document(stage)
            } else {
                Err(CoreError::InvalidQueryShape(format!(
                    "pipeline stages must be objects, got {}",
                    json_type_name(stage)
                )))
            }
        })
        .collect()
}

fn to_document(value: &Value) -> CoreResult<Document> {
    bson::to_document(value).map_err(|e| CoreError::SerializationError(e.to_string()))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn object_classifies_as_find() {
        let input = parse(r#"{"status": "active"}"#, None).unwrap();
        assert!(input.collection.is_none());
        assert_eq!(
            input.spec,
            QuerySpec::Find {
                filter: doc! { "status": "active" },
                projection: None,
            }
        );
    }

    #[test]
    fn array_classifies_as_aggregate() {
        let input = parse(r#"[{"$match": {"status": "active"}}]"#, None).unwrap();
        assert_eq!(
            input.spec,
            QuerySpec::Aggregate {
                pipeline: vec![doc! { "$match": { "status": "active" } }],
            }
        );
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse(r#"{"status":}"#, None).unwrap_err();
        assert!(matches!(err, CoreError::ParseError(_)));
    }

    #[test]
    fn scalar_is_invalid_shape() {
        let err = parse(r#""active""#, None).unwrap_err();
        assert!(matches!(err, CoreError::InvalidQueryShape(_)));
        let err = parse("42", None).unwrap_err();
        assert!(matches!(err, CoreError::InvalidQueryShape(_)));
    }

    #[test]
    fn empty_text_matches_everything() {
        let input = parse("", None).unwrap();
        assert_eq!(
            input.spec,
            QuerySpec::Find {
                filter: Document::new(),
                projection: None,
            }
        );
    }

    #[test]
    fn relaxed_keys_accepted() {
        let input = parse(r#"{status: "active", age: {$gt: 21}}"#, None).unwrap();
        let QuerySpec::Find { filter, .. } = input.spec else {
            panic!("expected find");
        };
        assert_eq!(filter.get_str("status").unwrap(), "active");
        assert_eq!(
            filter.get_document("age").unwrap().get_i64("$gt").unwrap(),
            21
        );
    }

    #[test]
    fn shell_find_carries_collection() {
        let input = parse(r#"db.users.find({name: "ann"})"#, None).unwrap();
        assert_eq!(input.collection.as_deref(), Some("users"));
        let QuerySpec::Find { filter, .. } = input.spec else {
            panic!("expected find");
        };
        assert_eq!(filter.get_str("name").unwrap(), "ann");
    }

    #[test]
    fn shell_find_empty_body() {
        let input = parse("db.users.find()", None).unwrap();
        assert_eq!(input.collection.as_deref(), Some("users"));
        assert_eq!(
            input.spec,
            QuerySpec::Find {
                filter: Document::new(),
                projection: None,
            }
        );
    }

    #[test]
    fn shell_aggregate_carries_collection() {
        let input = parse(r#"db.orders.aggregate([{$limit: 3}])"#, None).unwrap();
        assert_eq!(input.collection.as_deref(), Some("orders"));
        assert_eq!(
            input.spec,
            QuerySpec::Aggregate {
                pipeline: vec![doc! { "$limit": 3_i64 }],
            }
        );
    }

    #[test]
    fn shell_aggregate_with_object_body_rejected() {
        let err = parse(r#"db.orders.aggregate({$limit: 3})"#, None).unwrap_err();
        assert!(matches!(err, CoreError::InvalidQueryShape(_)));
    }

    #[test]
    fn shell_unknown_method_rejected() {
        let err = parse("db.users.drop()", None).unwrap_err();
        assert!(matches!(err, CoreError::InvalidQueryShape(_)));
    }

    #[test]
    fn shell_missing_parens_is_parse_error() {
        let err = parse("db.users.find", None).unwrap_err();
        assert!(matches!(err, CoreError::ParseError(_)));
    }

    #[test]
    fn projection_text_parsed_for_find() {
        let input = parse(r#"{status: "active"}"#, Some(r#"{name: 1, _id: 0}"#)).unwrap();
        let QuerySpec::Find { projection, .. } = input.spec else {
            panic!("expected find");
        };
        let proj = projection.unwrap();
        assert_eq!(proj.get_i64("name").unwrap(), 1);
        assert_eq!(proj.get_i64("_id").unwrap(), 0);
    }

    #[test]
    fn projection_must_be_object() {
        let err = parse(r#"{}"#, Some("[1, 2]")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidQueryShape(_)));
    }

    #[test]
    fn parse_document_accepts_relaxed_object() {
        let d = parse_document(r#"{name: "ann", age: 30}"#).unwrap();
        assert_eq!(d.get_str("name").unwrap(), "ann");
        assert_eq!(d.get_i64("age").unwrap(), 30);
    }

    #[test]
    fn parse_document_rejects_array() {
        let err = parse_document("[1]").unwrap_err();
        assert!(matches!(err, CoreError::InvalidQueryShape(_)));
    }

    #[test]
    fn pipeline_with_scalar_stage_rejected() {
        let err = parse(r#"[{"$limit": 1}, 42]"#, None).unwrap_err();
        assert!(matches!(err, CoreError::InvalidQueryShape(_)));
    }
}
