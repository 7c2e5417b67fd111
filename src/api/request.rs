//! Request types for the payroll records API.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde_json::{Map, Value};
use tracing::warn;

/// Query string accepted by `GET /employees`.
///
/// `dept_id` stays textual here so a malformed value can be reported as a
/// validation error instead of an extractor rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEmployeesQuery {
    /// Optional department filter.
    pub dept_id: Option<String>,
}

impl ListEmployeesQuery {
    /// Builds the query from raw key/value pairs.
    ///
    /// A repeated `dept_id` keeps its first value; other keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let dept_id = pairs
            .into_iter()
            .find(|(key, _)| key == "dept_id")
            .map(|(_, value)| value);
        Self { dept_id }
    }
}

/// Reduces a JSON body to the object the employee operations work on.
///
/// A missing, malformed, or non-object body becomes an empty map, which the
/// create and update validators then reject with their own messages.
pub fn body_object(payload: Result<Json<Value>, JsonRejection>) -> Map<String, Value> {
    match payload {
        Ok(Json(Value::Object(map))) => map,
        Ok(Json(other)) => {
            warn!(kind = json_kind(&other), "Request body is not a JSON object");
            Map::new()
        }
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Unreadable request body");
            Map::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_body_is_kept() {
        let map = body_object(Ok(Json(json!({"age": 3}))));
        assert_eq!(map.get("age"), Some(&json!(3)));
    }

    #[test]
    fn test_non_object_body_becomes_empty() {
        assert!(body_object(Ok(Json(json!([1, 2])))).is_empty());
        assert!(body_object(Ok(Json(json!(null)))).is_empty());
    }

    #[test]
    fn test_query_takes_first_dept_id() {
        let pairs = vec![
            ("page".to_string(), "3".to_string()),
            ("dept_id".to_string(), "1".to_string()),
            ("dept_id".to_string(), "2".to_string()),
        ];
        let query = ListEmployeesQuery::from_pairs(pairs);
        assert_eq!(query.dept_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_query_without_dept_id() {
        let query = ListEmployeesQuery::from_pairs(vec![("x".to_string(), "1".to_string())]);
        assert_eq!(query, ListEmployeesQuery::default());
    }
}
