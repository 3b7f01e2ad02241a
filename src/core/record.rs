//! Record and collection types

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Field every stored record must carry
pub const ID_FIELD: &str = "id";

/// A schema-free record: an ordered map of JSON values
pub type Record = Map<String, Value>;

/// Records keyed by their identifier
pub type Collection = BTreeMap<String, Record>;

/// Collections keyed by name
pub type Collections = BTreeMap<String, Collection>;

/// Extract the key a record is stored under.
///
/// Empty strings, zero, booleans, `null`, arrays and objects do not count as
/// identifiers. Numbers are keyed by their JSON text, since object keys in the
/// backing file are always strings.
pub fn record_id(record: &Record) -> Option<String> {
    match record.get(ID_FIELD)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if !is_zero(n) => Some(n.to_string()),
        _ => None,
    }
}

fn is_zero(n: &serde_json::Number) -> bool {
    n.as_f64().map(|f| f == 0.0).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_string_id() {
        assert_eq!(
            record_id(&record(json!({"id": "abc", "x": 1}))),
            Some("abc".to_string())
        );
    }

    #[test]
    fn test_numeric_id_uses_json_text() {
        assert_eq!(record_id(&record(json!({"id": 7}))), Some("7".to_string()));
        assert_eq!(record_id(&record(json!({"id": 1.5}))), Some("1.5".to_string()));
    }

    #[test]
    fn test_unusable_ids() {
        for value in [
            json!({}),
            json!({"id": null}),
            json!({"id": ""}),
            json!({"id": 0}),
            json!({"id": 0.0}),
            json!({"id": true}),
            json!({"id": false}),
            json!({"id": ["a"]}),
            json!({"id": {"nested": 1}}),
            json!({"ID": "upper"}),
        ] {
            assert_eq!(record_id(&record(value.clone())), None, "{value}");
        }
    }
}
