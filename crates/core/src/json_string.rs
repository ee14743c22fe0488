//! Serde adapter for fields persisted as JSON-encoded strings.
//!
//! Document and template `content` is stored double-encoded: the collection
//! is a JSON array and each `content` inside it is itself a JSON string.
//! Use with `#[serde(with = "crate::json_string")]`.
//!
//! Deserialization also accepts an already-decoded JSON value so that API
//! payloads and hand-edited stores both load.

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    let encoded = serde_json::to_string(value).map_err(S::Error::custom)?;
    serializer.serialize_str(&encoded)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: DeserializeOwned,
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(encoded) => serde_json::from_str(&encoded).map_err(D::Error::custom),
        decoded => serde_json::from_value(decoded).map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        content: serde_json::Value,
    }

    #[test]
    fn serializes_as_string() {
        let w = Wrapper {
            content: json!({"says": "It's slow"}),
        };
        let encoded = serde_json::to_value(&w).unwrap();
        assert_eq!(encoded["content"], json!("{\"says\":\"It's slow\"}"));
    }

    #[test]
    fn accepts_encoded_string() {
        let w: Wrapper = serde_json::from_value(json!({"content": "{\"a\":[1,2]}"})).unwrap();
        assert_eq!(w.content, json!({"a": [1, 2]}));
    }

    #[test]
    fn accepts_decoded_object() {
        let w: Wrapper = serde_json::from_value(json!({"content": {"a": true}})).unwrap();
        assert_eq!(w.content, json!({"a": true}));
    }

    #[test]
    fn rejects_malformed_string() {
        let result: Result<Wrapper, _> = serde_json::from_value(json!({"content": "{not json"}));
        assert!(result.is_err());
    }
}
