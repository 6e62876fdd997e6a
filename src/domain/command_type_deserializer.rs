use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Keeps string type tags, anything else (a number, an object, `null`) becomes an unknown type.
pub fn deserialize_command_type<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(tag) => Ok(Some(tag)),
        _ => Ok(None),
    }
}
