use crate::domain::command_id_deserializer::deserialize_command_id;
use crate::domain::command_type_deserializer::deserialize_command_type;
use serde::Deserialize;
use serde_json::Value;

/// A pending command as handed out by `GET /device/{id}/commands`.
///
/// Only `id` is checked when parsing. `type` and `bits` are kept loose so that commands this device cannot execute
/// are still accepted, and acknowledged.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Command {
    #[serde(deserialize_with = "deserialize_command_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_command_type")]
    pub r#type: Option<String>,
    pub code: Option<Value>,
    pub bits: Option<Value>,
}
