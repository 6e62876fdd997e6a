use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Accepts both string and numeric command ids, backends tend to use either.
pub fn deserialize_command_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    match RawId::deserialize(deserializer) {
        Ok(RawId::Text(id)) if id.is_empty() => Err(Error::custom("command id must not be empty")),
        Ok(RawId::Text(id)) if id == "." || id == ".." => Err(Error::custom(format!("command id '{}' cannot be addressed", id))),
        Ok(RawId::Text(id)) => Ok(id),
        Ok(RawId::Number(id)) => Ok(id.to_string()),
        Err(_) => Err(Error::custom("command id must be a string or a non-negative integer")),
    }
}
