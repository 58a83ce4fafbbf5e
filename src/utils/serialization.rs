// JSON helpers shared by the CLI's print and verify commands
use crate::error::{ChainError, Result};
use serde::{de::DeserializeOwned, Serialize};

/// Serialize data to indented JSON for terminal output
pub fn serialize_pretty<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data)
        .map_err(|e| ChainError::Serialization(format!("Serialization failed: {e}")))
}

/// Deserialize data from JSON
pub fn deserialize<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text)
        .map_err(|e| ChainError::Serialization(format!("Deserialization failed: {e}")))
}
