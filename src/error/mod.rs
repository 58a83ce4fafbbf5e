//! Error handling for the chain
//!
//! Appending and listing never fail; these errors come from verification,
//! configuration and the CLI's file handling.

use std::fmt;

/// Result type alias for chain operations
pub type Result<T> = std::result::Result<T, ChainError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// A block whose hash or height does not match its contents
    InvalidBlock(String),
    /// A block whose previous hash does not point at its predecessor
    BrokenLink {
        height: usize,
        expected: String,
        found: String,
    },
    /// Lookup outside `[0, length)` where a value is required
    BlockNotFound { index: usize, length: usize },
    /// Configuration errors
    Config(String),
    /// Serialization/deserialization errors
    Serialization(String),
    /// File I/O errors
    Io(String),
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::InvalidBlock(msg) => write!(f, "Invalid block: {msg}"),
            ChainError::BrokenLink {
                height,
                expected,
                found,
            } => write!(
                f,
                "Broken link at height {height}: expected previous hash '{expected}', found '{found}'"
            ),
            ChainError::BlockNotFound { index, length } => {
                write!(f, "Block not found: index {index}, chain length {length}")
            }
            ChainError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ChainError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            ChainError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for ChainError {}

impl From<std::io::Error> for ChainError {
    fn from(err: std::io::Error) -> Self {
        ChainError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ChainError {
    fn from(err: serde_json::Error) -> Self {
        ChainError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ChainError {
    fn from(err: toml::de::Error) -> Self {
        ChainError::Config(err.to_string())
    }
}
