//! Utility functions and helpers
//!
//! Hashing and hex encoding used by the digest function, plus the JSON
//! helpers the CLI uses to print and read back blocks.

pub mod crypto;
pub mod serialization;

pub use crypto::{is_hex_digest, sha256_digest, sha256_hex, SHA256_HEX_LEN};

pub use serialization::{deserialize, serialize_pretty};
