//! Block digest
//!
//! A block's identity is the SHA-256 of its previous hash, height and payload.
//! The default [`DigestEncoding::Concatenated`] joins the fields with no
//! separator, so field boundaries are ambiguous: `("", 1, "23")` and
//! `("", 12, "3")` hash the same input. [`DigestEncoding::Delimited`] puts a
//! `:` between the fields for callers that need to tell them apart.

use crate::error::ChainError;
use crate::utils::sha256_hex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestEncoding {
    /// `previous_hash ++ height ++ payload`
    #[default]
    Concatenated,
    /// `previous_hash ++ ":" ++ height ++ ":" ++ payload`
    Delimited,
}

impl DigestEncoding {
    fn preimage(&self, previous_hash: &str, height: usize, payload: &str) -> String {
        match self {
            DigestEncoding::Concatenated => format!("{previous_hash}{height}{payload}"),
            DigestEncoding::Delimited => format!("{previous_hash}:{height}:{payload}"),
        }
    }
}

impl FromStr for DigestEncoding {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "concatenated" => Ok(DigestEncoding::Concatenated),
            "delimited" => Ok(DigestEncoding::Delimited),
            _ => Err(ChainError::Config(format!(
                "Invalid digest encoding: {s}. Valid options: concatenated, delimited"
            ))),
        }
    }
}

impl fmt::Display for DigestEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestEncoding::Concatenated => write!(f, "concatenated"),
            DigestEncoding::Delimited => write!(f, "delimited"),
        }
    }
}

/// Digest of a block's fields using the concatenated encoding
pub fn digest(previous_hash: &str, height: usize, payload: &str) -> String {
    digest_with(DigestEncoding::Concatenated, previous_hash, height, payload)
}

pub fn digest_with(
    encoding: DigestEncoding,
    previous_hash: &str,
    height: usize,
    payload: &str,
) -> String {
    let preimage = encoding.preimage(previous_hash, height, payload);
    sha256_hex(preimage.as_bytes())
}
