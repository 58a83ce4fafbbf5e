//! # typechain - an in-memory hash-linked block list
//!
//! Every block's hash is the SHA-256 of its predecessor's hash, its height
//! and its payload, so changing any block breaks every link after it.
//!
//! ## How the code is organized
//! - `core/`: the digest function, the immutable `Block`, and the `Blockchain`
//!   that appends blocks and hands out copies of them
//! - `config/`: digest encoding and log level from env vars or a TOML file
//! - `error/`: the crate error type
//! - `utils/`: SHA-256 / hex helpers and JSON serialization
//! - `cli/`: the `typechain` command-line interface
//!
//! ## Things to remember
//! - `Blockchain::list` returns a copy. Pushing into it never changes the chain.
//! - `Block` can only be built by hashing its fields. JSON is read into
//!   `BlockRecord`, which stays untrusted until verified.
//! - `append` holds the write lock for the whole read-tip, hash, push step,
//!   so cloned handles can append from different threads.
//! - The default digest joins fields with no separator. Use
//!   `DigestEncoding::Delimited` when field boundaries matter.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

#[cfg(test)]
pub mod testnet;

pub use cli::{load_settings, run_command, Command, Opt};
pub use config::{Config, FileSettings, GLOBAL_CONFIG};
pub use crate::core::{
    digest, digest_with, verify_blocks, Block, BlockRecord, Blockchain, BlockchainIterator,
    DigestEncoding, HashLinked, GENESIS_PREVIOUS_HASH,
};
pub use error::{ChainError, Result};
pub use utils::{is_hex_digest, sha256_digest, sha256_hex};
