//! Core chain functionality
//!
//! The digest function, the immutable block, and the append-only chain that
//! links blocks together.

pub mod block;
pub mod blockchain;
pub mod digest;

pub use block::{Block, BlockRecord, HashLinked, GENESIS_PREVIOUS_HASH};
pub use blockchain::{verify_blocks, Blockchain, BlockchainIterator};
pub use digest::{digest, digest_with, DigestEncoding};
