use crate::core::digest::{digest_with, DigestEncoding};
use crate::error::{ChainError, Result};
use serde::{Deserialize, Serialize};

/// Previous hash recorded by the first block in a chain
pub const GENESIS_PREVIOUS_HASH: &str = "";

/// Read access shared by trusted blocks and untrusted records
pub trait HashLinked {
    fn get_hash(&self) -> &str;
    fn get_previous_hash(&self) -> &str;
    fn get_height(&self) -> usize;
    fn get_payload(&self) -> &str;

    /// Recompute the digest from the fields and compare it with the stored hash
    fn verify_hash(&self, encoding: DigestEncoding) -> bool {
        digest_with(
            encoding,
            self.get_previous_hash(),
            self.get_height(),
            self.get_payload(),
        ) == self.get_hash()
    }
}

// Only serializable: a Block's hash always comes from new_block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    hash: String,
    previous_hash: String,
    height: usize,
    payload: String,
}

impl Block {
    pub fn new_block(
        previous_hash: String,
        height: usize,
        payload: String,
        encoding: DigestEncoding,
    ) -> Block {
        let hash = digest_with(encoding, &previous_hash, height, &payload);
        Block {
            hash,
            previous_hash,
            height,
            payload,
        }
    }

    pub fn generate_genesis_block(payload: String, encoding: DigestEncoding) -> Block {
        Block::new_block(GENESIS_PREVIOUS_HASH.to_string(), 1, payload, encoding)
    }

    pub fn get_hash(&self) -> &str {
        self.hash.as_str()
    }

    pub fn get_previous_hash(&self) -> &str {
        self.previous_hash.as_str()
    }

    pub fn get_height(&self) -> usize {
        self.height
    }

    pub fn get_payload(&self) -> &str {
        self.payload.as_str()
    }

    pub fn verify_hash(&self, encoding: DigestEncoding) -> bool {
        HashLinked::verify_hash(self, encoding)
    }

    /// Block with an arbitrary stored hash (for testing only)
    #[cfg(test)]
    pub fn new_test_block(hash: &str, previous_hash: &str, height: usize, payload: &str) -> Block {
        Block {
            hash: hash.to_string(),
            previous_hash: previous_hash.to_string(),
            height,
            payload: payload.to_string(),
        }
    }
}

impl HashLinked for Block {
    fn get_hash(&self) -> &str {
        self.hash.as_str()
    }

    fn get_previous_hash(&self) -> &str {
        self.previous_hash.as_str()
    }

    fn get_height(&self) -> usize {
        self.height
    }

    fn get_payload(&self) -> &str {
        self.payload.as_str()
    }
}

/// A block as read from JSON. Nothing about it is trusted until it is
/// verified or turned into a [`Block`] with [`BlockRecord::into_block`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRecord {
    pub hash: String,
    pub previous_hash: String,
    pub height: usize,
    pub payload: String,
}

impl BlockRecord {
    /// Rebuild the block from its fields, failing if the stored hash is not the derived one
    pub fn into_block(self, encoding: DigestEncoding) -> Result<Block> {
        let block = Block::new_block(self.previous_hash, self.height, self.payload, encoding);
        if block.get_hash() != self.hash {
            return Err(ChainError::InvalidBlock(format!(
                "hash mismatch at height {}: stored {}",
                block.get_height(),
                self.hash
            )));
        }
        Ok(block)
    }
}

impl From<&Block> for BlockRecord {
    fn from(block: &Block) -> Self {
        BlockRecord {
            hash: block.hash.clone(),
            previous_hash: block.previous_hash.clone(),
            height: block.height,
            payload: block.payload.clone(),
        }
    }
}

impl HashLinked for BlockRecord {
    fn get_hash(&self) -> &str {
        self.hash.as_str()
    }

    fn get_previous_hash(&self) -> &str {
        self.previous_hash.as_str()
    }

    fn get_height(&self) -> usize {
        self.height
    }

    fn get_payload(&self) -> &str {
        self.payload.as_str()
    }
}
