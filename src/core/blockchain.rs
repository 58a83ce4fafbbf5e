// This is the heart of typechain - an append-only list of hash-linked blocks
// The chain lives in memory only and hands out copies, never its own Vec

use crate::config::Config;
use crate::core::{Block, DigestEncoding, HashLinked, GENESIS_PREVIOUS_HASH};
use crate::error::{ChainError, Result};
use crate::utils::is_hex_digest;
use log::{debug, info, warn};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Clone, Default)]
pub struct Blockchain {
    // Every clone shares the same blocks; all appends go through one write lock
    blocks: Arc<RwLock<Vec<Block>>>,
    encoding: DigestEncoding,
}

impl Blockchain {
    // When I want an empty chain using the concatenated digest
    pub fn new() -> Blockchain {
        Self::with_encoding(DigestEncoding::Concatenated)
    }

    pub fn with_encoding(encoding: DigestEncoding) -> Blockchain {
        info!("Creating empty chain with {encoding} digest encoding");
        Blockchain {
            blocks: Arc::new(RwLock::new(Vec::new())),
            encoding,
        }
    }

    // When I want the encoding picked by env vars or a settings file
    pub fn from_config(config: &Config) -> Result<Blockchain> {
        Ok(Self::with_encoding(config.get_digest_encoding()?))
    }

    // push is the only mutation, so a poisoned lock still guards a valid chain
    fn read_blocks(&self) -> RwLockReadGuard<'_, Vec<Block>> {
        self.blocks.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_blocks(&self) -> RwLockWriteGuard<'_, Vec<Block>> {
        self.blocks.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_encoding(&self) -> DigestEncoding {
        self.encoding
    }

    /// Append a new block carrying `payload` and return a copy of it.
    ///
    /// Reading the tip, hashing and pushing all happen under the write lock,
    /// so concurrent appends from cloned handles are serialized.
    pub fn append(&self, payload: impl Into<String>) -> Block {
        let mut blocks = self.write_blocks();

        let height = blocks.len() + 1;
        let previous_hash = match blocks.last() {
            Some(tip) => tip.get_hash().to_string(),
            None => GENESIS_PREVIOUS_HASH.to_string(),
        };

        let block = Block::new_block(previous_hash, height, payload.into(), self.encoding);
        debug!("Appended block {} at height {height}", block.get_hash());
        blocks.push(block.clone());
        block
    }

    /// A fresh copy of every block, oldest first. Changing it never touches the chain.
    pub fn list(&self) -> Vec<Block> {
        self.read_blocks().clone()
    }

    /// Block at a 0-based index, or `None` outside `[0, len)`
    pub fn get_block(&self, index: usize) -> Option<Block> {
        self.read_blocks().get(index).cloned()
    }

    /// Block at a 1-based height, or `None` for 0 or past the tip
    pub fn get_block_by_height(&self, height: usize) -> Option<Block> {
        height.checked_sub(1).and_then(|index| self.get_block(index))
    }

    pub fn len(&self) -> usize {
        self.read_blocks().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_blocks().is_empty()
    }

    // The hash the next block will link to ("" while the chain is empty)
    pub fn get_tip_hash(&self) -> String {
        self.read_blocks()
            .last()
            .map(|tip| tip.get_hash().to_string())
            .unwrap_or_else(|| GENESIS_PREVIOUS_HASH.to_string())
    }

    pub fn get_best_height(&self) -> usize {
        self.read_blocks().last().map_or(0, Block::get_height)
    }

    pub fn iterator(&self) -> BlockchainIterator {
        BlockchainIterator::new(self.list())
    }

    /// Check every link, height and hash in the chain
    pub fn verify_chain(&self) -> Result<()> {
        let blocks = self.read_blocks();
        match verify_blocks(blocks.as_slice(), self.encoding) {
            Ok(()) => {
                debug!("Verified {} blocks", blocks.len());
                Ok(())
            }
            Err(e) => {
                warn!("Chain verification failed: {e}");
                Err(e)
            }
        }
    }
}

/// Verify a sequence of blocks or untrusted records as if it were a whole chain, oldest first.
///
/// Reports the first block whose height is not its 1-based position, whose
/// previous hash does not match its predecessor, or whose stored hash differs
/// from its recomputed digest.
pub fn verify_blocks<B: HashLinked>(blocks: &[B], encoding: DigestEncoding) -> Result<()> {
    let mut expected_previous = GENESIS_PREVIOUS_HASH;

    for (index, block) in blocks.iter().enumerate() {
        let expected_height = index + 1;
        if block.get_height() != expected_height {
            return Err(ChainError::InvalidBlock(format!(
                "block at index {index} has height {}, expected {expected_height}",
                block.get_height()
            )));
        }

        if block.get_previous_hash() != expected_previous {
            return Err(ChainError::BrokenLink {
                height: expected_height,
                expected: expected_previous.to_string(),
                found: block.get_previous_hash().to_string(),
            });
        }

        if !is_hex_digest(block.get_hash()) {
            return Err(ChainError::InvalidBlock(format!(
                "malformed hash at height {expected_height}: {}",
                block.get_hash()
            )));
        }

        if !block.verify_hash(encoding) {
            return Err(ChainError::InvalidBlock(format!(
                "hash mismatch at height {expected_height}: stored {}",
                block.get_hash()
            )));
        }

        expected_previous = block.get_hash();
    }

    Ok(())
}

// Walks a snapshot of the chain from the tip back to the first block
pub struct BlockchainIterator {
    blocks: Vec<Block>,
}

impl BlockchainIterator {
    fn new(blocks: Vec<Block>) -> BlockchainIterator {
        BlockchainIterator { blocks }
    }
}

impl Iterator for BlockchainIterator {
    type Item = Block;

    fn next(&mut self) -> Option<Self::Item> {
        self.blocks.pop()
    }
}
