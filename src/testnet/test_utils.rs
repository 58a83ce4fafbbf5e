//! Test utilities for chain testing

use crate::core::{Block, Blockchain, DigestEncoding};

/// Payloads used when a test only needs "some" chain
pub const SAMPLE_PAYLOADS: [&str; 4] = ["first block", "second block", "third block", "fourth block"];

/// Create a chain with the default encoding holding `payloads` in order
pub fn create_test_blockchain(payloads: &[&str]) -> Blockchain {
    create_test_blockchain_with_encoding(payloads, DigestEncoding::Concatenated)
}

pub fn create_test_blockchain_with_encoding(
    payloads: &[&str],
    encoding: DigestEncoding,
) -> Blockchain {
    let blockchain = Blockchain::with_encoding(encoding);
    for payload in payloads {
        blockchain.append(*payload);
    }
    blockchain
}

/// The block the tamper demo tries to sneak into a listed copy
pub fn forged_block() -> Block {
    Block::new_block(
        "hacking test".to_string(),
        11111,
        "hacking data".to_string(),
        DigestEncoding::Concatenated,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_blockchain() {
        let blockchain = create_test_blockchain(&SAMPLE_PAYLOADS);
        assert_eq!(blockchain.len(), SAMPLE_PAYLOADS.len());
        assert!(blockchain.verify_chain().is_ok());
    }

    #[test]
    fn test_forged_block_is_self_consistent() {
        // Its hash matches its fields; only its position gives it away
        assert!(forged_block().verify_hash(DigestEncoding::Concatenated));
    }
}
