use data_encoding::HEXLOWER;
use ring::digest::{Context, SHA256};

/// Length of a SHA-256 digest rendered as lowercase hex
pub const SHA256_HEX_LEN: usize = 64;

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

pub fn sha256_hex(data: &[u8]) -> String {
    HEXLOWER.encode(sha256_digest(data).as_slice())
}

/// Whether `value` looks like a digest produced by [`sha256_hex`]
pub fn is_hex_digest(value: &str) -> bool {
    value.len() == SHA256_HEX_LEN && HEXLOWER.decode(value.as_bytes()).is_ok()
}
