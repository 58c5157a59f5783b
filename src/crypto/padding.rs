//! PKCS#7 padding for the 16-byte AES block.
//!
//! GCM itself accepts arbitrary-length input, but the wire format
//! fixes the ciphertext length to the padded-plaintext length, so the
//! padding step is part of the format, not of the security.

use crate::errors::{ConnVaultError, Result};

/// AES block size in bytes.
pub const BLOCK_LEN: usize = 16;

/// Pad `data` to a multiple of [`BLOCK_LEN`].
///
/// Always appends between 1 and 16 bytes, each holding the pad length,
/// so empty input becomes one full block of `0x10`.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_LEN - data.len() % BLOCK_LEN;
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Remove PKCS#7 padding, recovering the exact original bytes.
///
/// Fails with `InvalidPadding` if the input is empty, not block-sized,
/// or the trailing bytes do not form a valid pad. With an authenticated
/// cipher in front of this, a failure here means a logic bug rather
/// than tampering, but it is checked all the same.
pub fn unpad(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() || data.len() % BLOCK_LEN != 0 {
        return Err(ConnVaultError::InvalidPadding);
    }

    let pad_len = *data.last().ok_or(ConnVaultError::InvalidPadding)? as usize;
    if pad_len == 0 || pad_len > BLOCK_LEN || pad_len > data.len() {
        return Err(ConnVaultError::InvalidPadding);
    }

    let (body, padding) = data.split_at(data.len() - pad_len);
    if padding.iter().any(|&b| b as usize != pad_len) {
        return Err(ConnVaultError::InvalidPadding);
    }

    Ok(body.to_vec())
}
