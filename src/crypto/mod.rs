//! Cryptographic primitives for connvault.
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - The salt/nonce/tag/ciphertext wire record (`envelope`)
//! - PKCS#7 block padding (`padding`)
//! - The passphrase-based AES-256-GCM cipher (`cipher`)

pub mod cipher;
pub mod envelope;
pub mod kdf;
pub mod padding;

// Re-export the most commonly used items so callers can write:
//   use connvault::crypto::{EnvelopeCipher, Envelope};
pub use cipher::EnvelopeCipher;
pub use envelope::Envelope;
