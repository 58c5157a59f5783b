//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is a fixed security parameter, not user input.
//! One million iterations makes brute-forcing a weak passphrase
//! expensive; the cost is paid once per encrypt or decrypt call.

use pbkdf2::pbkdf2_hmac;
use rand::TryRngCore;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::errors::{ConnVaultError, Result};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count. Envelopes do not record it, so both sides
/// of the wire format must agree on this value.
pub const PBKDF2_ITERATIONS: u32 = 1_000_000;

/// Derive a 32-byte key from a passphrase and salt.
///
/// The same passphrase + salt always produces the same key, which is
/// what lets `decrypt` re-derive the key from the salt carried inside
/// the envelope. The returned buffer is zeroed when dropped.
pub fn derive_key(passphrase: &[u8], salt: &[u8; SALT_LEN]) -> Zeroizing<[u8; KEY_LEN]> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(passphrase, salt, PBKDF2_ITERATIONS, &mut key[..]);
    key
}

/// Generate a cryptographically random 16-byte salt.
///
/// Fresh per encryption: the salt, not the passphrase, is what makes
/// each derived key unique.
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| ConnVaultError::CryptoBackend(format!("OS RNG failure: {e}")))?;
    Ok(salt)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: each derivation runs the full million iterations, so these
    // tests are deliberately few.

    #[test]
    fn same_inputs_same_key() {
        let salt = generate_salt().unwrap();
        let k1 = derive_key(b"correct-horse-battery", &salt);
        let k2 = derive_key(b"correct-horse-battery", &salt);
        assert_eq!(*k1, *k2, "same passphrase + salt must produce the same key");
    }

    #[test]
    fn different_salts_different_keys() {
        let k1 = derive_key(b"same-passphrase", &generate_salt().unwrap());
        let k2 = derive_key(b"same-passphrase", &generate_salt().unwrap());
        assert_ne!(*k1, *k2, "different salts must produce different keys");
    }

    #[test]
    fn salts_are_random() {
        assert_ne!(generate_salt().unwrap(), generate_salt().unwrap());
    }
}
