//! Passphrase-based AES-256-GCM envelope encryption.
//!
//! Each call to `encrypt` generates a fresh random salt and nonce,
//! derives a one-shot key via PBKDF2, and packs the result into the
//! [`Envelope`] wire format. `decrypt` re-derives the key from the
//! salt carried inside the envelope, so nothing but the passphrase is
//! needed to recover the plaintext.
//!
//! The nonce is 16 bytes rather than the conventional 12. GCM handles
//! either width (non-96-bit nonces go through GHASH, per NIST SP
//! 800-38D), and envelopes already on disk were written with 16, so
//! the width is kept for interoperability.

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Nonce};
use rand::TryRngCore;
use zeroize::Zeroizing;

use super::envelope::{Envelope, NONCE_LEN, TAG_LEN};
use super::kdf::{derive_key, generate_salt};
use super::padding::{pad, unpad};
use crate::errors::{ConnVaultError, Result};

/// AES-256-GCM parameterized with the format's 16-byte nonce.
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// Encrypts and decrypts text under a single passphrase.
///
/// Instances are lightweight and hold no state besides the passphrase;
/// every operation is an independent, stateless transform, so one
/// cipher can be shared freely across threads.
pub struct EnvelopeCipher {
    passphrase: Zeroizing<Vec<u8>>,
}

impl EnvelopeCipher {
    /// Create a cipher for the given passphrase.
    pub fn new(passphrase: &str) -> Self {
        Self {
            passphrase: Zeroizing::new(passphrase.as_bytes().to_vec()),
        }
    }

    /// Encrypt `plaintext` into an encoded envelope.
    ///
    /// Every call uses a fresh salt and nonce, so encrypting the same
    /// plaintext twice yields two different envelopes that both
    /// decrypt back to it.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let salt = generate_salt()?;
        let key = derive_key(&self.passphrase, &salt);

        let mut nonce = [0u8; NONCE_LEN];
        rand::rngs::OsRng
            .try_fill_bytes(&mut nonce)
            .map_err(|e| ConnVaultError::CryptoBackend(format!("OS RNG failure: {e}")))?;

        // Pad before encrypting: the format fixes the ciphertext length
        // to the padded-plaintext length.
        let padded = Zeroizing::new(pad(plaintext.as_bytes()));

        let cipher = build_cipher(key.as_slice())?;
        let mut ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce), padded.as_slice())
            .map_err(|e| ConnVaultError::CryptoBackend(format!("encryption error: {e}")))?;

        // The aead API appends the tag to the ciphertext; the wire
        // format carries it in the header instead.
        let tag_bytes = ciphertext.split_off(ciphertext.len() - TAG_LEN);
        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(&tag_bytes);

        Ok(Envelope {
            salt,
            nonce,
            tag,
            ciphertext,
        }
        .encode())
    }

    /// Decrypt an encoded envelope back into the original plaintext.
    ///
    /// Fails with `AuthenticationFailed` if the tag does not verify,
    /// which covers both a wrong passphrase and any mutation of the
    /// envelope contents. No plaintext is released in that case.
    pub fn decrypt(&self, encoded: &str) -> Result<String> {
        let envelope = Envelope::decode(encoded)?;

        // Same KDF parameters as encryption; the salt travelling in the
        // envelope makes the key reproducible without storing it.
        let key = derive_key(&self.passphrase, &envelope.salt);
        let cipher = build_cipher(key.as_slice())?;

        // Re-append the tag where the aead API expects it.
        let mut sealed = Vec::with_capacity(envelope.ciphertext.len() + TAG_LEN);
        sealed.extend_from_slice(&envelope.ciphertext);
        sealed.extend_from_slice(&envelope.tag);

        let padded = Zeroizing::new(
            cipher
                .decrypt(Nonce::from_slice(&envelope.nonce), sealed.as_slice())
                .map_err(|_| ConnVaultError::AuthenticationFailed)?,
        );

        let plaintext = unpad(&padded)?;
        String::from_utf8(plaintext).map_err(|e| ConnVaultError::Encoding(e.to_string()))
    }
}

/// Build the AES-256-GCM instance from raw key bytes.
fn build_cipher(key: &[u8]) -> Result<Aes256Gcm16> {
    Aes256Gcm16::new_from_slice(key)
        .map_err(|e| ConnVaultError::CryptoBackend(format!("invalid key length: {e}")))
}
