//! The envelope wire format.
//!
//! An envelope is the single self-contained artifact produced by
//! encryption:
//!
//! ```text
//! base64url( salt[16] | nonce[16] | tag[16] | ciphertext[N] )
//! ```
//!
//! Field boundaries are fixed-width, so no delimiters are needed; the
//! decode path slices by offset. The base64 alphabet is URL-safe with
//! `=` padding, matching envelopes already stored in config files.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;

use super::kdf::SALT_LEN;
use crate::errors::{ConnVaultError, Result};

/// Length of the AES-GCM nonce in bytes. The format predates this
/// implementation and uses 16 bytes rather than the conventional 12;
/// see `EnvelopeCipher` for the rationale.
pub const NONCE_LEN: usize = 16;

/// Length of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Fixed-size header: salt + nonce + tag. A valid envelope is at least
/// this long even for empty plaintext.
pub const HEADER_LEN: usize = SALT_LEN + NONCE_LEN + TAG_LEN;

/// A decoded envelope: the typed form of the wire format above.
///
/// Immutable once produced — decrypt-and-re-encrypt always yields a
/// brand-new envelope with fresh salt and nonce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// KDF salt, random per encryption.
    pub salt: [u8; SALT_LEN],
    /// GCM nonce, random per encryption, paired 1:1 with the ciphertext.
    pub nonce: [u8; NONCE_LEN],
    /// GCM authentication tag over the ciphertext.
    pub tag: [u8; TAG_LEN],
    /// Encrypted, padded plaintext.
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    /// Serialize to the base64url text form.
    pub fn encode(&self) -> String {
        let mut raw = Vec::with_capacity(HEADER_LEN + self.ciphertext.len());
        raw.extend_from_slice(&self.salt);
        raw.extend_from_slice(&self.nonce);
        raw.extend_from_slice(&self.tag);
        raw.extend_from_slice(&self.ciphertext);
        URL_SAFE.encode(raw)
    }

    /// Parse the base64url text form back into its fields.
    ///
    /// Fails with `MalformedEnvelope` if the text is not valid base64
    /// or the decoded bytes cannot hold the fixed-size header.
    pub fn decode(encoded: &str) -> Result<Self> {
        let raw = URL_SAFE
            .decode(encoded.trim())
            .map_err(|e| ConnVaultError::MalformedEnvelope(format!("base64 decode: {e}")))?;

        if raw.len() < HEADER_LEN {
            return Err(ConnVaultError::MalformedEnvelope(format!(
                "decoded length {} is below the {HEADER_LEN}-byte header",
                raw.len()
            )));
        }

        // Slice by fixed offsets; safe after the length check above.
        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&raw[..SALT_LEN]);
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&raw[SALT_LEN..SALT_LEN + NONCE_LEN]);
        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(&raw[SALT_LEN + NONCE_LEN..HEADER_LEN]);

        Ok(Self {
            salt,
            nonce,
            tag,
            ciphertext: raw[HEADER_LEN..].to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Envelope {
        Envelope {
            salt: [0x11; SALT_LEN],
            nonce: [0x22; NONCE_LEN],
            tag: [0x33; TAG_LEN],
            ciphertext: vec![0xAA; 32],
        }
    }

    #[test]
    fn encode_decode_roundtrip() {
        let env = sample();
        let decoded = Envelope::decode(&env.encode()).unwrap();
        assert_eq!(decoded, env);
    }

    #[test]
    fn fields_land_at_fixed_offsets() {
        let encoded = sample().encode();
        let raw = URL_SAFE.decode(&encoded).unwrap();
        assert_eq!(&raw[..16], &[0x11; 16]);
        assert_eq!(&raw[16..32], &[0x22; 16]);
        assert_eq!(&raw[32..48], &[0x33; 16]);
        assert_eq!(&raw[48..], &[0xAA; 32]);
    }

    #[test]
    fn empty_ciphertext_is_representable() {
        let env = Envelope {
            ciphertext: Vec::new(),
            ..sample()
        };
        let decoded = Envelope::decode(&env.encode()).unwrap();
        assert!(decoded.ciphertext.is_empty());
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = Envelope::decode("not base64 at all!!!").unwrap_err();
        assert!(matches!(
            err,
            crate::errors::ConnVaultError::MalformedEnvelope(_)
        ));
    }

    #[test]
    fn rejects_short_input() {
        // 32 bytes decoded — shorter than the 48-byte header.
        let short = URL_SAFE.encode([0u8; 32]);
        let err = Envelope::decode(&short).unwrap_err();
        assert!(matches!(
            err,
            crate::errors::ConnVaultError::MalformedEnvelope(_)
        ));
    }
}
