//! `connvault encrypt` — encrypt a connection string into a config file.

use std::path::Path;

use crate::cli::{output, require_secret_key};
use crate::config::EncryptedConfig;
use crate::crypto::EnvelopeCipher;
use crate::errors::Result;

/// Execute the `encrypt` command.
pub fn execute(secret_key: Option<String>, config_path: &str, plaintext: &str) -> Result<()> {
    // Resolve the passphrase before touching anything else.
    let secret_key = require_secret_key(secret_key)?;

    let cipher = EnvelopeCipher::new(&secret_key);
    let envelope = cipher.encrypt(plaintext)?;

    // The config file is only written once the envelope is complete,
    // so a failed encryption never leaves a partial file behind.
    EncryptedConfig::new(envelope).save(Path::new(config_path))?;

    output::success(&format!(
        "Connection string encrypted and saved to {config_path}"
    ));
    output::tip("Recover it with: connvault decrypt <CONFIG>");

    Ok(())
}
