//! `connvault decrypt` — recover the connection string from a config file.
//!
//! Prints the plaintext to stdout so downstream tooling (the data
//! extraction pipeline) can consume it directly.

use std::path::Path;

use crate::cli::require_secret_key;
use crate::config::EncryptedConfig;
use crate::crypto::EnvelopeCipher;
use crate::errors::Result;

/// Execute the `decrypt` command.
pub fn execute(secret_key: Option<String>, config_path: &str) -> Result<()> {
    let secret_key = require_secret_key(secret_key)?;

    let config = EncryptedConfig::load(Path::new(config_path))?;

    let cipher = EnvelopeCipher::new(&secret_key);
    let plaintext = cipher.decrypt(&config.encrypted_string)?;

    println!("{plaintext}");

    Ok(())
}
