//! The JSON config file holding the encrypted connection string.
//!
//! The file is a single object with one field:
//!
//! ```json
//! {"encrypted_string": "<base64url envelope>"}
//! ```
//!
//! The envelope text is opaque here — this module only moves it to and
//! from disk; all cryptography lives in [`crate::crypto`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConnVaultError, Result};

/// On-disk record wrapping one encrypted connection string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedConfig {
    /// The encoded envelope produced by `EnvelopeCipher::encrypt`.
    pub encrypted_string: String,
}

impl EncryptedConfig {
    /// Wrap an envelope for persistence.
    pub fn new(encrypted_string: String) -> Self {
        Self { encrypted_string }
    }

    /// Load and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConnVaultError::Config(format!(
                "config file not found at {}",
                path.display()
            )));
        }

        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| {
            ConnVaultError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }

    /// Write the config file, replacing any existing content.
    ///
    /// Writes to a temp file in the same directory and renames it over
    /// the target, so readers never see a half-written file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string(self)
            .map_err(|e| ConnVaultError::Serialization(e.to_string()))?;

        let parent = path.parent().unwrap_or(Path::new("."));
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            path.file_name().unwrap_or_default().to_string_lossy()
        ));

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_writes_single_field_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");

        EncryptedConfig::new("abc123".into()).save(&path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({"encrypted_string": "abc123"}));
    }

    #[test]
    fn load_roundtrips_save() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");

        EncryptedConfig::new("envelope-text".into())
            .save(&path)
            .unwrap();
        let loaded = EncryptedConfig::load(&path).unwrap();
        assert_eq!(loaded.encrypted_string, "envelope-text");
    }

    #[test]
    fn save_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");

        EncryptedConfig::new("old".into()).save(&path).unwrap();
        EncryptedConfig::new("new".into()).save(&path).unwrap();

        assert_eq!(EncryptedConfig::load(&path).unwrap().encrypted_string, "new");
    }

    #[test]
    fn load_errors_on_missing_file() {
        let tmp = TempDir::new().unwrap();
        let result = EncryptedConfig::load(&tmp.path().join("nope.json"));
        assert!(matches!(result, Err(ConnVaultError::Config(_))));
    }

    #[test]
    fn load_errors_on_invalid_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, "not json {{").unwrap();

        let result = EncryptedConfig::load(&path);
        assert!(matches!(result, Err(ConnVaultError::Config(_))));
    }
}
