use thiserror::Error;

/// All errors that can occur in connvault.
#[derive(Debug, Error)]
pub enum ConnVaultError {
    // --- Secret input ---
    #[error(
        "SECRET_KEY is not set — export it in your environment (export SECRET_KEY=<passphrase>) or pass --secret-key"
    )]
    MissingSecret,

    // --- Envelope errors ---
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("Authentication failed — wrong passphrase or tampered envelope")]
    AuthenticationFailed,

    #[error("Invalid padding in decrypted data")]
    InvalidPadding,

    #[error("Decrypted data is not valid UTF-8: {0}")]
    Encoding(String),

    #[error("Crypto backend error: {0}")]
    CryptoBackend(String),

    // --- Config file errors ---
    #[error("Config file error: {0}")]
    Config(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience type alias for connvault results.
pub type Result<T> = std::result::Result<T, ConnVaultError>;
