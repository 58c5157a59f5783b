//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use clap::Parser;
use zeroize::Zeroizing;

use crate::errors::{ConnVaultError, Result};

/// connvault CLI: encrypted connection-string config files.
#[derive(Parser)]
#[command(
    name = "connvault",
    about = "Keeps a database connection string encrypted at rest",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Passphrase for the envelope cipher (normally via SECRET_KEY)
    #[arg(long, env = "SECRET_KEY", hide_env_values = true, global = true)]
    pub secret_key: Option<String>,
}

/// All available subcommands. Clap makes the two modes mutually
/// exclusive and turns neither-or-both into a usage error.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt a connection string into a config file
    Encrypt {
        /// Path of the config file to write (overwritten if it exists)
        config: String,
        /// The connection string to encrypt
        plaintext: String,
    },

    /// Decrypt the connection string from a config file and print it
    Decrypt {
        /// Path of the config file to read
        config: String,
    },
}

/// Resolve the passphrase taken out of the parsed CLI arguments.
///
/// Consumes the parsed value so the `String` clap produced is moved
/// into the `Zeroizing` wrapper and wiped on drop, rather than a
/// clone of it. Absence is a startup-time fatal condition: the error
/// is raised before any cryptographic work begins, and `main` turns
/// it into a non-zero exit with the instructive message on
/// `MissingSecret`.
pub fn require_secret_key(secret_key: Option<String>) -> Result<Zeroizing<String>> {
    match secret_key {
        Some(key) if !key.is_empty() => Ok(Zeroizing::new(key)),
        _ => Err(ConnVaultError::MissingSecret),
    }
}
