//! Errors raised while loading a vault.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the vault decoder. Both are fatal; nothing is retried.
#[derive(Debug, Error)]
pub enum VaultError {
    /// The database file could not be opened or read.
    #[error("failed to open database {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Wrong passphrase, or the file is not a readable KeePass database.
    #[error("failed to decode database {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: keepass::error::DatabaseOpenError,
    },
}

/// A typed result for vault operations.
pub type Result<T> = std::result::Result<T, VaultError>;
