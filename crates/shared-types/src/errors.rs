//! # Error Types
//!
//! Derivations never fail. The only fallible edge in this crate is turning
//! bytes on disk into a snapshot.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a `WalletState` snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not a valid state tree.
    #[error("Malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}
