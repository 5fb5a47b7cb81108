//! Error types for the collaborator boundary.
//!
//! The simulation itself cannot fail; everything here comes from the
//! terminal, the filesystem, or a malformed JSON file.

use std::path::PathBuf;

/// Errors raised outside the simulation core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Terminal or filesystem failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file exists but is not valid JSON for [`crate::Settings`].
    #[error("invalid settings file {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Records file exists but is not valid JSON for [`crate::LevelRecords`].
    #[error("invalid records file {path}: {source}")]
    Records {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing a value for disk failed.
    #[error("failed to encode {what}: {source}")]
    Encode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias for boundary operations.
pub type Result<T> = std::result::Result<T, Error>;
