//! Error types for actsync-core.

use std::path::PathBuf;

use thiserror::Error;

/// One or more required keys are absent from an action's `config.yaml`.
///
/// Always lists every missing key, in the order they are checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "invalid config.yaml in {folder}: missing required key(s): {}",
    .missing.join(", ")
)]
pub struct ValidationError {
    pub folder: String,
    pub missing: Vec<&'static str>,
}

/// All errors that can arise while assembling a sync payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The folder has no `config.yaml`.
    #[error("{folder}: config.yaml not found")]
    MissingConfig { folder: String },

    /// The folder has no `main.py`.
    #[error("{folder}: main.py not found")]
    MissingScript { folder: String },

    /// `config.yaml` exists but is not a YAML mapping.
    #[error("{folder}: invalid YAML in config.yaml: {message}")]
    InvalidYaml { folder: String, message: String },

    /// `config.yaml` parsed but required keys are missing.
    #[error(transparent)]
    InvalidConfig(#[from] ValidationError),

    /// Reading one of the folder's files failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PayloadError {
    /// Whether this error must abort the whole run rather than just the folder.
    pub fn is_fatal(&self) -> bool {
        matches!(self, PayloadError::InvalidConfig(_))
    }
}

/// Convenience constructor for [`PayloadError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> PayloadError {
    PayloadError::Io {
        path: path.into(),
        source,
    }
}
