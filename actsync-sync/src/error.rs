//! Error types for actsync-sync.

use thiserror::Error;

use actsync_core::{PayloadError, ValidationError};

use crate::report::RunReport;

/// Errors that abort a whole run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A folder's `config.yaml` is missing required keys. `report` holds the
    /// outcomes of every folder processed up to and including the failing one.
    #[error("validation failed for {}", source.folder)]
    ValidationFailed {
        #[source]
        source: ValidationError,
        report: RunReport,
    },

    /// Listing the actions root failed.
    #[error("failed to list action folders: {0}")]
    Discover(#[source] PayloadError),
}

impl SyncError {
    /// Outcomes gathered before the run stopped, if any.
    pub fn partial_report(&self) -> Option<&RunReport> {
        match self {
            SyncError::ValidationFailed { report, .. } => Some(report),
            SyncError::Discover(_) => None,
        }
    }
}
