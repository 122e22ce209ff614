//! # actsync-sync
//!
//! Per-folder sync orchestration.
//!
//! Call [`pipeline::run`] to sync a [`SyncScope`](pipeline::SyncScope), or
//! drive an [`Orchestrator`] directly with an explicit folder list.

pub mod error;
pub mod orchestrator;
pub mod pipeline;
pub mod report;

pub use error::SyncError;
pub use orchestrator::Orchestrator;
pub use report::{FolderOutcome, FolderStatus, RunReport};
