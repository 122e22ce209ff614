//! Remote action API client.
//!
//! [`ActionApi`] is the seam the orchestrator drives; [`HttpActionClient`] is
//! the blocking HTTP implementation. Every request is a single synchronous
//! exchange with no retry and no timeout.

mod client;
mod error;
mod response;

use actsync_core::SyncPayload;

pub use client::{HttpActionClient, AUTH_TYPE, REFERER, RESOURCE_PATH};
pub use error::RemoteError;
pub use response::{extract_id, ApiResponse, ResponseBody};

/// Operations against the remote action registry.
pub trait ActionApi {
    /// Identifier of the action called `name`. Lookup failures are logged and
    /// reported as `None`, so the caller proceeds as if the action is new.
    fn find_by_name(&self, name: &str) -> Option<String>;

    /// Create an action from a full payload.
    fn create(&self, payload: &SyncPayload) -> Result<ApiResponse, RemoteError>;

    /// Update action `id` with a full or file-only payload.
    fn update(&self, id: &str, payload: &SyncPayload) -> Result<ApiResponse, RemoteError>;
}
