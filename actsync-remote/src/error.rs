use thiserror::Error;

/// Error surface for remote API calls.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("{method} {url}: transport error: {message}")]
    Transport {
        method: &'static str,
        url: String,
        message: String,
    },

    #[error("{method} {url}: failed to read response body: {source}")]
    Body {
        method: &'static str,
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode request body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{method} {url} returned HTTP {status}: {body}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },
}

impl RemoteError {
    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
