//! Error types for controller requests

use thiserror::Error;

/// Result type alias for controller operations
pub type Result<T> = std::result::Result<T, ControllerError>;

/// Errors that can occur while talking to the controller.
///
/// Every variant is fatal for a burn-in run.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Request could not complete (unreachable host, timeout, I/O)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Controller answered with a non-2xx status
    #[error("Controller error (status {status}) from {url}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
        /// Response body, if readable
        body: String,
    },

    /// Controller base URL is unusable
    #[error("Invalid controller URL '{url}': {message}")]
    InvalidBaseUrl {
        /// URL as given
        url: String,
        /// Why it was rejected
        message: String,
    },

    /// 2xx response whose body is not JSON
    #[error("Failed to decode response from {url}: {message}")]
    Decode {
        /// Requested URL
        url: String,
        /// Parser message
        message: String,
    },
}

impl ControllerError {
    /// Create a status error
    pub fn status(status: u16, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            url: url.into(),
            body: body.into(),
        }
    }

    /// HTTP status code, when the controller answered at all
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::InvalidBaseUrl { .. } | Self::Decode { .. } => None,
        }
    }

    /// Check if the request timed out
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
