//! Failures raised by a transport before any HTTP response exists.

use thiserror::Error;

/// A transport-level failure.
///
/// [`is_connectivity`](TransportError::is_connectivity) splits these into the
/// failures the adapter reports as `NetworkError` and the remainder, which it
/// reports as an `ApiError` without a status.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connect(#[source] reqwest::Error),
    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Call was canceled")]
    Canceled,
    #[error("Call has already been executed")]
    AlreadyExecuted,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl TransportError {
    /// Whether this failure means the server was never reached (or the
    /// exchange was cut off mid-flight).
    pub fn is_connectivity(&self) -> bool {
        match self {
            Self::Connect(_) | Self::Timeout(_) | Self::Io(_) | Self::Canceled => true,
            Self::Http(e) => !(e.is_builder() || e.is_redirect() || e.is_status()),
            Self::AlreadyExecuted | Self::InvalidRequest(_) => false,
        }
    }
}
