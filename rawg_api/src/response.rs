//! The four-way outcome of every API call.

use crate::transport::TransportError;

/// Boxed error carried by [`ApiResponse::UnknownError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome of a completed call.
///
/// Exactly one variant describes each call. Transport failures never escape
/// as `Err`: they land in `NetworkError` or `ApiError { status: None }`.
#[derive(Debug)]
pub enum ApiResponse<T> {
    /// The server answered with a 2xx status and the body decoded into `T`.
    Success(T),
    /// The server answered with a non-2xx status, or a non-connectivity
    /// transport fault left the status unknown (`None`).
    ApiError { status: Option<u16> },
    /// The transport failed before a response was obtained.
    NetworkError(TransportError),
    /// A failure fitting neither category above. The adapter never builds
    /// this variant; it exists for callers that need to report their own.
    UnknownError(Option<BoxError>),
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The decoded payload, discarding any failure detail.
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::ApiError { .. } | Self::NetworkError(_) | Self::UnknownError(_) => None,
        }
    }

    /// The HTTP status, if the server answered with a non-2xx one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status } => *status,
            Self::Success(_) | Self::NetworkError(_) | Self::UnknownError(_) => None,
        }
    }

    /// Maps the success payload, leaving every failure untouched.
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(data) => ApiResponse::Success(f(data)),
            Self::ApiError { status } => ApiResponse::ApiError { status },
            Self::NetworkError(e) => ApiResponse::NetworkError(e),
            Self::UnknownError(e) => ApiResponse::UnknownError(e),
        }
    }
}
