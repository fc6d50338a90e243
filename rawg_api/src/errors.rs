//! Error types for the API client.

/// Errors raised while configuring a [`Client`](crate::Client).
///
/// Request outcomes never surface here: they are folded into
/// [`ApiResponse`](crate::ApiResponse) by the adapter.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configured base URL could not be parsed or cannot carry a path.
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    /// No API key was supplied to the builder.
    #[error("An API key is required")]
    MissingApiKey,
    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client")]
    HttpClient(#[from] reqwest::Error),
}
