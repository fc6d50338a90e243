//! CLI subcommand implementations.

pub mod game;
pub mod games;
pub mod genres;
pub mod greet;

use anyhow::{anyhow, Result};
use rawg_api::{ApiResponse, ApiResult};

/// Unwraps a classified outcome, turning every failure variant into an
/// error that names the operation.
pub fn into_result<T>(operation: &str, outcome: ApiResult<T>) -> Result<T> {
    let response = outcome.map_err(|e| {
        tracing::error!("{}: unreadable response body: {}", operation, e.body_snippet());
        anyhow!("{} returned a body that could not be decoded: {}", operation, e)
    })?;

    match response {
        ApiResponse::Success(data) => Ok(data),
        ApiResponse::ApiError {
            status: Some(status),
        } => Err(anyhow!("{} was rejected with status {}", operation, status)),
        ApiResponse::ApiError { status: None } => {
            Err(anyhow!("{} failed before a response arrived", operation))
        }
        ApiResponse::NetworkError(e) => Err(anyhow!(
            "{} could not reach RAWG: {}",
            operation,
            error_chain(&e)
        )),
        ApiResponse::UnknownError(Some(e)) => Err(anyhow!("{} failed: {}", operation, e)),
        ApiResponse::UnknownError(None) => Err(anyhow!("{} failed", operation)),
    }
}

/// Renders an error and all of its sources, outermost first.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}
