//! Transport abstraction the adapter consumes: a request, a raw response, and
//! a cancellable one-shot call that produces one or the other.

mod error;
mod http;
mod interceptor;
mod rejected;

pub use error::TransportError;
pub use http::HttpTransport;
pub use interceptor::{ApiKeyInterceptor, Interceptor};
pub use rejected::RejectedCall;

use async_trait::async_trait;
use reqwest::Method;
use url::Url;

/// An outgoing request. Only `GET` is issued by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: Url,
}

impl Request {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
        }
    }
}

/// A completed HTTP exchange: the status code and the full body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// A single request/response pair in flight on some transport.
///
/// A call can be executed once. Cancelling a call that is executing makes
/// `execute` resolve to [`TransportError::Canceled`]; cancelling before
/// execution makes it fail immediately. `clone_call` returns a fresh,
/// unexecuted call for the same request that shares no state with `self`.
#[async_trait]
pub trait Call: Send + Sync {
    /// The request as built by the caller, before interceptors run.
    fn request(&self) -> &Request;

    async fn execute(&self) -> Result<RawResponse, TransportError>;

    fn cancel(&self);

    fn is_canceled(&self) -> bool;

    fn is_executed(&self) -> bool;

    fn clone_call(&self) -> Box<dyn Call>;
}

/// Creates calls for requests. Implementations are shared process-wide and
/// must be safe for concurrent use.
pub trait CallFactory: Send + Sync {
    fn new_call(&self, request: Request) -> Box<dyn Call>;
}
