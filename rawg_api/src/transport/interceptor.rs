//! Request-rewriting hooks applied to every outgoing request.

use std::fmt;

use super::Request;

/// Rewrites a request just before it is sent.
pub trait Interceptor: Send + Sync {
    fn intercept(&self, request: Request) -> Request;
}

/// Appends the static `key` query parameter RAWG uses for authentication.
#[derive(Clone)]
pub struct ApiKeyInterceptor {
    key: String,
}

impl ApiKeyInterceptor {
    /// Query parameter name RAWG expects the key under.
    pub const PARAM: &'static str = "key";

    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl fmt::Debug for ApiKeyInterceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyInterceptor")
            .field("key", &"<redacted>")
            .finish()
    }
}

impl Interceptor for ApiKeyInterceptor {
    fn intercept(&self, mut request: Request) -> Request {
        request
            .url
            .query_pairs_mut()
            .append_pair(Self::PARAM, &self.key);
        request
    }
}
