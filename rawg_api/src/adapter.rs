//! Wraps a transport [`Call`] so that its outcome is always an [`ApiResponse`].

use std::{fmt, sync::Arc};

use tokio::task::JoinHandle;

use crate::{
    json::{DecodeError, Decoder},
    transport::{Call, RawResponse, Request, TransportError},
    ApiResponse,
};

/// A call whose completion is classified into an [`ApiResponse<T>`].
///
/// Transport failures and non-2xx statuses become values. The only `Err` a
/// caller can see is a [`DecodeError`] for a 2xx body that does not decode
/// into `T`; the adapter never reports those as API errors.
pub struct ApiResponseCall<T> {
    inner: Arc<dyn Call>,
    decode: Decoder<T>,
}

impl<T> ApiResponseCall<T> {
    pub fn new(inner: Box<dyn Call>, decode: Decoder<T>) -> Self {
        Self {
            inner: Arc::from(inner),
            decode,
        }
    }

    /// Runs the call and classifies its outcome.
    pub async fn execute(&self) -> Result<ApiResponse<T>, DecodeError> {
        run(self.inner.as_ref(), self.decode).await
    }

    pub fn request(&self) -> &Request {
        self.inner.request()
    }

    /// Cancels the call, including one already handed to [`enqueue`](Self::enqueue).
    pub fn cancel(&self) {
        self.inner.cancel();
    }

    pub fn is_canceled(&self) -> bool {
        self.inner.is_canceled()
    }

    pub fn is_executed(&self) -> bool {
        self.inner.is_executed()
    }
}

impl<T: Send + 'static> ApiResponseCall<T> {
    /// Runs the call on the current tokio runtime and hands the outcome to
    /// `callback` exactly once.
    ///
    /// The spawned task shares this call, so [`cancel`](Self::cancel) still
    /// reaches the transport and the callback receives
    /// `NetworkError(Canceled)`. Aborting the returned handle instead drops
    /// the request and skips the callback.
    pub fn enqueue<F>(&self, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<ApiResponse<T>, DecodeError>) + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        let decode = self.decode;
        tokio::spawn(async move {
            let outcome = run(inner.as_ref(), decode).await;
            callback(outcome);
        })
    }
}

impl<T> Clone for ApiResponseCall<T> {
    /// Returns an independent, unexecuted call for the same request.
    fn clone(&self) -> Self {
        Self {
            inner: Arc::from(self.inner.clone_call()),
            decode: self.decode,
        }
    }
}

impl<T> fmt::Debug for ApiResponseCall<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiResponseCall")
            .field("path", &self.inner.request().url.path())
            .field("executed", &self.inner.is_executed())
            .field("canceled", &self.inner.is_canceled())
            .finish()
    }
}

async fn run<T>(call: &dyn Call, decode: Decoder<T>) -> Result<ApiResponse<T>, DecodeError> {
    match call.execute().await {
        Ok(response) => classify_response(response, decode, call.request()),
        Err(e) => Ok(classify_failure(e, call.request())),
    }
}

fn classify_response<T>(
    response: RawResponse,
    decode: Decoder<T>,
    request: &Request,
) -> Result<ApiResponse<T>, DecodeError> {
    if (200..300).contains(&response.status) {
        let data = decode(&response.body).map_err(|e| {
            tracing::error!(
                "Failed to decode response from {}: {} | body: {}",
                request.url.path(),
                e,
                e.body_snippet()
            );
            e
        })?;
        tracing::debug!("{} {}", response.status, request.url.path());
        Ok(ApiResponse::Success(data))
    } else {
        tracing::warn!(
            "Request to {} failed with status {}",
            request.url.path(),
            response.status
        );
        Ok(ApiResponse::ApiError {
            status: Some(response.status),
        })
    }
}

fn classify_failure<T>(error: TransportError, request: &Request) -> ApiResponse<T> {
    if error.is_connectivity() {
        tracing::warn!("Network error for {}: {}", request.url.path(), error);
        ApiResponse::NetworkError(error)
    } else {
        tracing::warn!(
            "Request to {} failed without a response: {}",
            request.url.path(),
            error
        );
        ApiResponse::ApiError { status: None }
    }
}
