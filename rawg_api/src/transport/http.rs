//! reqwest-backed transport.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{Call, CallFactory, Interceptor, RawResponse, Request, TransportError};

/// Issues calls on one pooled `reqwest::Client`.
///
/// Cloning is cheap; clones share the connection pool and the interceptor
/// chain. Interceptors run in the order they were added.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    interceptors: Arc<Vec<Arc<dyn Interceptor>>>,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            interceptors: Arc::new(Vec::new()),
        }
    }

    pub fn with_interceptor(mut self, interceptor: impl Interceptor + 'static) -> Self {
        Arc::make_mut(&mut self.interceptors).push(Arc::new(interceptor));
        self
    }
}

impl CallFactory for HttpTransport {
    fn new_call(&self, request: Request) -> Box<dyn Call> {
        Box::new(HttpCall {
            client: self.client.clone(),
            interceptors: Arc::clone(&self.interceptors),
            request,
            cancel: CancellationToken::new(),
            executed: AtomicBool::new(false),
        })
    }
}

struct HttpCall {
    client: reqwest::Client,
    interceptors: Arc<Vec<Arc<dyn Interceptor>>>,
    request: Request,
    cancel: CancellationToken,
    executed: AtomicBool,
}

#[async_trait]
impl Call for HttpCall {
    fn request(&self) -> &Request {
        &self.request
    }

    async fn execute(&self) -> Result<RawResponse, TransportError> {
        if self.executed.swap(true, Ordering::SeqCst) {
            return Err(TransportError::AlreadyExecuted);
        }
        if self.cancel.is_cancelled() {
            return Err(TransportError::Canceled);
        }

        let request = self
            .interceptors
            .iter()
            .fold(self.request.clone(), |request, interceptor| {
                interceptor.intercept(request)
            });

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                tracing::debug!("Request to {} canceled", self.request.url.path());
                Err(TransportError::Canceled)
            }
            result = send(&self.client, request) => result,
        }
    }

    fn cancel(&self) {
        self.cancel.cancel();
    }

    fn is_canceled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    fn is_executed(&self) -> bool {
        self.executed.load(Ordering::SeqCst)
    }

    fn clone_call(&self) -> Box<dyn Call> {
        Box::new(HttpCall {
            client: self.client.clone(),
            interceptors: Arc::clone(&self.interceptors),
            request: self.request.clone(),
            cancel: CancellationToken::new(),
            executed: AtomicBool::new(false),
        })
    }
}

async fn send(client: &reqwest::Client, request: Request) -> Result<RawResponse, TransportError> {
    // The full URL carries the API key, so only the path is logged.
    let path = request.url.path().to_string();
    tracing::debug!("GET {}", path);

    let resp = client
        .request(request.method, request.url)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| {
            tracing::debug!("Failed to send request to {}: {}", path, e);
            send_error(e)
        })?;

    let status = resp.status().as_u16();
    let body = resp.bytes().await.map_err(|e| {
        tracing::debug!("Failed to read response body from {}: {}", path, e);
        send_error(e)
    })?;

    Ok(RawResponse {
        status,
        body: body.to_vec(),
    })
}

fn send_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(e.without_url())
    } else if e.is_connect() {
        TransportError::Connect(e.without_url())
    } else {
        TransportError::Http(e.without_url())
    }
}
