//! A call that fails without touching the network.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use super::{Call, RawResponse, Request, TransportError};

/// Stands in for a request that must never be sent. Executing it yields
/// [`TransportError::InvalidRequest`] with the stored reason.
pub struct RejectedCall {
    request: Request,
    reason: String,
    canceled: AtomicBool,
    executed: AtomicBool,
}

impl RejectedCall {
    pub fn new(request: Request, reason: impl Into<String>) -> Self {
        Self {
            request,
            reason: reason.into(),
            canceled: AtomicBool::new(false),
            executed: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl Call for RejectedCall {
    fn request(&self) -> &Request {
        &self.request
    }

    async fn execute(&self) -> Result<RawResponse, TransportError> {
        if self.executed.swap(true, Ordering::SeqCst) {
            return Err(TransportError::AlreadyExecuted);
        }
        if self.canceled.load(Ordering::SeqCst) {
            return Err(TransportError::Canceled);
        }
        Err(TransportError::InvalidRequest(self.reason.clone()))
    }

    fn cancel(&self) {
        self.canceled.store(true, Ordering::SeqCst);
    }

    fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::SeqCst)
    }

    fn is_executed(&self) -> bool {
        self.executed.load(Ordering::SeqCst)
    }

    fn clone_call(&self) -> Box<dyn Call> {
        Box::new(Self::new(self.request.clone(), self.reason.clone()))
    }
}
