use crate::domain_model::*;
use crate::domain_port::*;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde_json::Value;
use std::sync::{Arc, Mutex};

type Handler =
    dyn Fn(ApiRequest) -> BoxFuture<'static, Result<ApiResponse, TransportError>> + Send + Sync;

/// Scripted in-process transport for demo binaries and tests.
///
/// Minimal fake implementation for basic use only: install a handler closure
/// and inspect the recorded request log. Extend when a scenario needs more.
pub struct FakeTransport {
    handler: Mutex<Arc<Handler>>,
    log: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self {
            handler: Mutex::new(Arc::new(|_| {
                async { Ok(ApiResponse::new(404, Value::Null)) }.boxed()
            })),
            log: Mutex::new(Vec::new()),
        }
    }

    pub fn set_handler<F, Fut>(&self, handler: F)
    where
        F: Fn(ApiRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ApiResponse, TransportError>> + Send + 'static,
    {
        *self.handler.lock().expect("fake handler poisoned") =
            Arc::new(move |req| handler(req).boxed());
    }

    /// Every request seen so far, in arrival order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.log.lock().expect("fake log poisoned").clone()
    }

    /// How many requests hit a URL ending with `suffix`.
    pub fn calls_to(&self, suffix: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.url.ends_with(suffix))
            .count()
    }
}

impl Default for FakeTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.log
            .lock()
            .expect("fake log poisoned")
            .push(request.clone());
        let handler = self.handler.lock().expect("fake handler poisoned").clone();
        handler(request.clone()).await
    }
}
