use crate::domain_model::*;
use crate::domain_port::TransportError;
use serde_json::Value;

/// Why a credential refresh failed. Carried by value to every waiter of the
/// same refresh, hence `Clone` with string-flattened causes.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshError {
    #[error("refresh endpoint rejected the credential (status {status})")]
    Rejected { status: u16 },
    #[error("refresh transport failure: {0}")]
    Transport(String),
    #[error("refresh response missing access credential")]
    MalformedResponse,
    #[error("refresh was interrupted before completion")]
    Interrupted,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("session refresh failed: {0}")]
    RefreshFailed(#[from] RefreshError),
    #[error("credential store error: {0}")]
    Store(String),
    #[error("unexpected response shape: {0}")]
    Decode(String),
    #[error("request failed with status {status}")]
    Status { status: u16, body: Value },
}

#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// The authenticated request surface every portal resource wrapper rides on.
///
/// `request` returns `Ok` for any response the server produced, including
/// statuses the caller must interpret itself; `Err` is reserved for
/// transport failures, credential-store failures and a failed refresh.
#[async_trait::async_trait]
pub trait ApiClient: Send + Sync {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<ApiResponse, ClientError>;

    /// Drop the local session: erase both credentials and the display cache.
    /// Navigation is the application's business, not this layer's.
    async fn logout(&self) -> Result<(), ClientError>;
}
