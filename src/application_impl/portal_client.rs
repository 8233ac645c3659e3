use crate::application_impl::{Admission, RefreshGate};
use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use serde_json::{Value, json};
use std::sync::Arc;

/// Relative path of the credential refresh endpoint. Requests addressed to
/// it never enter the retry protocol themselves.
pub const REFRESH_PATH: &str = "auth/refresh/";

/// Authenticated HTTP client for the portal REST API.
///
/// Injects the stored bearer credential into every call and recovers exactly
/// one failure mode locally: an expired access credential while a usable
/// refresh credential is stored. However many requests hit 401 concurrently,
/// a single refresh call is made and each request is replayed once against
/// its outcome. An unrecoverable refresh tears the local session down.
pub struct PortalClient {
    base_url: String,
    demo: DemoPolicy,
    transport: Arc<dyn Transport>,
    store: Arc<dyn CredentialStore>,
    cache: Arc<dyn ResponseCache>,
    observer: Arc<dyn SessionObserver>,
    gate: RefreshGate,
}

impl PortalClient {
    pub fn new(
        base_url: impl Into<String>,
        demo: DemoPolicy,
        transport: Arc<dyn Transport>,
        store: Arc<dyn CredentialStore>,
        cache: Arc<dyn ResponseCache>,
        observer: Arc<dyn SessionObserver>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            demo,
            transport,
            store,
            cache,
            observer,
            gate: RefreshGate::new(),
        }
    }

    fn is_refresh_path(path: &str) -> bool {
        path.trim_matches('/') == REFRESH_PATH.trim_end_matches('/')
    }

    fn build_url(&self, path: &str, query: &[(String, String)]) -> String {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        for (i, (name, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&encode_component(name));
            url.push('=');
            url.push_str(&encode_component(value));
        }
        url
    }

    /// The stored access credential, unless it is a demo sentinel — demo
    /// mode sends no bearer header at all.
    async fn bearer(&self) -> Result<Option<String>, ClientError> {
        Ok(self
            .store
            .get(CredentialKey::Access)
            .await?
            .filter(|token| !self.demo.is_demo(token)))
    }

    async fn refreshable_credential(&self) -> Result<Option<String>, ClientError> {
        Ok(self
            .store
            .get(CredentialKey::Refresh)
            .await?
            .filter(|token| self.demo.is_refreshable(token)))
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        bearer: Option<&str>,
        options: &RequestOptions,
    ) -> Result<ApiResponse, TransportError> {
        let request_id = uuid::Uuid::new_v4();
        let mut request = ApiRequest::new(method, self.build_url(path, &options.query))
            .with_header("X-Request-Id", request_id.to_string());
        for (name, value) in &options.headers {
            request = request.with_header(name.clone(), value.clone());
        }
        if let Some(token) = bearer {
            request = request.with_header("Authorization", format!("Bearer {token}"));
        }
        if let Some(body) = body {
            request = request.with_body(body.clone());
        }

        tracing::debug!(%request_id, %method, path, "dispatching portal request");
        let response = self.transport.send(&request).await?;
        tracing::debug!(%request_id, status = response.status, "portal response");
        Ok(response)
    }

    /// One POST to the refresh endpoint. No bearer header: the refresh
    /// credential travels in the body.
    async fn exchange_refresh(&self, refresh: &str) -> Result<AccessToken, RefreshError> {
        let request = ApiRequest::new(Method::Post, format!("{}/{}", self.base_url, REFRESH_PATH))
            .with_body(json!({ "refresh": refresh }));
        let response = self
            .transport
            .send(&request)
            .await
            .map_err(|e| RefreshError::Transport(e.to_string()))?;
        if !response.is_success() {
            return Err(RefreshError::Rejected {
                status: response.status,
            });
        }
        match response.body.get("access").and_then(Value::as_str) {
            Some(access) => Ok(AccessToken(access.to_string())),
            None => Err(RefreshError::MalformedResponse),
        }
    }

    /// Refresh failure is fatal for the session: wipe local state and signal
    /// the application, unless it already sits at the login entry point.
    async fn teardown_session(&self) {
        if let Err(err) = self.store.clear().await {
            tracing::warn!(%err, "failed to clear credential store during teardown");
        }
        self.cache.clear();
        if self.observer.at_login() {
            tracing::debug!("already at login entry; skipping invalidation signal");
        } else {
            self.observer.session_invalidated().await;
        }
    }
}

#[async_trait::async_trait]
impl ApiClient for PortalClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let bearer = self.bearer().await?;
        let first = self
            .dispatch(method, path, body.as_ref(), bearer.as_deref(), &options)
            .await?;

        match first.status {
            401 => {}
            403 => {
                tracing::warn!(path, "forbidden: current role may not access this resource");
                return Ok(first);
            }
            _ => return Ok(first),
        }

        // 401 handling. Ineligible cases surface the response unchanged.
        if Self::is_refresh_path(path) {
            return Ok(first);
        }
        let Some(refresh) = self.refreshable_credential().await? else {
            return Ok(first);
        };

        match self.gate.admit() {
            Admission::Waiter(rx) => {
                let outcome = rx.await.unwrap_or(Err(RefreshError::Interrupted));
                let access = outcome.map_err(ClientError::RefreshFailed)?;
                // Replay once with the fresh credential; a second 401 is
                // final and never re-enters the protocol.
                let replay = self
                    .dispatch(method, path, body.as_ref(), Some(&access.0), &options)
                    .await?;
                Ok(replay)
            }
            Admission::Leader => {
                tracing::info!("access credential expired; refreshing session");
                match self.exchange_refresh(&refresh).await {
                    Ok(access) => {
                        let persisted = self.store.set(CredentialKey::Access, &access.0).await;
                        // Waiters carry the token by value, so they are
                        // released even if persistence failed.
                        self.gate.complete(Ok(access.clone()));
                        persisted?;
                        let replay = self
                            .dispatch(method, path, body.as_ref(), Some(&access.0), &options)
                            .await?;
                        Ok(replay)
                    }
                    Err(err) => {
                        tracing::warn!(%err, "session refresh failed; tearing down local session");
                        self.gate.complete(Err(err.clone()));
                        self.teardown_session().await;
                        Err(ClientError::RefreshFailed(err))
                    }
                }
            }
        }
    }

    async fn logout(&self) -> Result<(), ClientError> {
        self.store.clear().await?;
        self.cache.clear();
        Ok(())
    }
}

/// Percent-encode one query component (RFC 3986 unreserved set kept).
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}
