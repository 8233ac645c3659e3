/// Walkthrough of the refresh protocol against the scripted fake transport.
///
/// Two issue requests run concurrently with an expired access credential;
/// the log shows a single refresh call followed by both replays; the final
/// section demonstrates the fatal teardown path.
use futures_util::future::join_all;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use triage::application_impl::*;
use triage::application_port::*;
use triage::domain_model::*;
use triage::domain_port::*;
use triage::infra_memory::*;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const BASE: &str = "https://desk.example.com/api";

fn build_client(transport: Arc<FakeTransport>, store: Arc<MemoryCredentialStore>) -> Arc<PortalClient> {
    Arc::new(PortalClient::new(
        BASE,
        DemoPolicy::new("demo-"),
        transport,
        store,
        Arc::new(MemoryResponseCache::new(chrono::Duration::seconds(30))),
        Arc::new(LogSessionObserver::new()),
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::new("client_demo=debug,triage=debug");

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    // Scenario 1: expired access credential, healthy refresh credential.
    let transport = Arc::new(FakeTransport::new());
    transport.set_handler(|request: ApiRequest| async move {
        if request.url.ends_with("/auth/refresh/") {
            tokio::time::sleep(Duration::from_millis(50)).await;
            return Ok(ApiResponse::new(200, json!({ "access": "fresh-access" })));
        }
        let authorized = request
            .header("authorization")
            .is_some_and(|v| v == "Bearer fresh-access");
        if authorized {
            Ok(ApiResponse::new(200, json!({ "url": request.url })))
        } else {
            Ok(ApiResponse::new(401, json!({ "detail": "token expired" })))
        }
    });

    let store = Arc::new(MemoryCredentialStore::preloaded(&CredentialPair {
        access: AccessToken("stale-access".into()),
        refresh: RefreshToken("good-refresh".into()),
    }));
    let client = build_client(transport.clone(), store);

    let calls = ["issues/", "feedback/"].map(|path| {
        let client = client.clone();
        async move {
            client
                .request(Method::Get, path, None, RequestOptions::default())
                .await
        }
    });
    for result in join_all(calls).await {
        let response = result?;
        tracing::info!(status = response.status, body = %response.body, "request settled");
    }
    tracing::info!(
        refresh_calls = transport.calls_to("/auth/refresh/"),
        total_requests = transport.requests().len(),
        "single-flight refresh demonstrated"
    );

    // Scenario 2: the refresh credential is rejected — fatal teardown.
    let transport = Arc::new(FakeTransport::new());
    transport.set_handler(|request: ApiRequest| async move {
        if request.url.ends_with("/auth/refresh/") {
            return Ok(ApiResponse::new(400, json!({ "detail": "token blacklisted" })));
        }
        Ok(ApiResponse::new(401, json!({ "detail": "token expired" })))
    });
    let store = Arc::new(MemoryCredentialStore::preloaded(&CredentialPair {
        access: AccessToken("stale-access".into()),
        refresh: RefreshToken("revoked-refresh".into()),
    }));
    let client = build_client(transport, store.clone());

    let err = client
        .request(Method::Get, "issues/", None, RequestOptions::default())
        .await
        .unwrap_err();
    tracing::info!(%err, "session ended as expected");
    tracing::info!(
        access_left = ?store.get(CredentialKey::Access).await?,
        "credential store after teardown"
    );

    Ok(())
}
