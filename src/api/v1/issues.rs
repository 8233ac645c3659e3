use super::support::{decode, encode};
use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::ResponseCache;
use serde_json::json;
use std::sync::Arc;

const LIST_PATH: &str = "issues/";

pub struct IssuesApi {
    client: Arc<dyn ApiClient>,
    cache: Arc<dyn ResponseCache>,
}

impl IssuesApi {
    pub fn new(client: Arc<dyn ApiClient>, cache: Arc<dyn ResponseCache>) -> Self {
        Self { client, cache }
    }

    /// Full issue list as the server returns it; filtering, sorting and
    /// paging happen client-side (see `listing`). The raw body is kept in
    /// the display cache.
    pub async fn list(&self) -> Result<Vec<Issue>, ClientError> {
        if let Some(hit) = self.cache.get(LIST_PATH) {
            return serde_json::from_value(hit).map_err(|e| ClientError::Decode(e.to_string()));
        }
        let response = self
            .client
            .request(Method::Get, LIST_PATH, None, RequestOptions::default())
            .await?;
        if response.is_success() {
            self.cache.put(LIST_PATH, response.body.clone());
        }
        decode(response)
    }

    pub async fn get(&self, id: IssueId) -> Result<Issue, ClientError> {
        let response = self
            .client
            .request(
                Method::Get,
                &format!("issues/{id}/"),
                None,
                RequestOptions::default(),
            )
            .await?;
        decode(response)
    }

    pub async fn create(&self, draft: &IssueDraft) -> Result<Issue, ClientError> {
        let response = self
            .client
            .request(
                Method::Post,
                LIST_PATH,
                Some(encode(draft)?),
                RequestOptions::default(),
            )
            .await?;
        self.cache.clear();
        decode(response)
    }

    pub async fn set_status(&self, id: IssueId, status: IssueStatus) -> Result<Issue, ClientError> {
        let response = self
            .client
            .request(
                Method::Patch,
                &format!("issues/{id}/"),
                Some(json!({ "status": encode(&status)? })),
                RequestOptions::default(),
            )
            .await?;
        self.cache.clear();
        decode(response)
    }

    pub async fn assign(&self, id: IssueId, assignee: Option<UserId>) -> Result<Issue, ClientError> {
        let response = self
            .client
            .request(
                Method::Patch,
                &format!("issues/{id}/"),
                Some(json!({ "assignee": encode(&assignee)? })),
                RequestOptions::default(),
            )
            .await?;
        self.cache.clear();
        decode(response)
    }

    pub async fn comments(&self, id: IssueId) -> Result<Vec<Comment>, ClientError> {
        let response = self
            .client
            .request(
                Method::Get,
                &format!("issues/{id}/comments/"),
                None,
                RequestOptions::default(),
            )
            .await?;
        decode(response)
    }

    pub async fn add_comment(
        &self,
        id: IssueId,
        draft: &CommentDraft,
    ) -> Result<Comment, ClientError> {
        let response = self
            .client
            .request(
                Method::Post,
                &format!("issues/{id}/comments/"),
                Some(encode(draft)?),
                RequestOptions::default(),
            )
            .await?;
        decode(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application_impl::{FakeTransport, LogSessionObserver, PortalClient};
    use crate::infra_memory::{MemoryCredentialStore, MemoryResponseCache};
    use serde_json::json;

    fn issue_json(id: u64, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": format!("issue {id}"),
            "description": "printer on fire",
            "status": status,
            "priority": "high",
            "reporter": uuid::Uuid::nil(),
            "assignee": null,
            "created_at": "2026-08-01T10:00:00Z",
            "updated_at": "2026-08-02T10:00:00Z",
        })
    }

    fn api() -> (IssuesApi, Arc<FakeTransport>, Arc<MemoryResponseCache>) {
        let transport = Arc::new(FakeTransport::new());
        let cache = Arc::new(MemoryResponseCache::new(chrono::Duration::seconds(60)));
        let client = Arc::new(PortalClient::new(
            "https://desk.test/api",
            DemoPolicy::new("demo-"),
            transport.clone(),
            Arc::new(MemoryCredentialStore::new()),
            cache.clone(),
            Arc::new(LogSessionObserver::new()),
        ));
        (
            IssuesApi::new(client, cache.clone()),
            transport,
            cache,
        )
    }

    #[tokio::test]
    async fn list_decodes_and_reuses_the_display_cache() {
        let (api, transport, _cache) = api();
        transport
            .set_handler(|_| async { Ok(ApiResponse::new(200, json!([issue_json(1, "open")]))) });

        let first = api.list().await.unwrap();
        let second = api.list().await.unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(first[0].status, IssueStatus::Open);
        assert_eq!(second.len(), 1);
        assert_eq!(transport.calls_to("/issues/"), 1, "second list served from cache");
    }

    #[tokio::test]
    async fn mutations_invalidate_the_cached_list() {
        let (api, transport, cache) = api();
        transport.set_handler(|request: ApiRequest| async move {
            match request.method {
                Method::Get => Ok(ApiResponse::new(200, json!([]))),
                _ => Ok(ApiResponse::new(200, issue_json(7, "in_progress"))),
            }
        });

        api.list().await.unwrap();
        assert!(cache.get("issues/").is_some());

        let updated = api
            .set_status(IssueId(7), IssueStatus::InProgress)
            .await
            .unwrap();
        assert_eq!(updated.status, IssueStatus::InProgress);
        assert!(cache.get("issues/").is_none());
    }

    #[tokio::test]
    async fn non_success_becomes_a_status_error() {
        let (api, transport, _cache) = api();
        transport.set_handler(|_| async {
            Ok(ApiResponse::new(404, json!({ "detail": "not found" })))
        });

        let err = api.get(IssueId(9)).await.unwrap_err();
        match err {
            ClientError::Status { status: 404, .. } => {}
            other => panic!("expected status error, got {other:?}"),
        }
    }
}
