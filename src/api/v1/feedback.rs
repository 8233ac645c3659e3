use super::support::{decode, encode};
use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::ResponseCache;
use std::sync::Arc;

const LIST_PATH: &str = "feedback/";

pub struct FeedbackApi {
    client: Arc<dyn ApiClient>,
    cache: Arc<dyn ResponseCache>,
}

impl FeedbackApi {
    pub fn new(client: Arc<dyn ApiClient>, cache: Arc<dyn ResponseCache>) -> Self {
        Self { client, cache }
    }

    pub async fn list(&self) -> Result<Vec<Feedback>, ClientError> {
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

    pub async fn submit(&self, draft: &FeedbackDraft) -> Result<Feedback, ClientError> {
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
}
