use super::support::decode;
use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::ResponseCache;
use std::sync::Arc;

const SUMMARY_PATH: &str = "reports/summary/";

pub struct ReportsApi {
    client: Arc<dyn ApiClient>,
    cache: Arc<dyn ResponseCache>,
}

impl ReportsApi {
    pub fn new(client: Arc<dyn ApiClient>, cache: Arc<dyn ResponseCache>) -> Self {
        Self { client, cache }
    }

    pub async fn summary(&self) -> Result<ReportSummary, ClientError> {
        if let Some(hit) = self.cache.get(SUMMARY_PATH) {
            return serde_json::from_value(hit).map_err(|e| ClientError::Decode(e.to_string()));
        }
        let response = self
            .client
            .request(Method::Get, SUMMARY_PATH, None, RequestOptions::default())
            .await?;
        if response.is_success() {
            self.cache.put(SUMMARY_PATH, response.body.clone());
        }
        decode(response)
    }
}
