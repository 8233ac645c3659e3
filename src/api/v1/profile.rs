use super::support::decode;
use crate::application_port::*;
use crate::domain_model::*;
use serde_json::json;
use std::sync::Arc;

pub struct ProfileApi {
    client: Arc<dyn ApiClient>,
}

impl ProfileApi {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn me(&self) -> Result<PortalUser, ClientError> {
        let response = self
            .client
            .request(Method::Get, "profile/", None, RequestOptions::default())
            .await?;
        decode(response)
    }

    pub async fn update_email(&self, email: &str) -> Result<PortalUser, ClientError> {
        let response = self
            .client
            .request(
                Method::Patch,
                "profile/",
                Some(json!({ "email": email })),
                RequestOptions::default(),
            )
            .await?;
        decode(response)
    }
}
