use super::support::{decode, encode};
use crate::application_port::*;
use crate::domain_model::*;
use serde_json::json;
use std::sync::Arc;

/// Admin/manager user administration. No display caching here: role and
/// activation changes must read back fresh.
pub struct UsersApi {
    client: Arc<dyn ApiClient>,
}

impl UsersApi {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<PortalUser>, ClientError> {
        let response = self
            .client
            .request(Method::Get, "users/", None, RequestOptions::default())
            .await?;
        decode(response)
    }

    pub async fn get(&self, id: UserId) -> Result<PortalUser, ClientError> {
        let response = self
            .client
            .request(
                Method::Get,
                &format!("users/{id}/"),
                None,
                RequestOptions::default(),
            )
            .await?;
        decode(response)
    }

    pub async fn set_role(&self, id: UserId, role: Role) -> Result<PortalUser, ClientError> {
        let response = self
            .client
            .request(
                Method::Patch,
                &format!("users/{id}/"),
                Some(json!({ "role": encode(&role)? })),
                RequestOptions::default(),
            )
            .await?;
        decode(response)
    }

    pub async fn set_active(&self, id: UserId, active: bool) -> Result<PortalUser, ClientError> {
        let response = self
            .client
            .request(
                Method::Patch,
                &format!("users/{id}/"),
                Some(json!({ "is_active": active })),
                RequestOptions::default(),
            )
            .await?;
        decode(response)
    }
}
