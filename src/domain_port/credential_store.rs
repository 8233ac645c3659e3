use crate::application_port::*;
use crate::domain_model::*;

#[async_trait::async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read one of the two stored credentials, `None` if absent.
    async fn get(&self, key: CredentialKey) -> Result<Option<String>, ClientError>;
    /// Replace one credential. A successful refresh writes the access slot
    /// atomically from the caller's point of view.
    async fn set(&self, key: CredentialKey, value: &str) -> Result<(), ClientError>;
    /// Erase both credentials. Used on logout and on unrecoverable refresh
    /// failure.
    async fn clear(&self) -> Result<(), ClientError>;
}
