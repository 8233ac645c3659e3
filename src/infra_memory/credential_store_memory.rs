use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use dashmap::DashMap;

/// Process-local credential store. The browser original persisted the pair
/// in session storage; headless consumers hold it in memory for the life of
/// the process.
pub struct MemoryCredentialStore {
    entries: DashMap<CredentialKey, String>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Store pre-seeded with a login result.
    pub fn preloaded(pair: &CredentialPair) -> Self {
        let store = Self::new();
        store
            .entries
            .insert(CredentialKey::Access, pair.access.0.clone());
        store
            .entries
            .insert(CredentialKey::Refresh, pair.refresh.0.clone());
        store
    }
}

impl Default for MemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, key: CredentialKey) -> Result<Option<String>, ClientError> {
        Ok(self.entries.get(&key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: CredentialKey, value: &str) -> Result<(), ClientError> {
        self.entries.insert(key, value.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ClientError> {
        self.entries.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_then_clear() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.get(CredentialKey::Access).await.unwrap(), None);

        store.set(CredentialKey::Access, "a1").await.unwrap();
        store.set(CredentialKey::Refresh, "r1").await.unwrap();
        assert_eq!(
            store.get(CredentialKey::Access).await.unwrap().as_deref(),
            Some("a1")
        );

        store.clear().await.unwrap();
        assert_eq!(store.get(CredentialKey::Access).await.unwrap(), None);
        assert_eq!(store.get(CredentialKey::Refresh).await.unwrap(), None);
    }

    #[tokio::test]
    async fn preloaded_carries_both_credentials() {
        let store = MemoryCredentialStore::preloaded(&CredentialPair {
            access: AccessToken("a1".into()),
            refresh: RefreshToken("r1".into()),
        });
        assert_eq!(
            store.get(CredentialKey::Refresh).await.unwrap().as_deref(),
            Some("r1")
        );
    }
}
