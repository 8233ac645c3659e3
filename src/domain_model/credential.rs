use serde::{Deserialize, Serialize};

/// Short-lived bearer token attached to authenticated calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken(pub String);

/// Longer-lived token exchanged at the refresh endpoint for a new access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken(pub String);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialPair {
    pub access: AccessToken,
    pub refresh: RefreshToken,
}

/// Which of the two stored credentials a store operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKey {
    Access,
    Refresh,
}

impl CredentialKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialKey::Access => "access",
            CredentialKey::Refresh => "refresh",
        }
    }
}

/// Decides whether a stored credential participates in bearer auth and
/// refresh. Demo-mode sentinels (a reserved prefix) are exempt from both:
/// no header is attached for them and they are never sent to the refresh
/// endpoint.
#[derive(Debug, Clone)]
pub struct DemoPolicy {
    prefix: String,
}

impl DemoPolicy {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn is_demo(&self, credential: &str) -> bool {
        !self.prefix.is_empty() && credential.starts_with(&self.prefix)
    }

    pub fn is_refreshable(&self, credential: &str) -> bool {
        !self.is_demo(credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_prefix_matches_only_prefixed_values() {
        let policy = DemoPolicy::new("demo-");
        assert!(policy.is_demo("demo-visitor"));
        assert!(!policy.is_demo("eyJhbGciOi..."));
        assert!(policy.is_refreshable("eyJhbGciOi..."));
    }

    #[test]
    fn empty_prefix_never_matches() {
        let policy = DemoPolicy::new("");
        assert!(!policy.is_demo(""));
        assert!(!policy.is_demo("anything"));
    }
}
