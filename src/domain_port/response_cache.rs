use serde_json::Value;

/// In-memory cache of GET response bodies kept for display. Cleared on
/// logout and on refresh failure; entries may also expire on their own.
pub trait ResponseCache: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
    fn put(&self, key: &str, value: Value);
    fn clear(&self);
}
