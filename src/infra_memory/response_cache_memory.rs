use crate::domain_port::*;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde_json::Value;

struct CacheEntry {
    stored_at: DateTime<Utc>,
    value: Value,
}

/// TTL'd in-memory display cache. Entries are evicted lazily on read; a
/// zero (or negative) TTL disables caching entirely.
pub struct MemoryResponseCache {
    ttl: Duration,
    entries: DashMap<String, CacheEntry>,
}

impl MemoryResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: DashMap::new(),
        }
    }
}

impl ResponseCache for MemoryResponseCache {
    fn get(&self, key: &str) -> Option<Value> {
        let expired = match self.entries.get(key) {
            None => return None,
            Some(entry) => {
                if Utc::now() < entry.stored_at + self.ttl {
                    return Some(entry.value.clone());
                }
                true
            }
        };
        if expired {
            self.entries.remove(key);
        }
        None
    }

    fn put(&self, key: &str, value: Value) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                stored_at: Utc::now(),
                value,
            },
        );
    }

    fn clear(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fresh_entries_are_served() {
        let cache = MemoryResponseCache::new(Duration::seconds(60));
        cache.put("issues/", json!([1, 2]));
        assert_eq!(cache.get("issues/"), Some(json!([1, 2])));
    }

    #[test]
    fn zero_ttl_disables_caching() {
        let cache = MemoryResponseCache::new(Duration::zero());
        cache.put("issues/", json!([1]));
        assert_eq!(cache.get("issues/"), None);
    }

    #[test]
    fn clear_drops_everything() {
        let cache = MemoryResponseCache::new(Duration::seconds(60));
        cache.put("a", json!(1));
        cache.put("b", json!(2));
        cache.clear();
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);
    }
}
