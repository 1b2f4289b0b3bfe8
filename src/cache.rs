//! Read-through response cache
//!
//! Every directory endpoint serves JSON built from reference data that
//! changes rarely, so responses are kept for a fixed window and served
//! verbatim on a hit. There is no invalidation: an entry lives until its TTL
//! runs out.

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde_json::Value;

/// Cached JSON value with its expiry
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Arc<Value>,
    expires_at: DateTime<Utc>,
}

/// Key-value cache with a fixed time-to-live
#[derive(Debug)]
pub struct ResponseCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl ResponseCache {
    /// Create a cache whose entries live for `ttl_secs` seconds
    pub fn new(ttl_secs: u64) -> Self {
        let ttl_secs = i64::try_from(ttl_secs).unwrap_or(i64::MAX);
        Self {
            entries: DashMap::new(),
            ttl: Duration::try_seconds(ttl_secs).unwrap_or(Duration::MAX),
        }
    }

    pub fn get(&self, key: &str) -> Option<Arc<Value>> {
        self.get_at(key, Utc::now())
    }

    fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<Arc<Value>> {
        let entry = self.entries.get(key)?;
        if entry.expires_at <= now {
            return None;
        }
        Some(Arc::clone(&entry.value))
    }

    pub fn put(&self, key: impl Into<String>, value: Value) -> Arc<Value> {
        self.put_at(key.into(), value, Utc::now())
    }

    fn put_at(&self, key: String, value: Value, now: DateTime<Utc>) -> Arc<Value> {
        let value = Arc::new(value);
        let expires_at = now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.entries.insert(
            key,
            CacheEntry {
                value: Arc::clone(&value),
                expires_at,
            },
        );
        value
    }

    /// Return the cached value for `key`, or run `load` and cache its result.
    ///
    /// Failed loads are not cached. Two concurrent misses on the same key may
    /// both load; the later write wins.
    pub async fn get_or_load<F, Fut, E>(&self, key: &str, load: F) -> Result<Arc<Value>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        if let Some(hit) = self.get(key) {
            tracing::debug!(key, "cache hit");
            return Ok(hit);
        }

        tracing::debug!(key, "cache miss");
        let value = load().await?;
        Ok(self.put(key, value))
    }

    /// Drop expired entries, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.expires_at > now);
        before.saturating_sub(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn entry_expires_after_ttl() {
        let cache = ResponseCache::new(60);
        let now = Utc::now();
        cache.put_at("ulb-structure".to_string(), json!([1, 2]), now);

        assert!(cache.get_at("ulb-structure", now + Duration::seconds(59)).is_some());
        assert!(cache.get_at("ulb-structure", now + Duration::seconds(60)).is_none());
        assert!(cache.get_at("missing", now).is_none());
    }

    #[test]
    fn purge_removes_only_expired_entries() {
        let cache = ResponseCache::new(60);
        let now = Utc::now();
        cache.put_at("old".to_string(), json!(1), now - Duration::seconds(120));
        cache.put_at("fresh".to_string(), json!(2), now);

        assert_eq!(cache.purge_expired_at(now), 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.get_at("fresh", now).is_some());
    }

    #[test]
    fn huge_ttl_does_not_overflow() {
        let cache = ResponseCache::new(u64::MAX);
        cache.put("k", json!(true));
        assert_eq!(cache.get("k").as_deref(), Some(&json!(true)));
    }

    #[tokio::test]
    async fn get_or_load_reads_through_once() {
        let cache = ResponseCache::new(86_400);
        let loads = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_load("all-departments", || async {
                    loads.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, String>(json!(["Mayor Office"]))
                })
                .await
                .unwrap();
            assert_eq!(*value, json!(["Mayor Office"]));
        }

        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let cache = ResponseCache::new(86_400);

        let result: Result<_, String> = tokio_test::block_on(
            cache.get_or_load("rts-services", || async { Err("db down".to_string()) }),
        );
        assert!(result.is_err());
        assert!(cache.is_empty());
    }
}
