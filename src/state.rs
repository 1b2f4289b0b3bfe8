use serde::Serialize;
use serde_json::Value;
use sea_orm::DbErr;
use std::future::Future;
use std::sync::Arc;

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::store::DirectoryStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Query collaborator for directory rows
    pub store: Arc<dyn DirectoryStore>,
    /// Read-through response cache
    pub cache: Arc<ResponseCache>,
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Arc<dyn DirectoryStore>, config: Config) -> Self {
        Self {
            store,
            cache: Arc::new(ResponseCache::new(config.cache.ttl_secs)),
            config: Arc::new(config),
        }
    }

    /// Serve `key` from the cache, running `query` and caching its JSON on a miss
    pub async fn cached<T, Fut>(&self, key: &str, query: Fut) -> AppResult<Arc<Value>>
    where
        T: Serialize,
        Fut: Future<Output = Result<T, DbErr>>,
    {
        self.cache
            .get_or_load(key, || async move {
                let rows = query.await?;
                Ok::<_, AppError>(serde_json::to_value(rows)?)
            })
            .await
    }
}
