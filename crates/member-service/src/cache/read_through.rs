//! Read-through cache wrapper.

use super::{CacheExt, CacheInterface};
use member_core::MemberResult;
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Serves a value from one cache key, loading and storing it on a miss.
///
/// Only presence of the key counts as a hit, so an empty collection is cached
/// and served like any other value. Concurrent misses each run the loader.
pub struct ReadThroughCache<'a> {
    backend: &'a dyn CacheInterface,
    ttl: Duration,
}

impl<'a> ReadThroughCache<'a> {
    /// Wraps `backend`, storing loaded values for `ttl`.
    #[must_use]
    pub fn new(backend: &'a dyn CacheInterface, ttl: Duration) -> Self {
        Self { backend, ttl }
    }

    /// Returns the cached value under `key`, or runs `loader` and caches its result.
    ///
    /// Loader and backend errors are returned as-is and nothing is stored.
    pub async fn get_or_load<T, F, Fut>(&self, key: &str, loader: F) -> MemberResult<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = MemberResult<T>> + Send,
    {
        if let Some(cached) = self.backend.get::<T>(key).await? {
            debug!("Read-through hit for '{}'", key);
            return Ok(cached);
        }

        debug!("Read-through miss for '{}', loading", key);
        let value = loader().await?;
        self.backend.set(key, &value, self.ttl).await?;

        Ok(value)
    }

    /// Removes the entry under `key`. Returns whether it existed.
    pub async fn evict(&self, key: &str) -> MemberResult<bool> {
        let existed = self.backend.delete(key).await?;
        debug!("Evicted '{}' (existed: {})", key, existed);
        Ok(existed)
    }
}
