//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use member_core::MemberResult;
use shaku::Interface;
use std::collections::HashSet;
use std::time::Duration;

/// Cache backend client.
///
/// Values are stored as JSON strings so the trait stays dyn-compatible;
/// typed access goes through [`CacheExt`].
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> MemberResult<Option<String>>;

    /// Set a raw JSON value in the cache with a TTL, overwriting any previous value.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> MemberResult<()>;

    /// Delete a value from the cache.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> MemberResult<bool>;

    /// Check if a key exists in the cache.
    async fn exists(&self, key: &str) -> MemberResult<bool>;

    /// Enumerate every key matching `pattern` with cursor-based `SCAN`.
    ///
    /// `count` is the page size hint; the cursor is drained before returning.
    async fn scan(&self, pattern: &str, count: usize) -> MemberResult<HashSet<String>>;

    /// List keys matching `pattern` with a single blocking `KEYS` call.
    ///
    /// Blocks the server for the whole keyspace walk. Prefer [`scan`](Self::scan).
    async fn keys(&self, pattern: &str) -> MemberResult<HashSet<String>>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Typed get/set helpers over [`CacheInterface`].
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(&self, key: &str) -> MemberResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> MemberResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }
}

impl<T: CacheInterface + ?Sized> CacheExt for T {}
