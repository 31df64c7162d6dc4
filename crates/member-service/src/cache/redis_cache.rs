//! Redis-based cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use deadpool_redis::redis::{self, AsyncCommands, RedisResult, Value};
use deadpool_redis::{Config, Pool, Runtime};
use member_config::RedisConfig;
use member_core::{MemberError, MemberResult};
use shaku::Component;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Creates the Redis connection pool, or `None` when Redis is disabled.
///
/// A `PING` is issued on one pooled connection so a bad URL fails at startup.
pub async fn create_redis_pool(config: &RedisConfig) -> MemberResult<Option<Arc<Pool>>> {
    if !config.enabled {
        info!("Redis cache is disabled");
        return Ok(None);
    }

    info!("Creating Redis connection pool...");

    let pool = Config::from_url(&config.url)
        .builder()
        .map_err(|e| MemberError::Configuration(format!("Invalid Redis config: {}", e)))?
        .max_size(config.pool_size)
        .runtime(Runtime::Tokio1)
        .build()
        .map_err(|e| MemberError::Configuration(format!("Failed to create Redis pool: {}", e)))?;

    let mut conn = pool
        .get()
        .await
        .map_err(|e| MemberError::cache(format!("Failed to get Redis connection: {}", e)))?;
    redis::cmd("PING")
        .query_async::<String>(&mut *conn)
        .await
        .map_err(|e| MemberError::cache(format!("Redis PING failed: {}", e)))?;

    info!("Redis connection pool created successfully");
    Ok(Some(Arc::new(pool)))
}

/// Decodes a list of keys. Redis keys are binary-safe, so bytes that are not
/// UTF-8 are replaced instead of failing the whole reply.
fn decode_keys(reply: &Value) -> RedisResult<Vec<String>> {
    let raw: Vec<Vec<u8>> = redis::from_redis_value(reply)?;
    Ok(raw
        .into_iter()
        .map(|key| String::from_utf8_lossy(&key).into_owned())
        .collect())
}

/// Decodes one `SCAN` reply into the next cursor and its page of keys.
fn decode_scan_page(reply: &Value) -> RedisResult<(u64, Vec<String>)> {
    let (cursor, page): (u64, Value) = redis::from_redis_value(reply)?;
    Ok((cursor, decode_keys(&page)?))
}

/// Redis-based cache service.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct RedisCacheService {
    /// Redis connection pool.
    pool: Option<Arc<Pool>>,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a no-op cache service (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> MemberResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                warn!("Redis pool exhausted or unreachable: {}", e);
                MemberError::cache(format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(MemberError::cache("Cache is disabled")),
        }
    }
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> MemberResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| MemberError::cache(format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> MemberResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| MemberError::cache(format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> MemberResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| MemberError::cache(format!("Failed to delete key '{}': {}", key, e)))?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }

    async fn exists(&self, key: &str) -> MemberResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|e| MemberError::cache(format!("Failed to check key '{}': {}", key, e)))?;

        Ok(exists)
    }

    async fn scan(&self, pattern: &str, count: usize) -> MemberResult<HashSet<String>> {
        if !self.is_enabled() {
            return Ok(HashSet::new());
        }

        let mut conn = self.get_conn().await?;
        let mut cursor: u64 = 0;
        let mut keys = HashSet::new();

        // SCAN may return a key more than once; the set absorbs duplicates
        loop {
            let reply: Value = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(count)
                .query_async(&mut *conn)
                .await
                .map_err(|e| MemberError::cache(format!("Failed to scan keys: {}", e)))?;
            let (next_cursor, page) = decode_scan_page(&reply)
                .map_err(|e| MemberError::cache(format!("Malformed SCAN reply: {}", e)))?;

            keys.extend(page);

            if next_cursor == 0 {
                break;
            }
            cursor = next_cursor;
        }

        debug!("Scanned {} keys matching pattern '{}'", keys.len(), pattern);
        Ok(keys)
    }

    async fn keys(&self, pattern: &str) -> MemberResult<HashSet<String>> {
        if !self.is_enabled() {
            return Ok(HashSet::new());
        }

        let mut conn = self.get_conn().await?;
        let reply: Value = redis::cmd("KEYS")
            .arg(pattern)
            .query_async(&mut *conn)
            .await
            .map_err(|e| MemberError::cache(format!("Failed to list keys: {}", e)))?;

        let keys = decode_keys(&reply)
            .map_err(|e| MemberError::cache(format!("Malformed KEYS reply: {}", e)))?;
        Ok(keys.into_iter().collect())
    }
}

impl std::fmt::Debug for RedisCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheService")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
