//! Caching infrastructure for the service layer.
//!
//! This module provides a cache abstraction with a Redis implementation and
//! the read-through wrapper used for the member list.

mod cache_interface;
pub mod cache_keys;
mod read_through;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use read_through::ReadThroughCache;
pub use redis_cache::{create_redis_pool, RedisCacheService, RedisCacheServiceParameters};
