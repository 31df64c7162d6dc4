//! Dependency injection module using Shaku.

use deadpool_redis::Pool;
use member_config::{AppConfig, CacheConfig};
use member_core::{module, MemberResult};
use member_repository::{DatabasePool, DatabasePoolInterface, MySqlMemberRepository};
use member_service::{
    create_redis_pool, MemberServiceImpl, MemberServiceImplParameters, RedisCacheService,
    RedisCacheServiceParameters,
};
use sqlx::MySqlPool;
use std::sync::Arc;
use tracing::info;

// Single-process module: database pool, repository, Redis cache and the facade.
module! {
    pub MemberModule {
        components = [
            DatabasePool,
            MySqlMemberRepository,
            RedisCacheService,
            MemberServiceImpl,
        ],
        providers = [],
    }
}

/// Builds the module around already created pools.
///
/// A `None` cache pool wires a disabled cache.
pub fn build_member_module(
    db_pool: MySqlPool,
    cache_pool: Option<Arc<Pool>>,
    cache_config: &CacheConfig,
) -> Arc<MemberModule> {
    let module = MemberModule::builder()
        .with_component_parameters::<DatabasePool>(member_repository::DatabasePoolParameters {
            pool: db_pool,
        })
        .with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
            pool: cache_pool,
        })
        .with_component_parameters::<MemberServiceImpl>(MemberServiceImplParameters {
            list_ttl: cache_config.list_ttl(),
            entry_ttl: cache_config.entry_ttl(),
            scan_count: cache_config.scan_count,
        })
        .build();

    Arc::new(module)
}

/// Connects both backends, runs migrations and builds the module.
pub async fn initialize(config: &AppConfig) -> MemberResult<Arc<MemberModule>> {
    let db_pool = DatabasePool::connect(&config.database).await?;

    if config.database.run_migrations {
        db_pool.run_migrations().await?;
    }

    let cache_pool = create_redis_pool(&config.redis).await?;

    info!(
        "Member cache: list TTL {}s, entry TTL {}s, scan count {}",
        config.cache.list_ttl_secs, config.cache.entry_ttl_secs, config.cache.scan_count
    );

    Ok(build_member_module(
        db_pool.inner().clone(),
        cache_pool,
        &config.cache,
    ))
}
