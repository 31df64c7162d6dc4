//! Member cache facade implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface, ReadThroughCache};
use crate::dto::{MemberDto, MemberRequest};
use crate::mappers::MemberMapper;
use crate::member_service::MemberService;
use async_trait::async_trait;
use member_config::CacheConfig;
use member_core::{Member, MemberError, MemberId, MemberResult, ValidateExt};
use member_repository::MemberRepository;
use shaku::Component;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Default TTL of the read-through member list entry (10 minutes).
pub const DEFAULT_LIST_TTL: Duration = Duration::from_secs(600);

/// Default TTL of each manual `member::<id>` entry.
pub const DEFAULT_ENTRY_TTL: Duration = Duration::from_secs(100);

/// Default `COUNT` hint per `SCAN` page.
pub const DEFAULT_SCAN_COUNT: usize = 100;

/// Member cache facade over the persistence gateway and the cache backend.
#[derive(Component)]
#[shaku(interface = MemberService)]
pub struct MemberServiceImpl {
    #[shaku(inject)]
    member_repository: Arc<dyn MemberRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    #[shaku(default = DEFAULT_LIST_TTL)]
    list_ttl: Duration,
    #[shaku(default = DEFAULT_ENTRY_TTL)]
    entry_ttl: Duration,
    #[shaku(default = DEFAULT_SCAN_COUNT)]
    scan_count: usize,
}

impl MemberServiceImpl {
    /// Creates a member service outside of the DI container.
    pub fn new(
        member_repository: Arc<dyn MemberRepository>,
        cache: Arc<dyn CacheInterface>,
        config: &CacheConfig,
    ) -> Self {
        Self {
            member_repository,
            cache,
            list_ttl: config.list_ttl(),
            entry_ttl: config.entry_ttl(),
            scan_count: config.scan_count,
        }
    }

    fn member_list_cache(&self) -> ReadThroughCache<'_> {
        ReadThroughCache::new(self.cache.as_ref(), self.list_ttl)
    }

    async fn load_member_list(&self) -> MemberResult<Vec<MemberDto>> {
        let members = self.member_repository.find_all().await?;
        debug!("Loaded {} members from repository", members.len());
        Ok(members.iter().map(MemberMapper::to_dto).collect())
    }

    async fn find_existing(&self, id: MemberId) -> MemberResult<Member> {
        self.member_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| MemberError::not_found("Member", id))
    }
}

#[async_trait]
impl MemberService for MemberServiceImpl {
    async fn get_member_list(&self) -> MemberResult<Vec<MemberDto>> {
        debug!("Getting member list");

        self.member_list_cache()
            .get_or_load(cache_keys::MEMBER_LIST, || self.load_member_list())
            .await
    }

    async fn get_member_list_by_cache_writes(&self) -> MemberResult<Vec<MemberDto>> {
        debug!("Getting member list with manual cache writes");

        let members = self.load_member_list().await?;

        for member in &members {
            self.cache
                .set(&cache_keys::member_by_id(member.id), member, self.entry_ttl)
                .await?;
        }

        info!(
            "Wrote {} member cache entries with TTL {}s",
            members.len(),
            self.entry_ttl.as_secs()
        );
        Ok(members)
    }

    async fn get_member_by_proxy(&self, id: MemberId) -> MemberResult<MemberDto> {
        debug!("Getting member {} from the member list", id);

        self.get_member_list()
            .await?
            .into_iter()
            .find(|member| member.id == id)
            .ok_or_else(|| MemberError::not_found("Member", id))
    }

    async fn get_member_from_cache(&self, id: MemberId) -> MemberResult<MemberDto> {
        let key = cache_keys::member_by_id(id);

        let member: MemberDto = self
            .cache
            .get(&key)
            .await?
            .ok_or_else(|| MemberError::cache_key_absent(key.as_str()))?;

        debug!(
            "Cached member: id={}, username={}, telephone={}",
            member.id, member.username, member.telephone
        );
        Ok(member)
    }

    async fn show_all_keys_by_scanning(&self) -> MemberResult<HashSet<String>> {
        let keys = self
            .cache
            .scan(cache_keys::ALL_KEYS_PATTERN, self.scan_count)
            .await?;

        debug!("Found {} cache keys", keys.len());
        Ok(keys)
    }

    async fn cache_reset(&self) -> MemberResult<()> {
        self.member_list_cache()
            .evict(cache_keys::MEMBER_LIST)
            .await?;

        info!("Member list cache reset");
        Ok(())
    }

    async fn cache_renewal(&self) -> MemberResult<Vec<MemberDto>> {
        self.cache_reset().await?;
        let members = self.get_member_list().await?;

        info!("Member list cache renewed with {} members", members.len());
        Ok(members)
    }

    async fn create_member(&self, request: MemberRequest) -> MemberResult<MemberDto> {
        debug!("Creating member: {}", request.username);

        request.validate_request()?;

        let member = Member::create(
            request.username,
            request.telephone,
            request.age,
            request.gender,
        );
        let saved = self.member_repository.save(&member).await?;

        info!("Member created: {}", saved.id.unwrap_or_default());
        Ok(MemberMapper::to_dto(&saved))
    }

    async fn update_member(&self, id: MemberId, request: MemberRequest) -> MemberResult<MemberDto> {
        debug!("Updating member: {}", id);

        request.validate_request()?;

        let mut member = self.find_existing(id).await?;
        member.update(
            request.username,
            request.telephone,
            request.age,
            request.gender,
        );

        let updated = self.member_repository.update(&member).await?;

        info!("Member updated: {}", id);
        Ok(MemberMapper::to_dto(&updated))
    }

    async fn delete_member(&self, id: MemberId) -> MemberResult<MemberId> {
        debug!("Deleting member: {}", id);

        self.find_existing(id).await?;

        if !self.member_repository.delete_by_id(id).await? {
            return Err(MemberError::not_found("Member", id));
        }

        info!("Member deleted: {}", id);
        Ok(id)
    }
}

impl std::fmt::Debug for MemberServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberServiceImpl")
            .field("list_ttl", &self.list_ttl)
            .field("entry_ttl", &self.entry_ttl)
            .field("scan_count", &self.scan_count)
            .finish_non_exhaustive()
    }
}
