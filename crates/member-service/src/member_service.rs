//! Member cache facade trait definition.

use crate::dto::{MemberDto, MemberRequest};
use async_trait::async_trait;
use member_core::{Interface, MemberId, MemberResult};
use std::collections::HashSet;

/// Member cache facade.
///
/// Two independent cache paths coexist: the read-through list entry
/// (`member`), which `cache_reset` invalidates, and the manual per-member
/// entries (`member::<id>`), which only expire. Writes touch neither.
#[async_trait]
pub trait MemberService: Interface + Send + Sync {
    /// Returns all members, served from the read-through list entry when present.
    async fn get_member_list(&self) -> MemberResult<Vec<MemberDto>>;

    /// Reads all members fresh and writes each one to its manual cache entry.
    async fn get_member_list_by_cache_writes(&self) -> MemberResult<Vec<MemberDto>>;

    /// Finds one member in the (cached) member list.
    async fn get_member_by_proxy(&self, id: MemberId) -> MemberResult<MemberDto>;

    /// Reads one member from its manual cache entry, without a database fallback.
    async fn get_member_from_cache(&self, id: MemberId) -> MemberResult<MemberDto>;

    /// Enumerates every key in the cache with cursor-based scanning.
    async fn show_all_keys_by_scanning(&self) -> MemberResult<HashSet<String>>;

    /// Evicts the read-through list entry.
    async fn cache_reset(&self) -> MemberResult<()>;

    /// Evicts and immediately repopulates the read-through list entry.
    async fn cache_renewal(&self) -> MemberResult<Vec<MemberDto>>;

    /// Creates a member.
    async fn create_member(&self, request: MemberRequest) -> MemberResult<MemberDto>;

    /// Replaces every mutable field of a member.
    async fn update_member(&self, id: MemberId, request: MemberRequest) -> MemberResult<MemberDto>;

    /// Deletes a member, returning its id.
    async fn delete_member(&self, id: MemberId) -> MemberResult<MemberId>;
}
