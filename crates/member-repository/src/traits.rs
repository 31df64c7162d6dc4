//! Repository trait definitions.

use member_core::{Interface, Member, MemberId, MemberResult};
use async_trait::async_trait;

/// Persistence gateway for members.
#[async_trait]
pub trait MemberRepository: Interface + Send + Sync {
    /// Returns every member, ordered by id.
    async fn find_all(&self) -> MemberResult<Vec<Member>>;

    /// Finds a member by ID.
    async fn find_by_id(&self, id: MemberId) -> MemberResult<Option<Member>>;

    /// Persists a new member and returns it with its assigned id.
    async fn save(&self, member: &Member) -> MemberResult<Member>;

    /// Writes every mutable field of an existing member in one transaction.
    async fn update(&self, member: &Member) -> MemberResult<Member>;

    /// Deletes a member by ID. Returns `true` if a row was removed.
    async fn delete_by_id(&self, id: MemberId) -> MemberResult<bool>;
}
