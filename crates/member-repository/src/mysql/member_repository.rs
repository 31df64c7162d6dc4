//! MySQL member repository implementation.

use crate::{traits::MemberRepository, DatabasePoolInterface};
use async_trait::async_trait;
use member_core::{Gender, Member, MemberError, MemberId, MemberResult};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const SELECT_COLUMNS: &str = "SELECT id, username, telephone, age, gender FROM members";

/// MySQL member repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = MemberRepository)]
pub struct MySqlMemberRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlMemberRepository {
    /// Creates a new MySQL member repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a member.
#[derive(Debug, FromRow)]
struct MemberRow {
    id: i64,
    username: String,
    telephone: String,
    age: u32,
    gender: String,
}

impl TryFrom<MemberRow> for Member {
    type Error = MemberError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        let gender: Gender = row
            .gender
            .parse()
            .map_err(|e| MemberError::Internal(format!("Invalid gender in database: {}", e)))?;

        Ok(Member::with_id(
            MemberId(row.id),
            row.username,
            row.telephone,
            row.age,
            gender,
        ))
    }
}

fn persisted_id(member: &Member) -> MemberResult<MemberId> {
    member
        .id
        .ok_or_else(|| MemberError::internal("Cannot update a member that has not been saved"))
}

#[async_trait]
impl MemberRepository for MySqlMemberRepository {
    async fn find_all(&self) -> MemberResult<Vec<Member>> {
        debug!("Finding all members");

        let rows = sqlx::query_as::<_, MemberRow>(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .fetch_all(self.pool.inner())
            .await?;

        rows.into_iter()
            .map(Member::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn find_by_id(&self, id: MemberId) -> MemberResult<Option<Member>> {
        debug!("Finding member by id: {}", id);

        let row = sqlx::query_as::<_, MemberRow>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Member::try_from).transpose()
    }

    async fn save(&self, member: &Member) -> MemberResult<Member> {
        debug!("Saving new member: {}", member.username);

        // MySQL doesn't support RETURNING, so insert then select
        let result = sqlx::query(
            "INSERT INTO members (username, telephone, age, gender) VALUES (?, ?, ?, ?)",
        )
        .bind(&member.username)
        .bind(&member.telephone)
        .bind(member.age)
        .bind(member.gender.as_str())
        .execute(self.pool.inner())
        .await?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|e| MemberError::Internal(format!("Invalid generated id: {}", e)))?;

        self.find_by_id(MemberId(id))
            .await?
            .ok_or_else(|| MemberError::Internal("Failed to fetch inserted member".to_string()))
    }

    async fn update(&self, member: &Member) -> MemberResult<Member> {
        let id = persisted_id(member)?;
        debug!("Updating member: {}", id);

        let mut tx = self.pool.inner().begin().await?;

        sqlx::query(
            "UPDATE members SET username = ?, telephone = ?, age = ?, gender = ? WHERE id = ?",
        )
        .bind(&member.username)
        .bind(&member.telephone)
        .bind(member.age)
        .bind(member.gender.as_str())
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await?;

        let row = sqlx::query_as::<_, MemberRow>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id.into_inner())
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| MemberError::not_found("Member", id))?;

        tx.commit().await?;

        Member::try_from(row)
    }

    async fn delete_by_id(&self, id: MemberId) -> MemberResult<bool> {
        debug!("Deleting member: {}", id);

        let mut tx = self.pool.inner().begin().await?;

        let result = sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for MySqlMemberRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlMemberRepository").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(gender: &str) -> MemberRow {
        MemberRow {
            id: 11,
            username: "choi".to_string(),
            telephone: "010-5555-6666".to_string(),
            age: 35,
            gender: gender.to_string(),
        }
    }

    #[test]
    fn test_row_to_member() {
        let member = Member::try_from(row("female")).unwrap();
        assert_eq!(member.id, Some(MemberId(11)));
        assert_eq!(member.username, "choi");
        assert_eq!(member.gender, Gender::Female);
    }

    #[test]
    fn test_row_with_unknown_gender_fails() {
        let result = Member::try_from(row("robot"));
        assert!(matches!(result, Err(MemberError::Internal(_))));
    }

    #[test]
    fn test_update_requires_persisted_member() {
        let member = Member::create("new".to_string(), "010".to_string(), 1, Gender::Other);
        assert!(persisted_id(&member).is_err());
    }
}
