//! Entity-DTO mappers.

use crate::dto::MemberDto;
use member_core::{Mapper, Member};

/// Maps persisted members to their flat DTO projection.
pub struct MemberMapper;

impl MemberMapper {
    /// Projects a member onto a DTO. Unsaved members map to id `0`.
    #[must_use]
    pub fn to_dto(member: &Member) -> MemberDto {
        MemberDto {
            id: member.id.unwrap_or_default(),
            username: member.username.clone(),
            telephone: member.telephone.clone(),
            age: member.age,
            gender: member.gender,
        }
    }
}

impl Mapper<&Member, MemberDto> for MemberMapper {
    fn map(from: &Member) -> MemberDto {
        Self::to_dto(from)
    }
}

impl From<Member> for MemberDto {
    fn from(member: Member) -> Self {
        Self {
            id: member.id.unwrap_or_default(),
            username: member.username,
            telephone: member.telephone,
            age: member.age,
            gender: member.gender,
        }
    }
}
