//! Member DTOs.

use member_core::{Gender, MemberId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Flat member projection used in cache entries and API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDto {
    pub id: MemberId,
    pub username: String,
    pub telephone: String,
    pub age: u32,
    pub gender: Gender,
}

/// Request to create or update a member.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MemberRequest {
    #[validate(
        length(min = 1, max = 50, message = "Username must be 1-50 characters"),
        custom(function = "member_core::rules::not_blank", message = "Username must not be blank")
    )]
    pub username: String,

    #[validate(
        length(min = 1, max = 20, message = "Telephone must be 1-20 characters"),
        custom(function = "member_core::rules::telephone", message = "Invalid telephone number")
    )]
    pub telephone: String,

    #[validate(range(max = 150, message = "Age must be between 0 and 150"))]
    pub age: u32,

    #[serde(default)]
    pub gender: Gender,
}
