//! Data Transfer Objects (DTOs).

mod member_dto;

pub use member_dto::*;
