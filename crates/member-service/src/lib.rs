//! # Member Service
//!
//! The member cache facade. Member lists are served through a read-through
//! cache entry (`member`), individual members can be written to and read back
//! from manual cache entries (`member::<id>`), and CRUD calls pass through to
//! the persistence gateway.

pub mod cache;
pub mod dto;
pub mod r#impl;
pub mod mappers;
pub mod member_service;

#[cfg(test)]
mod testing;

pub use cache::*;
pub use dto::*;
pub use mappers::MemberMapper;
pub use member_service::*;
pub use r#impl::member_service_impl::{DEFAULT_ENTRY_TTL, DEFAULT_LIST_TTL, DEFAULT_SCAN_COUNT};
pub use r#impl::{MemberServiceImpl, MemberServiceImplParameters};
