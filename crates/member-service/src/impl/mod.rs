//! Member service implementations.
//!
//! The trait definition lives in the parent module (`member_service.rs`).

pub mod member_service_impl;

pub use member_service_impl::{MemberServiceImpl, MemberServiceImplParameters};
