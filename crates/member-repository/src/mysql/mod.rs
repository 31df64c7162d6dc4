//! MySQL implementations of the persistence gateway.

mod member_repository;

pub use member_repository::*;
