//! Result type aliases for the member cache facade.

use crate::MemberError;

/// A specialized `Result` type for member operations.
pub type MemberResult<T> = Result<T, MemberError>;
