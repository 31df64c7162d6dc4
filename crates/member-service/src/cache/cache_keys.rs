//! Cache key generators for consistent key naming.

use member_core::MemberId;

/// Key of the read-through member list entry.
pub const MEMBER_LIST: &str = "member";

/// Separator between the cache name and the member id in manual entries.
const MEMBER_KEY_SEPARATOR: &str = "::";

/// Pattern matching every key in the cache.
pub const ALL_KEYS_PATTERN: &str = "*";

/// Generate the manual cache key for a member by ID.
#[must_use]
pub fn member_by_id(id: MemberId) -> String {
    format!("{}{}{}", MEMBER_LIST, MEMBER_KEY_SEPARATOR, id)
}
