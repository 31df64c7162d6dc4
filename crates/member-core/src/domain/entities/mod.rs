//! Domain entities.

mod member;

pub use member::*;
