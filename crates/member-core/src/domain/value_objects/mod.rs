//! Domain value objects.

mod gender;

pub use gender::*;
