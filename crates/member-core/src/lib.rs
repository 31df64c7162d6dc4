//! # Member Core
//!
//! Core types, traits, and error definitions shared by every layer of the
//! member cache facade: the `Member` entity, typed ids, the unified error
//! enum and request validation helpers.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};
