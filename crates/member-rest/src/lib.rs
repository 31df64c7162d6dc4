//! # Member REST
//!
//! REST API layer using Axum. Exposes the member cache facade under
//! `/api/v1/members` together with health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
