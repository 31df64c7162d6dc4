//! Application state for Axum handlers.

use member_service::MemberService;
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub member_service: Arc<dyn MemberService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(member_service: Arc<dyn MemberService>) -> Self {
        Self { member_service }
    }

    /// Resolves the services from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn MemberService>,
    {
        Self::new(module.resolve())
    }
}
