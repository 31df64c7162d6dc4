//! # Member Config
//!
//! Configuration management for the member cache facade.
//! Supports layered configuration from files and environment variables,
//! and runtime refresh.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
