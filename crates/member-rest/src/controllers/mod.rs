//! REST API controllers.

pub mod health_controller;
pub mod member_controller;

pub use health_controller::*;
