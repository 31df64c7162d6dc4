//! # Member Server Library
//!
//! Composition root for the member cache facade: dependency injection
//! wiring, logging setup and startup output.

pub mod di;
pub mod startup;
