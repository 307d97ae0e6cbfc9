//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! business logic.
//!
//! # Submodules
//!
//! - [`config`] - Environment-sourced configuration and logging setup
//! - [`runtime`] - Wires adapters to services and runs the bot until shutdown

pub mod config;
pub mod runtime;
