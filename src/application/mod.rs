//! Application layer - Bot orchestration
//!
//! This layer contains:
//! - Errors: Domain-specific errors
//! - Registry: Named bot handlers available to a host

pub mod errors;
pub mod registry;

pub use registry::BotRegistry;
