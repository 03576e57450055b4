//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Http: Blocking HTTP client shared by the remote APIs
//! - Html: HTML to plain text conversion
//! - Dictionary / Search: Remote API clients
//! - Adapters: Hosts that deliver messages (console)

pub mod adapters;
pub mod config;
pub mod dictionary;
pub mod html;
pub mod http;
pub mod search;
