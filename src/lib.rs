//! Chat-bot plugins that answer a message with a single remote lookup.
//!
//! - `define`: dictionary definitions for one English word
//! - `googlesearch`: the top web search result for a query

pub mod application;
pub mod bots;
pub mod domain;
pub mod infrastructure;

pub use application::errors::{BotError, ConfigError, InputError, LookupError};
pub use application::BotRegistry;
pub use domain::entities::{DefinitionEntry, Message, SearchHit};
pub use domain::traits::{BotHandler, ReplySink};
pub use infrastructure::config::Config;
