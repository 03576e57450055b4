//! Domain layer - Core bot abstractions with no external dependencies
//!
//! This layer contains:
//! - Entities: Core objects (Message, DefinitionEntry, SearchHit)
//! - Traits: Abstractions the host and the bots meet at (BotHandler, ReplySink)

pub mod entities;
pub mod traits;
