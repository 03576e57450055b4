//! Domain entities - Core objects with no external dependencies

pub mod definition;
pub mod message;

pub use definition::{DefinitionEntry, SearchHit};
pub use message::Message;
