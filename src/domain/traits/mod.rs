//! Domain traits - Abstractions for hosts and bots

pub mod handler;
pub mod reply;

pub use handler::BotHandler;
pub use reply::ReplySink;
