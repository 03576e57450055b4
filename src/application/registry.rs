//! Bot registry - named handlers available to a host

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use crate::application::errors::BotError;
use crate::domain::traits::BotHandler;

/// Holds every bot a host can dispatch to
#[derive(Default)]
pub struct BotRegistry {
    bots: BTreeMap<String, Arc<dyn BotHandler>>,
}

impl BotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bot under its own name
    pub fn register<B: BotHandler + 'static>(&mut self, bot: B) -> Result<(), BotError> {
        let name = bot.name().to_string();

        if self.bots.contains_key(&name) {
            return Err(BotError::Plugin(format!("Bot '{}' already registered", name)));
        }

        info!("Registering bot: {}", name);
        self.bots.insert(name, Arc::new(bot));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn BotHandler>, BotError> {
        self.bots
            .get(name)
            .cloned()
            .ok_or_else(|| BotError::NotFound(format!("bot '{}'", name)))
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.bots.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.bots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bots.is_empty()
    }
}
