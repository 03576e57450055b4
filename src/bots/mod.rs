//! Built-in bots
//!
//! Each bot validates the message, makes at most one remote call and
//! replies with formatted text.

pub mod define;
pub mod googlesearch;

use std::sync::Arc;

pub use define::DefineHandler;
pub use googlesearch::GoogleSearchHandler;

use crate::application::errors::BotError;
use crate::application::BotRegistry;
use crate::infrastructure::config::Config;
use crate::infrastructure::dictionary::HttpDictionary;
use crate::infrastructure::http::HttpClient;
use crate::infrastructure::search::GoogleSearch;

/// Registry of every built-in bot wired to the real HTTP APIs
pub fn builtin(config: &Config) -> Result<BotRegistry, BotError> {
    config.validate()?;
    let http = HttpClient::new(&config.http)?;

    let dictionary = HttpDictionary::new(http.clone(), config.define.api_url.clone());
    let search = GoogleSearch::new(http, config.googlesearch.search_url.clone());

    let mut registry = BotRegistry::new();
    registry.register(DefineHandler::new(Arc::new(dictionary), config.define.wrap_width))?;
    registry.register(GoogleSearchHandler::new(Arc::new(search)))?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry() {
        let registry = builtin(&Config::default()).unwrap();
        assert_eq!(registry.names(), vec!["define", "googlesearch"]);
    }
}
