//! Google search bot - replies with the top search result

use std::sync::Arc;

use crate::domain::entities::Message;
use crate::domain::traits::BotHandler;
use crate::infrastructure::search::SearchEngine;

pub const NO_RESULTS_MESSAGE: &str = "Found no results.";

const HELP: &str = "To use this bot, start messages with @mentioned-bot, followed by what you \
want to search for. If found, the bot will return the first search result on Google.\n\n\
An example message that could be sent is:\n\
'@mentioned-bot zulip' or '@mentioned-bot how to create a chatbot'.";

pub struct GoogleSearchHandler {
    engine: Arc<dyn SearchEngine>,
}

impl GoogleSearchHandler {
    pub fn new(engine: Arc<dyn SearchEngine>) -> Self {
        Self { engine }
    }

    pub fn search_response(&self, content: &str) -> String {
        let query = content.trim();
        if query.is_empty() || query == "help" {
            return HELP.to_string();
        }

        match self.engine.top_result(query) {
            Ok(Some(hit)) => format!("Found Result: [{}]({})", hit.title, hit.link),
            Ok(None) => NO_RESULTS_MESSAGE.to_string(),
            Err(e) => {
                tracing::error!("Search for '{}' failed: {}", query, e);
                format!("Error: Search failed. {}.", e)
            }
        }
    }
}

impl BotHandler for GoogleSearchHandler {
    fn name(&self) -> &str {
        "googlesearch"
    }

    fn usage(&self) -> &str {
        HELP
    }

    fn respond(&self, message: &Message) -> String {
        self.search_response(&message.content)
    }
}
