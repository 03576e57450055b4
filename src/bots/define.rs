//! Define bot - looks up a single English word

use std::sync::Arc;

use crate::application::errors::{InputError, LookupError};
use crate::domain::entities::{DefinitionEntry, Message};
use crate::domain::traits::BotHandler;
use crate::infrastructure::dictionary::Dictionary;
use crate::infrastructure::html;

pub const REQUEST_ERROR_MESSAGE: &str = "Could not load definition.";
const NO_EXAMPLE: &str = "*No example available.*";

const USAGE: &str = "This plugin will allow users to define a word. Users should preface \
messages with @mention-bot.";

pub struct DefineHandler {
    dictionary: Arc<dyn Dictionary>,
    wrap_width: usize,
}

impl DefineHandler {
    pub fn new(dictionary: Arc<dyn Dictionary>, wrap_width: usize) -> Self {
        Self { dictionary, wrap_width }
    }

    /// Build the full reply for raw message content
    pub fn define_response(&self, content: &str) -> String {
        let word = match validate_word(content) {
            Ok(word) => word,
            Err(e) => return e.to_string(),
        };

        let mut response = format!("**{}**:\n", word);
        let lower = word.to_lowercase();

        tracing::debug!("Looking up definition of {}", lower);

        match self.lookup(&lower) {
            Ok(lines) if lines.is_empty() => response.push_str(REQUEST_ERROR_MESSAGE),
            Ok(lines) => response.push_str(&lines),
            Err(e) => {
                tracing::error!("Definition lookup for '{}' failed: {}", lower, e);
                response.push_str(REQUEST_ERROR_MESSAGE);
            }
        }

        response
    }

    /// Fetch and format every definition. Empty when the word is unknown.
    fn lookup(&self, word: &str) -> Result<String, LookupError> {
        let entries = self.dictionary.lookup(word)?;

        let mut lines = String::new();
        for entry in &entries {
            lines.push_str(&self.format_entry(entry)?);
        }
        Ok(lines)
    }

    fn format_entry(&self, entry: &DefinitionEntry) -> Result<String, LookupError> {
        let example = html::to_plain_text(entry.example().unwrap_or(NO_EXAMPLE), self.wrap_width)?;
        Ok(format!(
            "\n* (**{}**) {}\n&nbsp;&nbsp;{}\n",
            entry.kind,
            entry.definition,
            example.trim_end()
        ))
    }
}

impl BotHandler for DefineHandler {
    fn name(&self) -> &str {
        "define"
    }

    fn usage(&self) -> &str {
        USAGE
    }

    fn respond(&self, message: &Message) -> String {
        self.define_response(&message.content)
    }
}

/// Check that `content` is exactly one word made of the letters a-z,
/// ignoring case. Returns the word as typed.
pub fn validate_word(content: &str) -> Result<&str, InputError> {
    let mut tokens = content.split_whitespace();
    let word = tokens.next().unwrap_or("");

    if tokens.next().is_some() {
        return Err(InputError::Phrase);
    }

    if word.to_lowercase().chars().any(|c| !c.is_ascii_lowercase()) {
        return Err(InputError::Symbols);
    }

    if word.is_empty() {
        return Err(InputError::EmptyWord);
    }

    Ok(word)
}
