use crate::application::errors::BotError;
use crate::domain::entities::Message;

/// Reply channel provided by the host for a single conversation
pub trait ReplySink {
    /// Deliver `text` as the reply to `message`
    fn send_reply(&self, message: &Message, text: &str) -> Result<(), BotError>;
}
