use crate::application::errors::BotError;
use crate::domain::entities::Message;
use crate::domain::traits::ReplySink;

/// Core trait that every bot implements
pub trait BotHandler: Send + Sync {
    /// Unique identifier for the bot
    fn name(&self) -> &str;

    /// Static help text
    fn usage(&self) -> &str;

    /// Turn one message into its reply text. Never fails: lookup errors
    /// become user-facing text.
    fn respond(&self, message: &Message) -> String;

    /// Handle one message and write exactly one reply to `sink`.
    ///
    /// Only failures of the sink itself are returned.
    fn handle_message(&self, message: &Message, sink: &dyn ReplySink) -> Result<(), BotError> {
        let response = self.respond(message);
        sink.send_reply(message, &response)
    }
}
