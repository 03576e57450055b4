//! Console adapter for development/testing

use std::io::{BufRead, Write};
use std::sync::Mutex;

use crate::application::errors::BotError;
use crate::domain::entities::Message;
use crate::domain::traits::{BotHandler, ReplySink};

/// Reply sink that prints `[<bot>] <reply>` lines to a writer
pub struct ConsoleSink<W: Write> {
    label: String,
    out: Mutex<W>,
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout(label: impl Into<String>) -> Self {
        Self::new(label, std::io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(label: impl Into<String>, out: W) -> Self {
        Self {
            label: label.into(),
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write> ReplySink for ConsoleSink<W> {
    fn send_reply(&self, message: &Message, text: &str) -> Result<(), BotError> {
        tracing::debug!("Replying to message {}", message.id);

        let mut out = self.out.lock()
            .map_err(|_| BotError::Reply("console writer poisoned".to_string()))?;
        writeln!(out, "[{}] {}", self.label, text).map_err(|e| BotError::Reply(e.to_string()))?;
        out.flush().map_err(|e| BotError::Reply(e.to_string()))
    }
}

/// Feed every non-blank input line to `bot` until EOF or `exit`/`quit`.
/// Returns the number of messages handled.
pub fn run_console(bot: &dyn BotHandler, input: impl BufRead, sink: &dyn ReplySink) -> Result<usize, BotError> {
    tracing::info!("Starting console session for {}", bot.name());

    let mut handled = 0;
    for line in input.lines() {
        let line = line?;
        let text = line.trim();

        if text.is_empty() {
            continue;
        }
        if text == "exit" || text == "quit" {
            break;
        }

        bot.handle_message(&Message::new(text), sink)?;
        handled += 1;
    }

    tracing::info!("Console session ended after {} messages", handled);
    Ok(handled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct Shout;

    impl BotHandler for Shout {
        fn name(&self) -> &str {
            "shout"
        }

        fn usage(&self) -> &str {
            "Shouts back."
        }

        fn respond(&self, message: &Message) -> String {
            message.text().to_uppercase()
        }
    }

    #[test]
    fn test_sink_format() {
        let sink = ConsoleSink::new("shout", Vec::new());
        sink.send_reply(&Message::new("hi"), "HI").unwrap();
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "[shout] HI\n");
    }

    #[test]
    fn test_run_console_stops_at_exit() {
        let sink = ConsoleSink::new("shout", Vec::new());
        let input = Cursor::new("hello\n\n  world \nexit\nignored\n");

        let handled = run_console(&Shout, input, &sink).unwrap();

        assert_eq!(handled, 2);
        assert_eq!(
            String::from_utf8(sink.into_inner()).unwrap(),
            "[shout] HELLO\n[shout] WORLD\n"
        );
    }
}
