use chrono::{DateTime, Utc};

/// An incoming chat message as delivered by the host.
///
/// Handlers only read `content`; the id and timestamp belong to the host.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Content with surrounding whitespace removed
    pub fn text(&self) -> &str {
        self.content.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::new("hello");
        let b = Message::new("hello");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_text_is_trimmed() {
        let msg = Message::new("  hello \n").with_id("42");
        assert_eq!(msg.text(), "hello");
        assert_eq!(msg.id, "42");
    }
}
