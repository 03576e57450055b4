use serde::{Deserialize, Serialize};

/// One dictionary record: part of speech, definition and an optional example.
///
/// The dictionary API spells the definition field `defenition`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DefinitionEntry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "defenition", alias = "definition")]
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

impl DefinitionEntry {
    pub fn new(kind: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            definition: definition.into(),
            example: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// The example, treating an empty string the same as a missing one
    pub fn example(&self) -> Option<&str> {
        self.example.as_deref().filter(|e| !e.is_empty())
    }
}

/// Top search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub link: String,
}
