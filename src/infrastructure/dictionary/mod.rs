//! Dictionary API client

use crate::application::errors::LookupError;
use crate::domain::entities::DefinitionEntry;
use crate::infrastructure::http::HttpClient;

/// Looks up the definitions of a single word
pub trait Dictionary: Send + Sync {
    fn lookup(&self, word: &str) -> Result<Vec<DefinitionEntry>, LookupError>;
}

/// OwlBot-style dictionary served as a JSON array per word
pub struct HttpDictionary {
    http: HttpClient,
    api_url: String,
}

impl HttpDictionary {
    /// `api_url` must contain a `{word}` placeholder
    pub fn new(http: HttpClient, api_url: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into(),
        }
    }

    fn url_for(&self, word: &str) -> String {
        self.api_url.replace("{word}", &urlencoding::encode(word))
    }
}

impl Dictionary for HttpDictionary {
    fn lookup(&self, word: &str) -> Result<Vec<DefinitionEntry>, LookupError> {
        let url = self.url_for(word);
        // The API answers `null` for some unknown words
        let entries: Option<Vec<DefinitionEntry>> = self.http.get_json(&url)?;
        Ok(entries.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::{HttpConfig, DEFAULT_DEFINITION_API_URL};

    #[test]
    fn test_url_for() {
        let http = HttpClient::new(&HttpConfig::default()).unwrap();
        let dictionary = HttpDictionary::new(http, DEFAULT_DEFINITION_API_URL);
        assert_eq!(
            dictionary.url_for("hello"),
            "https://owlbot.info/api/v1/dictionary/hello?format=json"
        );
    }
}
