//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Default dictionary endpoint; `{word}` is replaced by the lowercased word
pub const DEFAULT_DEFINITION_API_URL: &str = "https://owlbot.info/api/v1/dictionary/{word}?format=json";

/// Default search endpoint
pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search";

const MIN_WRAP_WIDTH: usize = 20;

/// Bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub http: HttpConfig,
    pub define: DefineConfig,
    pub googlesearch: SearchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct HttpConfig {
    /// Request timeout; the client default applies when unset
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DefineConfig {
    pub api_url: String,
    /// Column at which example text is wrapped
    pub wrap_width: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SearchConfig {
    pub search_url: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: concat!("lookup-bots/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for DefineConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_DEFINITION_API_URL.to_string(),
            wrap_width: 78,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn load_env() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Override settings from environment variables
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("DEFINE_API_URL") {
            self.define.api_url = url;
        }

        if let Some(url) = var("SEARCH_URL") {
            self.googlesearch.search_url = url;
        }

        if let Some(secs) = var("HTTP_TIMEOUT_SECS") {
            match secs.parse() {
                Ok(secs) => self.http.timeout_secs = Some(secs),
                Err(_) => tracing::warn!("Ignoring invalid HTTP_TIMEOUT_SECS: {}", secs),
            }
        }

        if let Some(agent) = var("HTTP_USER_AGENT") {
            self.http.user_agent = agent;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.define.api_url.contains("{word}") {
            return Err(ConfigError::InvalidValue(format!(
                "define.api-url must contain {{word}}: {}",
                self.define.api_url
            )));
        }

        if self.define.wrap_width < MIN_WRAP_WIDTH {
            return Err(ConfigError::InvalidValue(format!(
                "define.wrap-width must be at least {}",
                MIN_WRAP_WIDTH
            )));
        }

        Ok(())
    }
}
