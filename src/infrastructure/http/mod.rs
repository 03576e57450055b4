//! Blocking HTTP client shared by the remote API clients

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::application::errors::LookupError;
use crate::infrastructure::config::HttpConfig;

/// Thin wrapper over a blocking reqwest client. Cloning shares the pool.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &HttpConfig) -> Result<Self, LookupError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| LookupError::Network(format!("Failed to build client: {}", e)))?;

        Ok(Self { client })
    }

    /// GET `url`, failing on any non-2xx status
    pub fn get(&self, url: &str, accept: &str) -> Result<Response, LookupError> {
        tracing::debug!("GET {}", url);

        let response = self.client
            .get(url)
            .header("Accept", accept)
            .send()?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        Ok(response)
    }

    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, LookupError> {
        let body = self.get(url, "application/json")?.text()?;
        serde_json::from_str(&body).map_err(|e| LookupError::Decode(e.to_string()))
    }

    pub fn get_text(&self, url: &str) -> Result<String, LookupError> {
        Ok(self.get(url, "text/html,application/xhtml+xml")?.text()?)
    }
}
