//! HTTP client for talking to the movie database API

use crate::config::OutgoingSettings;
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("moviefight-rs/", env!("CARGO_PKG_VERSION"));

/// Thin reqwest wrapper with the crate's outgoing-request configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    default_timeout: Duration,
}

impl HttpClient {
    /// Create a client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let default_timeout = Duration::from_secs_f64(settings.request_timeout);
        let client = Client::builder()
            .timeout(default_timeout)
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            default_timeout,
        })
    }

    /// GET request with query parameters
    pub async fn get_with_params(&self, url: &str, params: &[(&str, &str)]) -> Result<ApiResponse> {
        let response = self
            .client
            .get(url)
            .query(params)
            .timeout(self.default_timeout)
            .send()
            .await?;

        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;
        debug!(%url, status, "request completed");

        Ok(ApiResponse { status, text, url })
    }
}

/// Response body plus the metadata callers inspect
#[derive(Debug)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl ApiResponse {
    /// Parse the body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Whether the response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_succeeds() {
        assert!(HttpClient::new().is_ok());
    }

    #[test]
    fn success_covers_2xx_only() {
        let mut response = ApiResponse {
            status: 200,
            text: String::new(),
            url: String::new(),
        };
        assert!(response.is_success());
        response.status = 299;
        assert!(response.is_success());
        response.status = 301;
        assert!(!response.is_success());
        response.status = 404;
        assert!(!response.is_success());
    }

    #[test]
    fn json_parses_body() {
        let response = ApiResponse {
            status: 200,
            text: r#"{"Response": "True"}"#.to_string(),
            url: String::new(),
        };
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["Response"], "True");
    }
}
