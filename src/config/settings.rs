//! Settings structures for MovieFight-RS configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub api: ApiSettings,
    pub autocomplete: AutocompleteSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_yaml(&content)?)
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Merge with environment variables (`MOVIEFIGHT_*` prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("MOVIEFIGHT_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("MOVIEFIGHT_API_URL") {
            self.api.url = val;
        }
        if let Ok(val) = std::env::var("MOVIEFIGHT_API_KEY") {
            self.api.key = Some(val);
        }
        if let Ok(val) = std::env::var("MOVIEFIGHT_DEBOUNCE_MS") {
            if let Ok(ms) = val.parse() {
                self.autocomplete.debounce_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("MOVIEFIGHT_REQUEST_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.outgoing.request_timeout = timeout;
            }
        }
    }
}

/// General settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
}

/// Movie database API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the OMDb API
    pub url: String,
    /// API key; OMDb refuses requests without one
    pub key: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            url: "https://www.omdbapi.com/".to_string(),
            key: None,
        }
    }
}

/// Search input behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteSettings {
    /// Quiet period between the last keystroke and the fetch
    pub debounce_ms: u64,
}

impl Default for AutocompleteSettings {
    fn default() -> Self {
        Self {
            debounce_ms: crate::SEARCH_DEBOUNCE_MS,
        }
    }
}

impl AutocompleteSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Connection pool max size per host
    pub pool_maxsize: usize,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 5.0,
            pool_maxsize: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.url, "https://www.omdbapi.com/");
        assert!(settings.api.key.is_none());
        assert_eq!(settings.autocomplete.debounce_ms, 500);
        assert!(!settings.general.debug);
    }

    #[test]
    fn yaml_overrides_defaults() {
        let settings = Settings::from_yaml(
            r#"
api:
  key: abc123
autocomplete:
  debounce_ms: 250
"#,
        )
        .unwrap();
        assert_eq!(settings.api.key.as_deref(), Some("abc123"));
        assert_eq!(settings.autocomplete.debounce(), Duration::from_millis(250));
        // Untouched sections keep their defaults.
        assert_eq!(settings.outgoing.pool_maxsize, 20);
    }
}
