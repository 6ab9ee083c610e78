/*
[INPUT]:  YAML configuration file, VALR_* environment variables
[OUTPUT]: Base URL and optional API credentials for the client
[POS]:    Configuration layer - CLI setup
[UPDATE]: When adding new configuration options
*/

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use valr_adapter::{ClientConfig, Credentials, ValrClient};

/// Settings read from `--config`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    /// API root, e.g. "https://api.valr.com/v1"
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_secret: Option<String>,
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("parse config yaml")?;
        Ok(config)
    }

    /// Credentials from the file when both halves are set, otherwise the environment.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.api_key, &self.api_secret) {
            (Some(key), Some(secret)) => Some(Credentials::new(key.clone(), secret.clone())),
            _ => Credentials::from_env().ok(),
        }
    }

    /// Build the client; `base_url_override` wins over the file.
    pub fn build_client(&self, base_url_override: Option<&str>) -> Result<ValrClient> {
        let mut client_config = ClientConfig::default();
        if let Some(base_url) = base_url_override.or(self.base_url.as_deref()) {
            client_config = client_config.with_base_url(base_url);
        }
        ValrClient::with_config(client_config, self.credentials()).context("build VALR client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config = CliConfig::from_yaml_str(
            "base_url: https://sandbox.example.com/v1\napi_key: key\napi_secret: secret\n",
        )
        .expect("valid yaml");

        assert_eq!(config.base_url.as_deref(), Some("https://sandbox.example.com/v1"));
        let credentials = config.credentials().expect("credentials from file");
        assert_eq!(credentials.api_key(), "key");
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = CliConfig::from_yaml_str("{}").expect("valid yaml");
        assert!(config.base_url.is_none());

        let client = config.build_client(None).expect("default client");
        assert_eq!(client.base_url().as_str(), valr_adapter::http::DEFAULT_BASE_URL);
    }

    #[test]
    fn override_beats_file_base_url() {
        let config = CliConfig {
            base_url: Some("https://file.example.com/v1".to_string()),
            api_key: Some("key".to_string()),
            api_secret: Some("secret".to_string()),
        };

        let client = config
            .build_client(Some("https://flag.example.com/v1"))
            .expect("client");

        assert_eq!(client.base_url().host_str(), Some("flag.example.com"));
        assert!(client.has_credentials());
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(CliConfig::from_yaml_str("base_url: [unterminated").is_err());
    }
}
