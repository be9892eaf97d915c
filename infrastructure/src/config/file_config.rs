//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file and
//! are deserialized directly.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend API settings
    pub api: FileApiConfig,
    /// Checkout settings
    pub checkout: FileCheckoutConfig,
}

/// `[api]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL of the backend serving the quiz catalog and payments
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl FileApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `[checkout]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCheckoutConfig {
    /// Base URL the payment gateway redirects the customer back to
    pub return_base_url: String,
}

impl Default for FileCheckoutConfig {
    fn default() -> Self {
        Self {
            return_base_url: "http://localhost:5173".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
        assert_eq!(config.checkout.return_base_url, "http://localhost:5173");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://api.tress.example"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://api.tress.example");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.checkout.return_base_url, "http://localhost:5173");
    }
}
