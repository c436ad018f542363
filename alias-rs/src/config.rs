//! Configuration for alias-rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AliasError, Result};
use crate::registrar::ApiFlavor;

/// Main service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AliasConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Inbound API authentication
    pub api: ApiConfig,
    /// Alias issuance policy
    pub alias: AliasPolicyConfig,
    /// Downstream Stalwart management API
    pub stalwart: StalwartConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address (e.g., "0.0.0.0:3000")
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

/// Inbound API authentication
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Bearer token required on alias creation routes
    pub token: String,
}

/// Alias issuance policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AliasPolicyConfig {
    /// Domain used when a request does not supply one
    #[serde(default)]
    pub default_domain: String,
    /// Mailbox that receives mail sent to every issued alias
    pub forward_to: String,
}

/// Downstream Stalwart management API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StalwartConfig {
    /// Base URL of the management API (e.g., "https://mail.example.com:8080")
    pub base_url: String,
    /// Basic auth username
    pub username: String,
    /// Basic auth password
    pub password: String,
    /// Which management API variant to use
    #[serde(default)]
    pub flavor: ApiFlavor,
    /// Request timeout for registration calls
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_listen_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl AliasConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AliasError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| AliasError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Create a default development configuration
    pub fn development() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: "127.0.0.1:3000".to_string(),
            },
            api: ApiConfig {
                token: "dev-token".to_string(),
            },
            alias: AliasPolicyConfig {
                default_domain: "example.com".to_string(),
                forward_to: "inbox@example.com".to_string(),
            },
            stalwart: StalwartConfig {
                base_url: "http://127.0.0.1:8080".to_string(),
                username: "admin".to_string(),
                password: "secret".to_string(),
                flavor: ApiFlavor::Principal,
                timeout_seconds: 10,
            },
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.token.is_empty() {
            return Err(AliasError::Config("API token must not be empty".to_string()));
        }

        if self.alias.forward_to.is_empty() {
            return Err(AliasError::Config(
                "Forwarding destination must not be empty".to_string(),
            ));
        }

        url::Url::parse(&self.stalwart.base_url).map_err(|e| {
            AliasError::Config(format!(
                "Invalid Stalwart base URL '{}': {}",
                self.stalwart.base_url, e
            ))
        })?;

        Ok(())
    }
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self::development()
    }
}
