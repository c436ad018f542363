//! Stalwart registration
//!
//! Tells the downstream mail server about each issued alias so that the
//! forwarding mailbox receives its mail. Registration is best-effort:
//! the HTTP layer spawns it and never waits for the outcome, so failures
//! are logged and swallowed rather than surfaced to the API caller.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use crate::config::StalwartConfig;
use crate::error::{AliasError, Result};

/// Which Stalwart management API variant to talk to.
///
/// Exactly one variant is active per deployment, selected from
/// configuration at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApiFlavor {
    /// `PATCH /principal/{forward_to}` with an `addItem` mutation
    #[default]
    Principal,
    /// `POST /aliases` with an alias/destinations body
    Aliases,
}

/// Client for the downstream mail server's management API
pub struct Registrar {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
    forward_to: String,
    flavor: ApiFlavor,
}

impl Registrar {
    /// Create a new registrar from configuration
    pub fn new(config: &StalwartConfig, forward_to: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
            forward_to: forward_to.to_string(),
            flavor: config.flavor,
        })
    }

    /// Register an alias address as a forwarding target for the
    /// configured destination mailbox.
    pub async fn register(&self, address: &str) -> Result<()> {
        let response = match self.flavor {
            ApiFlavor::Principal => {
                let url = format!("{}/principal/{}", self.base_url, self.forward_to);
                let body = json!([
                    {
                        "action": "addItem",
                        "field": "emails",
                        "value": address
                    }
                ]);

                self.client
                    .patch(url)
                    .basic_auth(&self.username, Some(&self.password))
                    .json(&body)
                    .send()
                    .await?
            }
            ApiFlavor::Aliases => {
                let url = format!("{}/aliases", self.base_url);
                let body = json!({
                    "alias": address,
                    "destinations": [self.forward_to]
                });

                self.client
                    .post(url)
                    .basic_auth(&self.username, Some(&self.password))
                    .json(&body)
                    .send()
                    .await?
            }
        };

        let status = response.status();
        if !status.is_success() {
            let diagnostic = response.text().await.unwrap_or_default();
            return Err(AliasError::Registration(format!(
                "downstream returned {}: {}",
                status, diagnostic
            )));
        }

        info!("Alias {} registered for {}", address, self.forward_to);
        Ok(())
    }
}

/// Fire-and-forget registration.
///
/// Spawns the downstream call and sinks any failure into the log. Must be
/// called before the HTTP response is built so that registration is always
/// initiated first, but the response never waits for its completion.
pub fn spawn_register(registrar: Arc<Registrar>, address: String) {
    tokio::spawn(async move {
        if let Err(e) = registrar.register(&address).await {
            error!("Failed to register alias {}: {}", address, e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AliasConfig;

    #[test]
    fn test_flavor_parses_from_config() {
        let flavor: ApiFlavor = serde_json::from_str("\"principal\"").unwrap();
        assert_eq!(flavor, ApiFlavor::Principal);
        let flavor: ApiFlavor = serde_json::from_str("\"aliases\"").unwrap();
        assert_eq!(flavor, ApiFlavor::Aliases);
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let mut config = AliasConfig::development();
        config.stalwart.base_url = "http://localhost:8080/".to_string();
        let registrar = Registrar::new(&config.stalwart, "dest@example.com").unwrap();
        assert_eq!(registrar.base_url, "http://localhost:8080");
    }
}
