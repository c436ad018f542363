//! API request handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

use crate::config::AliasConfig;
use crate::error::{AliasError, Result};
use crate::generator::{generate_alias, Alias};
use crate::registrar::{spawn_register, Registrar};

/// Shared application state
pub struct AppState {
    pub config: Arc<AliasConfig>,
    pub registrar: Arc<Registrar>,
}

/// Alias creation request body
#[derive(Debug, Default, Deserialize)]
pub struct CreateAliasRequest {
    pub domain: Option<String>,
}

/// Addy.io-compatible response envelope
#[derive(Debug, Serialize)]
pub struct AddyResponse {
    pub data: AddyAlias,
}

/// Addy.io-compatible alias payload
#[derive(Debug, Serialize)]
pub struct AddyAlias {
    pub id: u64,
    pub email: String,
    pub local_part: String,
    pub domain: String,
    pub description: Option<String>,
    pub enabled: bool,
}

/// SimpleLogin-compatible response envelope
#[derive(Debug, Serialize)]
pub struct SimpleLoginResponse {
    pub alias: SimpleLoginAlias,
}

/// SimpleLogin-compatible alias payload
#[derive(Debug, Serialize)]
pub struct SimpleLoginAlias {
    pub id: u64,
    pub email: String,
    pub enabled: bool,
    pub creation_date: String,
    pub note: Option<String>,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

/// GET /api/health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Generate an alias and initiate its downstream registration.
///
/// Registration is spawned before the caller builds a response, so it is
/// always initiated first, but its outcome never gates the response.
fn issue_alias(state: &AppState, requested: Option<&str>) -> Result<Alias> {
    let alias = generate_alias(requested, &state.config.alias.default_domain)
        .ok_or(AliasError::Generation)?;

    spawn_register(state.registrar.clone(), alias.address());

    Ok(alias)
}

/// POST /api/v1/aliases - create an alias, Addy.io response shape
pub async fn create_alias_addy(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<CreateAliasRequest>>,
) -> impl IntoResponse {
    let req = payload.map(|Json(p)| p).unwrap_or_default();

    match issue_alias(&state, req.domain.as_deref()) {
        Ok(alias) => {
            let resp = AddyResponse {
                data: AddyAlias {
                    id: issued_id(),
                    email: alias.address(),
                    local_part: alias.local_part,
                    domain: alias.domain,
                    description: None,
                    enabled: true,
                },
            };
            (StatusCode::CREATED, Json(resp)).into_response()
        }
        Err(e) => {
            error!("Failed to create alias: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("Failed to create alias")),
            )
                .into_response()
        }
    }
}

/// POST /api/alias/random/new - create an alias, SimpleLogin response shape
pub async fn create_alias_simple_login(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<CreateAliasRequest>>,
) -> impl IntoResponse {
    let req = payload.map(|Json(p)| p).unwrap_or_default();

    match issue_alias(&state, req.domain.as_deref()) {
        Ok(alias) => {
            let now = chrono::Utc::now();
            let resp = SimpleLoginResponse {
                alias: SimpleLoginAlias {
                    id: issued_id(),
                    email: alias.address(),
                    enabled: true,
                    creation_date: now.to_rfc3339(),
                    note: None,
                },
            };
            (StatusCode::CREATED, Json(resp)).into_response()
        }
        Err(e) => {
            error!("Failed to create alias: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("Failed to create alias")),
            )
                .into_response()
        }
    }
}

/// Timestamp-derived identifier. Not stable across calls for the same
/// alias; the mail server is the durable store, not this service.
fn issued_id() -> u64 {
    chrono::Utc::now().timestamp_millis() as u64
}
