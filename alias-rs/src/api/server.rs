//! API Server - HTTP server for alias issuance

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::api::handlers::{self, ApiError, AppState};
use crate::config::AliasConfig;
use crate::error::Result;
use crate::registrar::Registrar;

/// API server configuration
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(config: Arc<AliasConfig>) -> Result<Self> {
        let registrar = Registrar::new(&config.stalwart, &config.alias.forward_to)?;
        let addr = config.server.listen_addr.clone();

        let state = Arc::new(AppState {
            config,
            registrar: Arc::new(registrar),
        });

        Ok(Self { state, addr })
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        // CORS configuration
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        // Public routes (no auth required)
        let public_routes = Router::new().route("/api/health", get(handlers::health));

        // Protected routes (bearer token required)
        let protected_routes = Router::new()
            .route("/api/v1/aliases", post(handlers::create_alias_addy))
            .route(
                "/api/alias/random/new",
                post(handlers::create_alias_simple_login),
            )
            .route_layer(middleware::from_fn_with_state(
                self.state.clone(),
                auth_middleware,
            ));

        public_routes
            .merge(protected_routes)
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Start the API server
    pub async fn run(&self) -> std::io::Result<()> {
        let router = self.router();

        info!("Starting alias API server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

/// Authentication middleware - validates the bearer token
async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    req: axum::extract::Request,
    next: Next,
) -> Response {
    // Extract Authorization header
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(h) if h.starts_with("Bearer ") => &h[7..],
        _ => {
            warn!("Missing or invalid Authorization header");
            return (StatusCode::UNAUTHORIZED, Json(ApiError::new("Unauthorized")))
                .into_response();
        }
    };

    if token != state.config.api.token {
        warn!("Rejected request with wrong API token");
        return (StatusCode::UNAUTHORIZED, Json(ApiError::new("Unauthorized"))).into_response();
    }

    next.run(req).await
}
