//! HTTP server for the avatar proxy
//!
//! Provides `/`, `/health` and `/avatar` endpoints.

use crate::error::AvatarError;
use crate::resolver::AvatarResolver;
use crate::types::{AvatarQuery, AvatarResult, HealthResponse};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::Method,
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Shared state for the HTTP server
pub struct ServerState {
    pub resolver: AvatarResolver,
    pub started_at: DateTime<Utc>,
}

impl ServerState {
    pub fn new(resolver: AvatarResolver) -> Self {
        Self {
            resolver,
            started_at: Utc::now(),
        }
    }
}

pub type SharedState = Arc<ServerState>;

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health))
        .route("/avatar", get(get_avatar))
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(state: SharedState, port: u16) -> std::io::Result<()> {
    let router = create_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Discord avatar proxy service running on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

/// Plain-text liveness probe
async fn liveness() -> &'static str {
    "Discord avatar proxy service is running"
}

/// Health check endpoint
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let uptime_secs = (Utc::now() - state.started_at).num_seconds() as u64;

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs,
    })
}

/// Resolve a user's avatar URL and display name
async fn get_avatar(
    State(state): State<SharedState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<AvatarResult>, AvatarError> {
    let params = match query {
        Ok(Query(pairs)) => AvatarQuery::from(pairs),
        Err(e) => {
            warn!(error = %e, "Unreadable query string");
            AvatarQuery::default()
        }
    };
    let user_id = params.user_id.unwrap_or_default();

    let result = state.resolver.resolve(&user_id).await.map_err(|e| {
        warn!(user_id = %user_id, error = %e, "Avatar lookup failed");
        e
    })?;

    Ok(Json(result))
}
