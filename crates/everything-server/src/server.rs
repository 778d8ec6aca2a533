//! HTTP server for the everything website
//!
//! Provides /, /cached, /health and a catch-all that resolves every other
//! path through the page controller.

use crate::pages::{
    cached_listing, index_page, mark_cached, random_placeholder, GENERATION_FAILED_HTML,
    QUOTA_EXCEEDED_HTML,
};
use crate::types::HealthResponse;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use page_cache::{Outcome, PageController};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

/// Path browsers probe for an icon; never generated
const FAVICON_PATH: &str = "/favicon.ico";

/// Shared state for the HTTP server
pub struct ServerState {
    pub controller: PageController,
    pub started_at: DateTime<Utc>,
}

impl ServerState {
    pub fn new(controller: PageController) -> Self {
        Self {
            controller,
            started_at: Utc::now(),
        }
    }
}

pub type SharedState = Arc<ServerState>;

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/cached", get(cached))
        .route("/health", get(health))
        .route("/{*path}", get(resolve_page))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(state: SharedState, port: u16) -> std::io::Result<()> {
    let router = create_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

async fn index() -> Html<String> {
    Html(index_page(random_placeholder()))
}

async fn cached(State(state): State<SharedState>) -> Html<String> {
    let pages = state.controller.pages().await;
    Html(cached_listing(&pages))
}

/// Health check endpoint
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let uptime_secs = (Utc::now() - state.started_at).num_seconds().max(0) as u64;

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs,
        cache: state.controller.stats().await,
        quota: state.controller.quota().await,
    })
}

/// Serve, generate or refuse the page for an arbitrary path
async fn resolve_page(State(state): State<SharedState>, Path(path): Path<String>) -> Response {
    let path = format!("/{}", path);
    let now = Utc::now();

    if path == FAVICON_PATH {
        state.controller.roll_window(now).await;
        return (StatusCode::NOT_FOUND, "no").into_response();
    }

    match state.controller.handle(&path, now).await {
        Outcome::ServeCached(html) => {
            ([("x-cache", "HIT")], Html(mark_cached(&html))).into_response()
        }
        Outcome::Generated(html) => ([("x-cache", "MISS")], Html(html)).into_response(),
        Outcome::QuotaExceeded => Html(QUOTA_EXCEEDED_HTML).into_response(),
        Outcome::GenerationFailed(e) => {
            error!(path = %path, error = %e, "Failed to generate page");
            (StatusCode::BAD_GATEWAY, Html(GENERATION_FAILED_HTML)).into_response()
        }
    }
}
