//! Axum router configuration with middleware.
//!
//! Routes:
//! - POST /api/chat  - coach reply
//! - GET  /health    - health check
//! - GET  /          - chat page (`index.html` from the web directory)
//! - GET  /static/*  - chat page assets
//!
//! Middleware: CORS (any origin), request tracing. If the web directory
//! does not exist, only the API is served.

use std::path::Path;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let web_dir = state.config.server.web_dir.clone();

    let mut router = Router::new()
        .route("/api/chat", post(handlers::chat::chat))
        .route("/health", get(health_check))
        .with_state(state);

    let web_path = Path::new(&web_dir);
    if web_path.is_dir() {
        router = router
            .route_service("/", ServeFile::new(web_path.join("index.html")))
            .nest_service("/static", ServeDir::new(web_path));
        tracing::info!(path = %web_dir, "chat page serving enabled");
    } else {
        tracing::info!(path = %web_dir, "web directory not found, serving API only");
    }

    router.layer(cors).layer(TraceLayer::new_for_http())
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
