use crate::AppState;
use crate::signaling::ws_handler;
use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// HTTP surface: the signaling socket plus a liveness probe.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ws", get(ws_handler))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
