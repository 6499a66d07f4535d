pub mod contentful;
pub mod handlers;
pub mod models;
pub mod pathing;
pub mod search;
pub mod state;

use axum::{Router, routing::get};
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/musicians/search", get(handlers::search_musicians))
        .route(
            "/api/musicians/most-connected",
            get(handlers::most_connected_musician),
        )
        .route(
            "/api/musicians/:musician_id/collaborators",
            get(handlers::musician_collaborators),
        )
        .route("/api/path", get(handlers::find_path))
        .route(
            "/api/bands/:band_id/connections",
            get(handlers::band_connections),
        )
        .route("/api/bands/most-connected", get(handlers::most_connected_band))
        .route("/api/stats", get(handlers::get_stats))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
