use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::{artists, handlers, middleware::metrics_middleware};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let static_dir = state.config().frontend.static_dir.clone();
    let index_path = static_dir.join("index.html");

    // Artsy proxy routes, served at the root and again under /api
    let proxy_routes = Router::new()
        .route("/search", get(artists::search))
        .route("/artist", get(artists::artist_details))
        .route("/artworks", get(artists::artworks))
        .route("/genes", get(artists::genes))
        .route("/similar-artists", get(artists::similar_artists))
        .with_state(Arc::clone(&state));

    // Health, config and metrics
    let ops_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::metrics))
        .with_state(state);

    // Front end with SPA fallback
    let serve_dir = ServeDir::new(&static_dir).fallback(ServeFile::new(&index_path));

    Router::new()
        .route_service("/", ServeFile::new(&index_path))
        .merge(proxy_routes.clone())
        .merge(ops_routes)
        .nest("/api", proxy_routes)
        .fallback_service(serve_dir)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
