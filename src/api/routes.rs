use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::recommendations;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/dashboard", get(handlers::dashboard))
        // Catalog
        .route("/games", get(handlers::browse_games).post(handlers::create_game))
        .route(
            "/games/:id",
            put(handlers::update_game).delete(handlers::delete_game),
        )
        .route("/catalog/save", post(handlers::save_catalog))
        .route("/api/games/:id/details", get(handlers::game_details))
        // Recommendations
        .route("/recommendations/genre", get(recommendations::by_genre))
        .route("/recommendations/rating", get(recommendations::by_rating))
        .route(
            "/recommendations/developer/:developer",
            get(recommendations::by_developer),
        )
        .route(
            "/recommendations/platform/:platform",
            get(recommendations::by_platform),
        )
        .route(
            "/recommendations/release-date",
            get(recommendations::by_release_date),
        )
        .route("/recommendations/popular", get(recommendations::popular))
        .route("/recommendations/results", post(recommendations::results))
        .route("/recommendations/:id/related", get(recommendations::related))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
