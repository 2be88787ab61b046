use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::RequestId;
use crate::models::Game;
use crate::services::{details, validate_limit, RecommendationEngine};

use super::AppState;

/// Games per dashboard row
const DASHBOARD_ROW_SIZE: i64 = 8;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseResponse {
    pub all_games: Vec<Game>,
    pub total_games: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub best_rated_games: Vec<Game>,
    pub popular_games: Vec<Game>,
    pub recommended_games: Vec<Game>,
    pub total_games: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub path: String,
    pub saved_games: usize,
}

pub(crate) fn owned(games: Vec<&Game>) -> Vec<Game> {
    games.into_iter().cloned().collect()
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// All games ordered by title
pub async fn browse_games(State(state): State<AppState>) -> Json<BrowseResponse> {
    let catalog = state.catalog.read().await;
    let engine = RecommendationEngine::new(&catalog, &state.scorer);
    let all_games = owned(engine.browse_by_title());

    Json(BrowseResponse {
        total_games: all_games.len(),
        all_games,
    })
}

/// Best rated, popular and recommended rows
pub async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<LimitQuery>,
) -> AppResult<Json<DashboardResponse>> {
    let limit = validate_limit(params.limit.unwrap_or(DASHBOARD_ROW_SIZE))?;

    let catalog = state.catalog.read().await;
    let engine = RecommendationEngine::new(&catalog, &state.scorer);
    let rows = engine.dashboard(limit);

    tracing::debug!(total_games = catalog.len(), "Dashboard built");

    Ok(Json(DashboardResponse {
        best_rated_games: owned(rows.best_rated),
        popular_games: owned(rows.popular),
        recommended_games: owned(rows.recommended),
        total_games: catalog.len(),
    }))
}

/// Catalog record joined with its details fragment and image URLs
pub async fn game_details(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> AppResult<Json<details::GameDetails>> {
    let game = {
        let catalog = state.catalog.read().await;
        catalog.find_by_id(&game_id).cloned()
    }
    .ok_or_else(|| AppError::NotFound(format!("game {}", game_id)))?;

    let details = details::game_details(game, state.assets.as_ref()).await?;
    Ok(Json(details))
}

/// Append a game to the catalog
pub async fn create_game(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(game): Json<Game>,
) -> AppResult<(StatusCode, Json<Game>)> {
    if game.id.trim().is_empty() {
        return Err(AppError::InvalidInput("game id must not be empty".to_string()));
    }

    let mut catalog = state.catalog.write().await;
    catalog.add(game.clone());

    tracing::info!(request_id = %request_id, game_id = %game.id, "Game added");

    Ok((StatusCode::CREATED, Json(game)))
}

/// Replace the game with the given id
pub async fn update_game(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(game_id): Path<String>,
    Json(game): Json<Game>,
) -> AppResult<Json<Game>> {
    if game.id != game_id {
        return Err(AppError::InvalidInput(format!(
            "body id {} does not match path id {}",
            game.id, game_id
        )));
    }

    let mut catalog = state.catalog.write().await;
    if !catalog.update(game.clone()) {
        return Err(AppError::NotFound(format!("game {}", game_id)));
    }

    tracing::info!(request_id = %request_id, game_id = %game_id, "Game updated");

    Ok(Json(game))
}

/// Remove every game with the given id
pub async fn delete_game(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(game_id): Path<String>,
) -> AppResult<StatusCode> {
    let removed = state.catalog.write().await.delete(&game_id);
    if removed == 0 {
        return Err(AppError::NotFound(format!("game {}", game_id)));
    }

    tracing::info!(request_id = %request_id, game_id = %game_id, removed, "Game deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Write the current catalog to the configured file
pub async fn save_catalog(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<SaveResponse>> {
    let path = state
        .catalog_path
        .clone()
        .ok_or_else(|| AppError::Internal("no catalog path configured".to_string()))?;

    let snapshot = state.catalog.read().await.clone();
    let saved_games = snapshot.len();

    let target = path.clone();
    tokio::task::spawn_blocking(move || snapshot.save_to_file(&target))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    tracing::info!(request_id = %request_id, saved_games, "Catalog saved on request");

    Ok(Json(SaveResponse {
        path: path.display().to_string(),
        saved_games,
    }))
}
