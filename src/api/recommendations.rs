use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::RequestId;
use crate::models::{FilterCriteria, Game};
use crate::services::{classify, validate_limit, RecommendationEngine, Vocabulary};

use super::handlers::{owned, LimitQuery};
use super::AppState;

/// Default page size of the single-dimension rankings
const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct GenreQuery {
    /// Comma-separated genre names
    #[serde(default)]
    pub genres: String,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResults {
    pub recommended_games: Vec<Game>,
    pub perfect_matches: Vec<Game>,
    pub good_matches: Vec<Game>,
    pub other_matches: Vec<Game>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedGame {
    pub id: String,
    pub title: String,
    pub thumbnail_url: Option<String>,
}

fn split_tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|t| !t.is_empty())
}

fn limit_or_default(limit: Option<i64>) -> AppResult<usize> {
    validate_limit(limit.unwrap_or(DEFAULT_LIMIT))
}

/// Games sharing the most genres with the requested ones
pub async fn by_genre(
    State(state): State<AppState>,
    Query(params): Query<GenreQuery>,
) -> AppResult<Json<Vec<Game>>> {
    let limit = limit_or_default(params.limit)?;

    let catalog = state.catalog.read().await;
    let genres = Vocabulary::from_catalog(&catalog).canonical_genres(split_tokens(&params.genres));
    let engine = RecommendationEngine::new(&catalog, &state.scorer);

    Ok(Json(owned(engine.by_genre_overlap(&genres, limit))))
}

/// Highest rated games
pub async fn by_rating(
    State(state): State<AppState>,
    Query(params): Query<LimitQuery>,
) -> AppResult<Json<Vec<Game>>> {
    let limit = limit_or_default(params.limit)?;

    let catalog = state.catalog.read().await;
    let engine = RecommendationEngine::new(&catalog, &state.scorer);

    Ok(Json(owned(engine.by_rating(limit))))
}

/// Highest rated games from one developer
pub async fn by_developer(
    State(state): State<AppState>,
    Path(developer): Path<String>,
    Query(params): Query<LimitQuery>,
) -> AppResult<Json<Vec<Game>>> {
    let limit = limit_or_default(params.limit)?;

    let catalog = state.catalog.read().await;
    let engine = RecommendationEngine::new(&catalog, &state.scorer);

    Ok(Json(owned(engine.by_developer(&developer, limit))))
}

/// Highest rated games on one platform
pub async fn by_platform(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    Query(params): Query<LimitQuery>,
) -> AppResult<Json<Vec<Game>>> {
    let limit = limit_or_default(params.limit)?;

    let catalog = state.catalog.read().await;
    let engine = RecommendationEngine::new(&catalog, &state.scorer);

    Ok(Json(owned(engine.by_platform(&platform, limit))))
}

/// Newest releases
pub async fn by_release_date(
    State(state): State<AppState>,
    Query(params): Query<LimitQuery>,
) -> AppResult<Json<Vec<Game>>> {
    let limit = limit_or_default(params.limit)?;

    let catalog = state.catalog.read().await;
    let engine = RecommendationEngine::new(&catalog, &state.scorer);

    Ok(Json(owned(engine.by_release_date(limit))))
}

/// Most reviewed games
pub async fn popular(
    State(state): State<AppState>,
    Query(params): Query<LimitQuery>,
) -> AppResult<Json<Vec<Game>>> {
    let limit = limit_or_default(params.limit)?;

    let catalog = state.catalog.read().await;
    let engine = RecommendationEngine::new(&catalog, &state.scorer);

    Ok(Json(owned(engine.by_review_count(limit))))
}

/// Multi-filter recommendations grouped into match tiers
pub async fn results(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(criteria): Json<FilterCriteria>,
) -> AppResult<Json<RecommendationResults>> {
    let catalog = state.catalog.read().await;
    let vocabulary = Vocabulary::from_catalog(&catalog);
    let genres = vocabulary.canonical_genres(criteria.genres().iter().map(String::as_str));
    let tags = vocabulary.canonical_tags(criteria.tags().iter().map(String::as_str));

    let engine = RecommendationEngine::new(&catalog, &state.scorer);
    let ranked = engine.multi_filter(&genres, &tags, state.recommendation_limit);
    let tiers = classify(&ranked, &genres, &tags, &state.scorer, &state.thresholds);

    tracing::info!(
        request_id = %request_id,
        genre_count = genres.len(),
        tag_count = tags.len(),
        result_count = ranked.len(),
        perfect = tiers.perfect_matches.len(),
        good = tiers.good_matches.len(),
        "Recommendations computed"
    );

    Ok(Json(RecommendationResults {
        recommended_games: owned(ranked),
        perfect_matches: owned(tiers.perfect_matches),
        good_matches: owned(tiers.good_matches),
        other_matches: owned(tiers.other_matches),
    }))
}

/// A few games similar to the given one
pub async fn related(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> AppResult<Json<Vec<RelatedGame>>> {
    let catalog = state.catalog.read().await;
    let engine = RecommendationEngine::new(&catalog, &state.scorer);

    let related = engine
        .related(&game_id, state.related_limit)
        .into_iter()
        .map(|g| RelatedGame {
            id: g.id.clone(),
            title: g.title.clone(),
            thumbnail_url: g
                .thumbnail_url
                .clone()
                .or_else(|| state.assets.image_urls(&g.id).map(|urls| urls.thumbnail_url)),
        })
        .collect();

    Ok(Json(related))
}
