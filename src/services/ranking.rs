use std::cmp::Reverse;
use std::collections::BTreeSet;

use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    models::Game,
};

use super::scoring::MatchScorer;

/// Genres used for the "recommended" dashboard row
pub const DASHBOARD_GENRES: [&str; 3] = ["Action", "RPG", "Adventure"];

/// Converts an externally supplied limit into a result count
pub fn validate_limit(limit: i64) -> AppResult<usize> {
    usize::try_from(limit)
        .map_err(|_| AppError::InvalidInput(format!("limit must not be negative, got {}", limit)))
}

/// Three dashboard rows computed from one catalog snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard<'a> {
    pub best_rated: Vec<&'a Game>,
    pub popular: Vec<&'a Game>,
    pub recommended: Vec<&'a Game>,
}

/// Ranking pipelines over a catalog snapshot
///
/// Every pipeline filters, stable-sorts and truncates to `limit`. Results
/// borrow from the catalog, so the catalog cannot change while they are alive.
pub struct RecommendationEngine<'a> {
    catalog: &'a Catalog,
    scorer: &'a MatchScorer,
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(catalog: &'a Catalog, scorer: &'a MatchScorer) -> Self {
        Self { catalog, scorer }
    }

    /// Games sharing at least one genre, most shared genres first
    pub fn by_genre_overlap(&self, genres: &BTreeSet<String>, limit: usize) -> Vec<&'a Game> {
        let mut games: Vec<&'a Game> = self
            .catalog
            .games()
            .iter()
            .filter(|g| g.genre_overlap(genres) > 0)
            .collect();
        games.sort_by_key(|g| Reverse(g.genre_overlap(genres)));
        games.truncate(limit);
        games
    }

    /// Highest rated games
    pub fn by_rating(&self, limit: usize) -> Vec<&'a Game> {
        rank_by_rating(self.catalog.games().iter(), limit)
    }

    /// Highest rated games from one developer
    pub fn by_developer(&self, developer: &str, limit: usize) -> Vec<&'a Game> {
        rank_by_rating(
            self.catalog
                .games()
                .iter()
                .filter(|g| g.developer.as_deref() == Some(developer)),
            limit,
        )
    }

    /// Highest rated games available on a platform
    pub fn by_platform(&self, platform: &str, limit: usize) -> Vec<&'a Game> {
        rank_by_rating(
            self.catalog
                .games()
                .iter()
                .filter(|g| g.platforms.contains(platform)),
            limit,
        )
    }

    /// Most recent releases; games without a parseable date are excluded
    pub fn by_release_date(&self, limit: usize) -> Vec<&'a Game> {
        let mut dated: Vec<_> = self
            .catalog
            .games()
            .iter()
            .filter_map(|g| g.release_date().map(|date| (date, g)))
            .collect();
        dated.sort_by_key(|(date, _)| Reverse(*date));
        dated.into_iter().take(limit).map(|(_, g)| g).collect()
    }

    /// Most reviewed games
    pub fn by_review_count(&self, limit: usize) -> Vec<&'a Game> {
        let mut games: Vec<&'a Game> = self.catalog.games().iter().collect();
        games.sort_by_key(|g| Reverse(g.review_count));
        games.truncate(limit);
        games
    }

    /// All games ordered by title, ignoring case
    pub fn browse_by_title(&self) -> Vec<&'a Game> {
        let mut games: Vec<&'a Game> = self.catalog.games().iter().collect();
        games.sort_by_cached_key(|g| g.title.to_lowercase());
        games
    }

    /// Games overlapping either filter, ranked by match score then rating
    ///
    /// With no genre and no tag constraint there is nothing to recommend and
    /// the result is empty.
    pub fn multi_filter(
        &self,
        genre_filter: &BTreeSet<String>,
        tag_filter: &BTreeSet<String>,
        limit: usize,
    ) -> Vec<&'a Game> {
        self.multi_filter_where(genre_filter, tag_filter, limit, |_| true)
    }

    /// Games similar to the one with `id`, excluding itself
    ///
    /// Unknown ids have no related games.
    pub fn related(&self, id: &str, limit: usize) -> Vec<&'a Game> {
        let Some(source) = self.catalog.find_by_id(id) else {
            tracing::debug!(game_id = %id, "Related lookup for unknown game");
            return Vec::new();
        };

        self.multi_filter_where(&source.genres, &source.tags, limit, |g| g.id != source.id)
    }

    /// Best rated, most reviewed and genre-recommended rows
    pub fn dashboard(&self, limit: usize) -> Dashboard<'a> {
        let genres: BTreeSet<String> = DASHBOARD_GENRES.iter().map(|g| g.to_string()).collect();

        Dashboard {
            best_rated: self.by_rating(limit),
            popular: self.by_review_count(limit),
            recommended: self.by_genre_overlap(&genres, limit),
        }
    }

    fn multi_filter_where(
        &self,
        genre_filter: &BTreeSet<String>,
        tag_filter: &BTreeSet<String>,
        limit: usize,
        keep: impl Fn(&Game) -> bool,
    ) -> Vec<&'a Game> {
        if genre_filter.is_empty() && tag_filter.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(i64, &'a Game)> = self
            .catalog
            .games()
            .iter()
            .filter(|&g| keep(g))
            .filter(|g| {
                (!genre_filter.is_empty() && g.genre_overlap(genre_filter) > 0)
                    || (!tag_filter.is_empty() && g.tag_overlap(tag_filter) > 0)
            })
            .map(|g| (self.scorer.score(g, genre_filter, tag_filter), g))
            .collect();

        scored.sort_by(|(score_a, a), (score_b, b)| {
            score_b
                .cmp(score_a)
                .then_with(|| b.metacritic_score.cmp(&a.metacritic_score))
        });

        tracing::debug!(
            candidate_count = scored.len(),
            limit,
            "Multi-filter ranking complete"
        );

        scored.into_iter().take(limit).map(|(_, g)| g).collect()
    }
}

fn rank_by_rating<'a>(games: impl Iterator<Item = &'a Game>, limit: usize) -> Vec<&'a Game> {
    let mut games: Vec<&'a Game> = games.collect();
    games.sort_by_key(|g| Reverse(g.metacritic_score));
    games.truncate(limit);
    games
}
