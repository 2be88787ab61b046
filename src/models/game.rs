use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used for `releaseDate` in the catalog file
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// A catalog entry (a game) with its categorical and numeric attributes
///
/// Field names follow the camelCase layout of the catalog JSON file. Unknown
/// fields on load are ignored; missing optional fields fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Identifier, unique within the catalog
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub developer: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub genres: BTreeSet<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Critic rating, 0-100
    #[serde(default)]
    pub metacritic_score: i32,
    /// Age-rating category as displayed (e.g. "Teen", "Mature")
    #[serde(default)]
    pub age_rating: Option<String>,
    #[serde(default)]
    pub user_score: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub platforms: BTreeSet<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub is_multiplayer: bool,
    #[serde(default)]
    pub playtime_hours: u32,
    /// Raw release date, kept verbatim so unparseable values survive a save
    #[serde(default)]
    pub release_date: Option<String>,
}

impl Game {
    /// Creates a game with the given id and title and every other field empty
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            image_url: None,
            thumbnail_url: None,
            developer: None,
            publisher: None,
            genres: BTreeSet::new(),
            tags: BTreeSet::new(),
            metacritic_score: 0,
            age_rating: None,
            user_score: None,
            review_count: 0,
            platforms: BTreeSet::new(),
            price: None,
            is_multiplayer: false,
            playtime_hours: 0,
            release_date: None,
        }
    }

    /// Parsed release date, `None` when absent or not a `YYYY-MM-DD` date
    pub fn release_date(&self) -> Option<NaiveDate> {
        self.release_date
            .as_deref()
            .map(str::trim)
            .and_then(|raw| NaiveDate::parse_from_str(raw, RELEASE_DATE_FORMAT).ok())
    }

    /// Number of this game's genres contained in `genres`
    pub fn genre_overlap(&self, genres: &BTreeSet<String>) -> usize {
        self.genres.intersection(genres).count()
    }

    /// Number of this game's tags contained in `tags`
    pub fn tag_overlap(&self, tags: &BTreeSet<String>) -> usize {
        self.tags.intersection(tags).count()
    }
}
