use serde::Deserialize;

use crate::services::{ScoringPolicy, TierThresholds};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// JSON catalog file loaded at startup and written on save
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the asset store; empty serves assets from memory only
    #[serde(default)]
    pub asset_base_url: String,

    /// File extension of stored cover images
    #[serde(default = "default_image_extension")]
    pub image_extension: String,

    /// Page size of multi-filter recommendations
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,

    /// Number of related games shown next to a game
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,

    #[serde(default = "default_genre_weight")]
    pub genre_weight: f64,

    #[serde(default = "default_tag_weight")]
    pub tag_weight: f64,

    #[serde(default = "default_perfect_score")]
    pub perfect_score: f64,

    #[serde(default = "default_partial_base")]
    pub partial_base: f64,

    #[serde(default = "default_perfect_match_threshold")]
    pub perfect_match_threshold: i64,

    #[serde(default = "default_good_match_threshold")]
    pub good_match_threshold: i64,
}

fn default_catalog_path() -> String {
    "data/games.json".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_image_extension() -> String {
    "jpg".to_string()
}

fn default_recommendation_limit() -> usize {
    15
}

fn default_related_limit() -> usize {
    3
}

fn default_genre_weight() -> f64 {
    ScoringPolicy::default().genre_weight
}

fn default_tag_weight() -> f64 {
    ScoringPolicy::default().tag_weight
}

fn default_perfect_score() -> f64 {
    ScoringPolicy::default().perfect_score
}

fn default_partial_base() -> f64 {
    ScoringPolicy::default().partial_base
}

fn default_perfect_match_threshold() -> i64 {
    TierThresholds::default().perfect
}

fn default_good_match_threshold() -> i64 {
    TierThresholds::default().good
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Scoring weights for the match scorer
    pub fn scoring_policy(&self) -> ScoringPolicy {
        ScoringPolicy {
            perfect_score: self.perfect_score,
            partial_base: self.partial_base,
            genre_weight: self.genre_weight,
            tag_weight: self.tag_weight,
        }
    }

    pub fn tier_thresholds(&self) -> TierThresholds {
        TierThresholds {
            perfect: self.perfect_match_threshold,
            good: self.good_match_threshold,
        }
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
