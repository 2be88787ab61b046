use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::services::{AssetStore, MatchScorer, TierThresholds};

/// Shared application state
///
/// The catalog sits behind a single read/write lock. Ranking handlers hold
/// the read guard for the whole pipeline so a response never mixes catalog
/// versions.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RwLock<Catalog>>,
    pub scorer: Arc<MatchScorer>,
    pub thresholds: TierThresholds,
    pub assets: Arc<dyn AssetStore>,
    /// Where `POST /catalog/save` writes; `None` disables saving
    pub catalog_path: Option<PathBuf>,
    pub recommendation_limit: usize,
    pub related_limit: usize,
}

impl AppState {
    /// Creates state with the default scoring policy and page sizes
    pub fn new(catalog: Catalog, assets: Arc<dyn AssetStore>) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            scorer: Arc::new(MatchScorer::default()),
            thresholds: TierThresholds::default(),
            assets,
            catalog_path: None,
            recommendation_limit: 15,
            related_limit: 3,
        }
    }

    /// Creates state with policy, thresholds, limits and save path from config
    pub fn from_config(config: &Config, catalog: Catalog, assets: Arc<dyn AssetStore>) -> Self {
        Self {
            scorer: Arc::new(MatchScorer::new(config.scoring_policy())),
            thresholds: config.tier_thresholds(),
            catalog_path: Some(PathBuf::from(&config.catalog_path)),
            recommendation_limit: config.recommendation_limit,
            related_limit: config.related_limit,
            ..Self::new(catalog, assets)
        }
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }
}
