//! Object store abstraction for per-game display assets
//!
//! This module provides a pluggable content store keyed by game id. Assets
//! are laid out as `games/{id}/details.html`, `games/{id}/original.{ext}`
//! and `games/{id}/thumbnail.{ext}`.

use std::collections::HashMap;

use reqwest::{Client as HttpClient, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Public URLs of a game's cover image and its thumbnail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageUrls {
    pub original_url: String,
    pub thumbnail_url: String,
}

/// Trait for the content store holding game assets
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AssetStore: Send + Sync {
    /// Fetch the HTML details fragment for a game
    ///
    /// Returns `None` when the store has no details for this id.
    async fn details_asset(&self, game_id: &str) -> AppResult<Option<String>>;

    /// Original and thumbnail image URLs for a game
    ///
    /// Returns `None` when the store has no public base URL.
    fn image_urls(&self, game_id: &str) -> Option<ImageUrls>;

    /// Store name for logging and debugging
    fn name(&self) -> &'static str;
}

fn object_key(game_id: &str, name: &str) -> String {
    format!("games/{}/{}", game_id, name)
}

fn image_urls_under(base_url: &str, game_id: &str, extension: &str) -> Option<ImageUrls> {
    let base = base_url.trim_end_matches('/');
    if base.is_empty() {
        return None;
    }

    Some(ImageUrls {
        original_url: format!(
            "{}/{}",
            base,
            object_key(game_id, &format!("original.{}", extension))
        ),
        thumbnail_url: format!(
            "{}/{}",
            base,
            object_key(game_id, &format!("thumbnail.{}", extension))
        ),
    })
}

/// Asset store served over plain HTTP (e.g. a public bucket endpoint)
pub struct HttpAssetStore {
    http_client: HttpClient,
    base_url: String,
    image_extension: String,
}

impl HttpAssetStore {
    pub fn new(base_url: String, image_extension: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
            image_extension,
        }
    }

    fn url_for(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }
}

#[async_trait::async_trait]
impl AssetStore for HttpAssetStore {
    async fn details_asset(&self, game_id: &str) -> AppResult<Option<String>> {
        let url = self.url_for(&object_key(game_id, "details.html"));
        tracing::debug!(game_id = %game_id, url = %url, "Fetching details asset");

        let response = self.http_client.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.text().await?)),
            status => {
                tracing::warn!(game_id = %game_id, status = %status, "Asset store request failed");
                Err(AppError::ExternalApi(format!(
                    "asset store returned {} for {}",
                    status, game_id
                )))
            }
        }
    }

    fn image_urls(&self, game_id: &str) -> Option<ImageUrls> {
        image_urls_under(&self.base_url, game_id, &self.image_extension)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Asset store backed by a map held in memory
///
/// Used when no remote store is configured, and in tests. With an empty base
/// URL it publishes no image URLs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssetStore {
    base_url: String,
    image_extension: String,
    details: HashMap<String, String>,
}

impl InMemoryAssetStore {
    pub fn new(base_url: String, image_extension: String) -> Self {
        Self {
            base_url,
            image_extension,
            details: HashMap::new(),
        }
    }

    /// Stores the details fragment for a game, replacing any previous one
    pub fn insert_details(&mut self, game_id: impl Into<String>, html: impl Into<String>) {
        self.details.insert(game_id.into(), html.into());
    }
}

#[async_trait::async_trait]
impl AssetStore for InMemoryAssetStore {
    async fn details_asset(&self, game_id: &str) -> AppResult<Option<String>> {
        Ok(self.details.get(game_id).cloned())
    }

    fn image_urls(&self, game_id: &str) -> Option<ImageUrls> {
        image_urls_under(&self.base_url, game_id, &self.image_extension)
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}
