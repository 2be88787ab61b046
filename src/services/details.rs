use serde::Serialize;

use crate::{error::AppResult, models::Game};

use super::assets::{AssetStore, ImageUrls};

/// A catalog record joined with its display assets
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameDetails {
    #[serde(flatten)]
    pub game: Game,
    pub details_html: Option<String>,
    /// `None` when the asset store publishes no images
    pub image_urls: Option<ImageUrls>,
}

/// Service function for the game details view
///
/// The asset store is only consulted by id; a missing details fragment is
/// reported as `None` rather than an error.
pub async fn game_details(game: Game, assets: &dyn AssetStore) -> AppResult<GameDetails> {
    let details_html = assets.details_asset(&game.id).await?;
    let image_urls = assets.image_urls(&game.id);

    tracing::debug!(
        game_id = %game.id,
        store = assets.name(),
        has_details = details_html.is_some(),
        "Game details assembled"
    );

    Ok(GameDetails {
        game,
        details_html,
        image_urls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::assets::MockAssetStore;

    fn urls(id: &str) -> ImageUrls {
        ImageUrls {
            original_url: format!("http://cdn/games/{}/original.jpg", id),
            thumbnail_url: format!("http://cdn/games/{}/thumbnail.jpg", id),
        }
    }

    #[test]
    fn test_game_details_joins_assets() {
        let mut store = MockAssetStore::new();
        store
            .expect_details_asset()
            .withf(|id| id == "game5")
            .times(1)
            .returning(|_| Ok(Some("<h2>Masterpiece</h2>".to_string())));
        store
            .expect_image_urls()
            .withf(|id| id == "game5")
            .returning(|id| Some(urls(id)));
        store.expect_name().return_const("mock");

        let game = Game::new("game5", "Masterpiece Game");
        let details = tokio_test::block_on(game_details(game.clone(), &store)).unwrap();

        assert_eq!(details.game, game);
        assert_eq!(details.details_html.as_deref(), Some("<h2>Masterpiece</h2>"));
        assert_eq!(details.image_urls, Some(urls("game5")));

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["id"], "game5");
        assert_eq!(json["detailsHtml"], "<h2>Masterpiece</h2>");
        assert_eq!(
            json["imageUrls"]["thumbnailUrl"],
            "http://cdn/games/game5/thumbnail.jpg"
        );
    }

    #[tokio::test]
    async fn test_game_details_without_fragment() {
        let mut store = MockAssetStore::new();
        store.expect_details_asset().returning(|_| Ok(None));
        store.expect_image_urls().returning(|id| Some(urls(id)));
        store.expect_name().return_const("mock");

        let details = game_details(Game::new("game6", "Budget Game"), &store)
            .await
            .unwrap();
        assert!(details.details_html.is_none());
    }

    #[tokio::test]
    async fn test_game_details_without_images() {
        let mut store = MockAssetStore::new();
        store.expect_details_asset().returning(|_| Ok(None));
        store.expect_image_urls().returning(|_| None);
        store.expect_name().return_const("mock");

        let details = game_details(Game::new("game1", "RPG Action Game"), &store)
            .await
            .unwrap();
        let json = serde_json::to_value(&details).unwrap();
        assert!(json["imageUrls"].is_null());
        assert!(json["detailsHtml"].is_null());
    }

    #[tokio::test]
    async fn test_game_details_propagates_store_failure() {
        let mut store = MockAssetStore::new();
        store
            .expect_details_asset()
            .returning(|_| Err(AppError::ExternalApi("asset store returned 503".to_string())));

        let result = game_details(Game::new("game1", "RPG Action Game"), &store).await;
        assert!(matches!(result, Err(AppError::ExternalApi(_))));
    }
}
