use std::sync::Arc;

use axum_test::TestServer;
use game_recommender::{
    api::{create_router, AppState},
    catalog::Catalog,
    models::Game,
    services::InMemoryAssetStore,
};

#[allow(clippy::too_many_arguments)]
pub fn game(
    id: &str,
    title: &str,
    genres: &[&str],
    tags: &[&str],
    metacritic_score: i32,
    developer: &str,
    platforms: &[&str],
    release_date: &str,
) -> Game {
    let mut game = Game::new(id, title);
    game.genres = genres.iter().map(|s| s.to_string()).collect();
    game.tags = tags.iter().map(|s| s.to_string()).collect();
    game.metacritic_score = metacritic_score;
    game.developer = Some(developer.to_string());
    game.platforms = platforms.iter().map(|s| s.to_string()).collect();
    game.release_date = Some(release_date.to_string());
    game
}

pub fn sample_catalog() -> Catalog {
    Catalog::from_games(vec![
        game("game1", "RPG Action Game", &["RPG", "Action"], &["Open World", "Fantasy"], 85, "GameStudio A", &["PC", "PlayStation"], "2019-05-15"),
        game("game2", "RPG Action Strategy", &["RPG", "Action", "Strategy"], &["Story Rich", "Turn-based"], 92, "GameStudio B", &["PC", "Xbox", "PlayStation"], "2020-11-10"),
        game("game3", "Pure Action", &["Action"], &["Arcade"], 78, "GameStudio A", &["Xbox"], "2018-03-20"),
        game("game4", "Pure Strategy", &["Strategy"], &["Turn-based", "Multiplayer"], 88, "GameStudio C", &["PC"], "2021-06-30"),
        game("game5", "Masterpiece Game", &["Adventure"], &["Atmospheric", "Open World", "Story Rich"], 96, "Elite Studios", &["PC", "PlayStation", "Xbox", "Nintendo Switch"], "2022-02-25"),
        game("game6", "Budget Game", &["Casual"], &["Indie"], 65, "Indie Dev", &["PC"], ""),
    ])
}

pub fn asset_store() -> InMemoryAssetStore {
    let mut store = InMemoryAssetStore::new("https://cdn.test".to_string(), "jpg".to_string());
    store.insert_details("game5", "<div class=\"game-details\"><h2>Masterpiece</h2></div>");
    store
}

pub fn test_state() -> AppState {
    AppState::new(sample_catalog(), Arc::new(asset_store()))
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(create_router(state)).unwrap()
}

pub fn titles(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["title"].as_str().unwrap().to_string())
        .collect()
}
