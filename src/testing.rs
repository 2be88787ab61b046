//! Shared fixtures for unit tests.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::models::Game;

pub fn set(tokens: &[&str]) -> BTreeSet<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

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
    review_count: u32,
) -> Game {
    let mut game = Game::new(id, title);
    game.genres = set(genres);
    game.tags = set(tags);
    game.metacritic_score = metacritic_score;
    game.developer = Some(developer.to_string());
    game.platforms = set(platforms);
    game.release_date = Some(release_date.to_string());
    game.review_count = review_count;
    game
}

/// Eight games covering every ranking dimension
pub fn sample_games() -> Vec<Game> {
    vec![
        game(
            "game1",
            "RPG Action Game",
            &["RPG", "Action"],
            &["Open World", "Fantasy"],
            85,
            "GameStudio A",
            &["PC", "PlayStation"],
            "2019-05-15",
            1200,
        ),
        game(
            "game2",
            "RPG Action Strategy",
            &["RPG", "Action", "Strategy"],
            &["Story Rich", "Turn-based"],
            92,
            "GameStudio B",
            &["PC", "Xbox", "PlayStation"],
            "2020-11-10",
            3400,
        ),
        game(
            "game3",
            "Pure Action",
            &["Action"],
            &["Arcade"],
            78,
            "GameStudio A",
            &["Xbox"],
            "2018-03-20",
            800,
        ),
        game(
            "game4",
            "Pure Strategy",
            &["Strategy"],
            &["Turn-based", "Multiplayer"],
            88,
            "GameStudio C",
            &["PC"],
            "2021-06-30",
            950,
        ),
        game(
            "game5",
            "Masterpiece Game",
            &["Adventure"],
            &["Atmospheric", "Open World", "Story Rich"],
            96,
            "Elite Studios",
            &["PC", "PlayStation", "Xbox", "Nintendo Switch"],
            "2022-02-25",
            5200,
        ),
        game(
            "game6",
            "Budget Game",
            &["Casual"],
            &["Indie"],
            65,
            "Indie Dev",
            &["PC"],
            "2017-08-12",
            150,
        ),
        game(
            "game7",
            "Cross Platform Hit",
            &["Sports"],
            &["Multiplayer", "Arcade"],
            82,
            "GameStudio A",
            &["PC", "PlayStation", "Xbox", "Nintendo Switch", "Mobile"],
            "2020-09-04",
            4100,
        ),
        game(
            "game8",
            "Console Exclusive",
            &["Racing"],
            &["Multiplayer", "Cinematic"],
            89,
            "Console Studios",
            &["PlayStation"],
            "2021-11-19",
            2100,
        ),
    ]
}

pub fn sample_catalog() -> Catalog {
    Catalog::from_games(sample_games())
}

pub fn titles(games: &[&Game]) -> Vec<String> {
    games.iter().map(|g| g.title.clone()).collect()
}
