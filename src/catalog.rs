//! In-memory game catalog with bulk JSON load/save.
//!
//! The catalog exclusively owns its games. Ranking reads through shared
//! references; mutation goes through `add`, `update` and `delete` only.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::Game;

/// Errors from loading or saving the catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to access catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse catalog file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Ordered collection of games
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    games: Vec<Game>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self { games: Vec::new() }
    }

    /// Creates a catalog holding `games` in the given order
    pub fn from_games(games: Vec<Game>) -> Self {
        Self { games }
    }

    /// Loads a catalog from a JSON array of game records
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let games: Vec<Game> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        tracing::info!(path = %path.display(), game_count = games.len(), "Catalog loaded");

        Ok(Self { games })
    }

    /// Writes the catalog as a pretty-printed JSON array
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.games).map_err(CatalogError::Serialize)?;
        fs::write(path, json).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        tracing::info!(path = %path.display(), game_count = self.games.len(), "Catalog saved");

        Ok(())
    }

    /// Appends a game
    pub fn add(&mut self, game: Game) {
        self.games.push(game);
    }

    /// Replaces the first game with the same id; returns false if none matched
    pub fn update(&mut self, game: Game) -> bool {
        match self.games.iter_mut().find(|g| g.id == game.id) {
            Some(existing) => {
                *existing = game;
                true
            }
            None => false,
        }
    }

    /// Removes every game with the given id; returns how many were removed
    pub fn delete(&mut self, id: &str) -> usize {
        let before = self.games.len();
        self.games.retain(|g| g.id != id);
        before - self.games.len()
    }

    /// Looks up a game by id
    pub fn find_by_id(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    /// All games in catalog order
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
