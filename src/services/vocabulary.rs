//! Resolution of loosely typed genre/tag names to the catalog's spelling.
//!
//! Callers may send `open-world`, `OPEN_WORLD` or `Open World`; all three
//! resolve to the token stored in the catalog. Resolution never fails: a name
//! that matches nothing comes back as [`TokenMatch::Unknown`].

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::catalog::Catalog;

/// Outcome of resolving a raw token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenMatch {
    /// Canonical catalog spelling
    Known(String),
    /// No catalog token has this normalized form; carries the input verbatim
    Unknown(String),
}

impl TokenMatch {
    /// The canonical token if known, otherwise the raw input
    pub fn into_token(self) -> String {
        match self {
            TokenMatch::Known(token) | TokenMatch::Unknown(token) => token,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, TokenMatch::Known(_))
    }
}

/// Lowercases and collapses `-`, `_` and whitespace runs into one space
pub fn normalize(raw: &str) -> String {
    raw.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Spellings of one token kind, exact and keyed by normalized form
#[derive(Debug, Clone, Default)]
struct TokenIndex {
    exact: HashSet<String>,
    normalized: HashMap<String, String>,
}

impl TokenIndex {
    fn insert(&mut self, token: &str) {
        self.exact.insert(token.to_string());
        // First spelling seen wins when two tokens normalize alike
        self.normalized
            .entry(normalize(token))
            .or_insert_with(|| token.to_string());
    }

    fn resolve(&self, raw: &str) -> TokenMatch {
        if self.exact.contains(raw) {
            return TokenMatch::Known(raw.to_string());
        }

        match self.normalized.get(&normalize(raw)) {
            Some(token) => TokenMatch::Known(token.clone()),
            None => TokenMatch::Unknown(raw.to_string()),
        }
    }
}

/// Genre and tag names present in a catalog
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    genres: TokenIndex,
    tags: TokenIndex,
}

impl Vocabulary {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut vocabulary = Self::default();
        for game in catalog.games() {
            for genre in &game.genres {
                vocabulary.genres.insert(genre);
            }
            for tag in &game.tags {
                vocabulary.tags.insert(tag);
            }
        }
        vocabulary
    }

    pub fn resolve_genre(&self, raw: &str) -> TokenMatch {
        self.genres.resolve(raw)
    }

    pub fn resolve_tag(&self, raw: &str) -> TokenMatch {
        self.tags.resolve(raw)
    }

    /// Resolves every genre, keeping unknown names verbatim
    pub fn canonical_genres<'s>(&self, raw: impl IntoIterator<Item = &'s str>) -> BTreeSet<String> {
        raw.into_iter()
            .map(|r| self.resolve_genre(r).into_token())
            .collect()
    }

    /// Resolves every tag, keeping unknown names verbatim
    pub fn canonical_tags<'s>(&self, raw: impl IntoIterator<Item = &'s str>) -> BTreeSet<String> {
        raw.into_iter()
            .map(|r| self.resolve_tag(r).into_token())
            .collect()
    }
}
