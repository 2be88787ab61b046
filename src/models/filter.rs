use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

static NO_TOKENS: BTreeSet<String> = BTreeSet::new();

/// Genre and tag sets a caller wants matched
///
/// Each dimension is independently optional. An absent set and an empty set
/// both mean "no constraint from this dimension".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    #[serde(default, alias = "genre")]
    pub genres: Option<BTreeSet<String>>,
    #[serde(default, alias = "tag")]
    pub tags: Option<BTreeSet<String>>,
}

impl FilterCriteria {
    /// Creates criteria from explicit genre and tag sets
    pub fn new(genres: BTreeSet<String>, tags: BTreeSet<String>) -> Self {
        Self {
            genres: Some(genres),
            tags: Some(tags),
        }
    }

    /// Genre tokens, empty when absent
    pub fn genres(&self) -> &BTreeSet<String> {
        self.genres.as_ref().unwrap_or(&NO_TOKENS)
    }

    /// Tag tokens, empty when absent
    pub fn tags(&self) -> &BTreeSet<String> {
        self.tags.as_ref().unwrap_or(&NO_TOKENS)
    }

    /// True when neither dimension constrains anything
    pub fn is_unconstrained(&self) -> bool {
        self.genres().is_empty() && self.tags().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_are_equivalent() {
        let absent = FilterCriteria::default();
        let empty = FilterCriteria::new(BTreeSet::new(), BTreeSet::new());

        assert!(absent.is_unconstrained());
        assert!(empty.is_unconstrained());
        assert_eq!(absent.genres(), empty.genres());
        assert_eq!(absent.tags(), empty.tags());
    }

    #[test]
    fn test_deserialize_accepts_singular_field_names() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"genre": ["RPG", "Action"], "tag": []}"#).unwrap();
        assert_eq!(criteria.genres().len(), 2);
        assert!(criteria.tags().is_empty());
        assert!(!criteria.is_unconstrained());
    }

    #[test]
    fn test_deserialize_null_dimension() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"genres": null, "tags": ["Open World"]}"#).unwrap();
        assert!(criteria.genres().is_empty());
        assert!(criteria.tags().contains("Open World"));
    }
}
