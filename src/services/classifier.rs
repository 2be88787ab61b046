use std::collections::BTreeSet;

use crate::models::Game;

use super::scoring::MatchScorer;

/// Score thresholds separating the three match tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThresholds {
    /// Minimum score for a perfect match
    pub perfect: i64,
    /// Minimum score for a good match
    pub good: i64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            perfect: 240,
            good: 120,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Perfect,
    Good,
    Other,
}

impl TierThresholds {
    pub fn tier_for(&self, score: i64) -> Tier {
        if score >= self.perfect {
            Tier::Perfect
        } else if score >= self.good {
            Tier::Good
        } else {
            Tier::Other
        }
    }
}

/// A ranked list split into match tiers, order preserved within each tier
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedResults<'a> {
    pub perfect_matches: Vec<&'a Game>,
    pub good_matches: Vec<&'a Game>,
    pub other_matches: Vec<&'a Game>,
}

impl ClassifiedResults<'_> {
    pub fn len(&self) -> usize {
        self.perfect_matches.len() + self.good_matches.len() + self.other_matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions `games` into tiers by their match score
pub fn classify<'a>(
    games: &[&'a Game],
    genre_filter: &BTreeSet<String>,
    tag_filter: &BTreeSet<String>,
    scorer: &MatchScorer,
    thresholds: &TierThresholds,
) -> ClassifiedResults<'a> {
    let mut results = ClassifiedResults {
        perfect_matches: Vec::new(),
        good_matches: Vec::new(),
        other_matches: Vec::new(),
    };

    for &game in games {
        let score = scorer.score(game, genre_filter, tag_filter);
        match thresholds.tier_for(score) {
            Tier::Perfect => results.perfect_matches.push(game),
            Tier::Good => results.good_matches.push(game),
            Tier::Other => results.other_matches.push(game),
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ranking::RecommendationEngine;
    use crate::services::scoring::ScoringPolicy;
    use crate::testing::{sample_catalog, set, titles};

    #[test]
    fn test_tier_boundaries() {
        let thresholds = TierThresholds::default();
        assert_eq!(thresholds.tier_for(240), Tier::Perfect);
        assert_eq!(thresholds.tier_for(239), Tier::Good);
        assert_eq!(thresholds.tier_for(120), Tier::Good);
        assert_eq!(thresholds.tier_for(119), Tier::Other);
        assert_eq!(thresholds.tier_for(0), Tier::Other);
    }

    #[test]
    fn test_classify_ranked_results_with_default_policy() {
        let catalog = sample_catalog();
        let scorer = MatchScorer::default();
        let engine = RecommendationEngine::new(&catalog, &scorer);
        let genres = set(&["RPG", "Action"]);
        let tags = set(&["Open World"]);

        let ranked = engine.multi_filter(&genres, &tags, 15);
        let classified = classify(&ranked, &genres, &tags, &scorer, &TierThresholds::default());

        // Scores 230, 130, 100, 33
        assert!(classified.perfect_matches.is_empty());
        assert_eq!(
            titles(&classified.good_matches),
            vec!["RPG Action Game", "RPG Action Strategy"]
        );
        assert_eq!(
            titles(&classified.other_matches),
            vec!["Masterpiece Game", "Pure Action"]
        );
        assert_eq!(classified.len(), ranked.len());
    }

    #[test]
    fn test_classify_reaches_perfect_tier_with_heavier_genres() {
        let catalog = sample_catalog();
        let scorer = MatchScorer::new(ScoringPolicy {
            perfect_score: 100.0,
            partial_base: 60.0,
            genre_weight: 2.0,
            tag_weight: 1.0,
        });
        let engine = RecommendationEngine::new(&catalog, &scorer);
        let genres = set(&["RPG", "Action"]);
        let tags = set(&["Open World"]);

        let ranked = engine.multi_filter(&genres, &tags, 15);
        let classified = classify(&ranked, &genres, &tags, &scorer, &TierThresholds::default());

        // Scores 300, 200, 100, 60
        assert_eq!(titles(&classified.perfect_matches), vec!["RPG Action Game"]);
        assert_eq!(titles(&classified.good_matches), vec!["RPG Action Strategy"]);
        assert_eq!(
            titles(&classified.other_matches),
            vec!["Masterpiece Game", "Pure Action"]
        );
    }

    #[test]
    fn test_classify_is_a_partition() {
        let catalog = sample_catalog();
        let scorer = MatchScorer::default();
        let all: Vec<&Game> = catalog.games().iter().collect();
        let thresholds = TierThresholds {
            perfect: 200,
            good: 50,
        };

        for (genres, tags) in [
            (set(&[]), set(&[])),
            (set(&["Action"]), set(&[])),
            (set(&["Adventure"]), set(&["Atmospheric", "Open World"])),
            (set(&["Sports", "Racing"]), set(&["Multiplayer"])),
        ] {
            let classified = classify(&all, &genres, &tags, &scorer, &thresholds);
            assert_eq!(classified.len(), all.len());
        }
    }

    #[test]
    fn test_classify_empty_input() {
        let scorer = MatchScorer::default();
        let classified = classify(
            &[],
            &set(&["RPG"]),
            &set(&[]),
            &scorer,
            &TierThresholds::default(),
        );
        assert!(classified.is_empty());
    }
}
