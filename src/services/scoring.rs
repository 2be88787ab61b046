use std::collections::BTreeSet;

use crate::models::Game;

/// Slack absorbing float error in sums whose exact value ends in .5
const ROUNDING_TOLERANCE: f64 = 1e-9;

/// Weights and bases used by [`MatchScorer`]
///
/// Each filter dimension contributes `weight * perfect_score` when every
/// requested token is present, otherwise `weight * partial_base * ratio`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    pub perfect_score: f64,
    pub partial_base: f64,
    pub genre_weight: f64,
    pub tag_weight: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            perfect_score: 100.0,
            partial_base: 50.0,
            genre_weight: 1.3,
            tag_weight: 1.0,
        }
    }
}

/// Scores how well a game satisfies genre and tag filters
#[derive(Debug, Clone, Default)]
pub struct MatchScorer {
    policy: ScoringPolicy,
}

impl MatchScorer {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    /// Match score of `game` against the filters, rounded half-up
    ///
    /// An empty filter contributes nothing. A non-empty filter with no
    /// overlap contributes `partial_base * 0`.
    pub fn score(
        &self,
        game: &Game,
        genre_filter: &BTreeSet<String>,
        tag_filter: &BTreeSet<String>,
    ) -> i64 {
        let genre = self.dimension(
            game.genre_overlap(genre_filter),
            genre_filter.len(),
            self.policy.genre_weight,
        );
        let tag = self.dimension(
            game.tag_overlap(tag_filter),
            tag_filter.len(),
            self.policy.tag_weight,
        );

        round_half_up(genre + tag)
    }

    fn dimension(&self, matched: usize, requested: usize, weight: f64) -> f64 {
        if requested == 0 {
            return 0.0;
        }

        if matched == requested {
            weight * self.policy.perfect_score
        } else {
            let ratio = matched as f64 / requested as f64;
            weight * (self.policy.partial_base * ratio)
        }
    }
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5 + ROUNDING_TOLERANCE).floor() as i64
}
