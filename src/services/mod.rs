pub mod assets;
pub mod classifier;
pub mod details;
pub mod ranking;
pub mod scoring;
pub mod vocabulary;

pub use assets::{AssetStore, HttpAssetStore, ImageUrls, InMemoryAssetStore};
pub use classifier::{classify, ClassifiedResults, Tier, TierThresholds};
pub use ranking::{validate_limit, Dashboard, RecommendationEngine};
pub use scoring::{MatchScorer, ScoringPolicy};
pub use vocabulary::{TokenMatch, Vocabulary};
