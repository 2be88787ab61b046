//! Catalog records and filter criteria shared by the engine and the API layer.

mod filter;
mod game;

pub use filter::FilterCriteria;
pub use game::{Game, RELEASE_DATE_FORMAT};
