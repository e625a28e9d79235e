pub mod aggregator;
pub mod collectors;

mod errors;
pub mod models;

pub use aggregator::{roll_up_teams, ResultAggregator, StatsTable};
pub use errors::{MalformedGameError, StatOverflow};
pub use models::*;

use crate::tournament::Game;

pub type CollectedDataBatch = Vec<CollectedData>;

/// Extracts per-participant contributions from a single, already validated game
pub trait StatCollector: Send + Sync {
    fn collect(&self, game: &Game) -> CollectedDataBatch;
}
