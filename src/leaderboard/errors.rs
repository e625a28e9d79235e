use thiserror::Error;

use crate::formula::FormulaError;
use crate::shared::EngineError;
use crate::stats::MalformedGameError;

/// Why a leaderboard could not be computed from a snapshot
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LeaderboardError {
    #[error(transparent)]
    Formula(#[from] FormulaError),

    #[error("Malformed game: {0}")]
    MalformedGame(#[from] MalformedGameError),
}

impl From<LeaderboardError> for EngineError {
    fn from(err: LeaderboardError) -> Self {
        match err {
            LeaderboardError::Formula(e) => EngineError::Formula(e),
            LeaderboardError::MalformedGame(e) => EngineError::MalformedGame(e),
        }
    }
}
