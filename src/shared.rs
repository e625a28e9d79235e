use thiserror::Error;

use crate::formula::FormulaError;
use crate::permissions::PermissionError;
use crate::stats::MalformedGameError;
use crate::tournament::{GameId, TournamentId};

/// Crate-level error returned by the services
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Malformed game: {0}")]
    MalformedGame(#[from] MalformedGameError),

    #[error(transparent)]
    Formula(#[from] FormulaError),

    #[error("Permission denied: {0}")]
    Permission(#[from] PermissionError),

    #[error("Tournament {0} not found")]
    TournamentNotFound(TournamentId),

    #[error("Game {0} not found")]
    GameNotFound(GameId),

    #[error("Repository error: {0}")]
    Repository(String),
}
