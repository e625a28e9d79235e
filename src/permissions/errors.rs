use strum_macros::Display;
use thiserror::Error;

use crate::tournament::{PlayerId, TournamentId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ProtectedAction {
    ManageFormula,
    RecordResult,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PermissionError {
    #[error("Player {player} is not allowed to {action}")]
    Denied {
        player: PlayerId,
        action: ProtectedAction,
    },

    #[error("Membership belongs to tournament {membership}, not {requested}")]
    WrongTournament {
        membership: TournamentId,
        requested: TournamentId,
    },

    #[error("Game is recorded by {recorded_by} but submitted by {submitted_by}")]
    AuthorMismatch {
        recorded_by: PlayerId,
        submitted_by: PlayerId,
    },
}
