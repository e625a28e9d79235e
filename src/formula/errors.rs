use thiserror::Error;

use super::models::PrimaryStatistic;
use crate::tournament::{FormulaId, TournamentId};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DegenerateReason {
    #[error("weight `{0}` is not a finite number")]
    NonFiniteWeight(&'static str),

    #[error("placement table is empty")]
    EmptyPlacementTable,

    #[error("primary statistic `{primary}` requires an explicit `{weight}` weight")]
    MissingWeight {
        primary: PrimaryStatistic,
        weight: &'static str,
    },

    #[error("all weights are zero")]
    AllWeightsZero,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormulaError {
    #[error("Degenerate formula: {0}")]
    Degenerate(#[from] DegenerateReason),

    #[error("No active formula for tournament {tournament_id}")]
    NoActiveFormula { tournament_id: TournamentId },

    #[error("Formula {formula_id} not found in tournament {tournament_id}")]
    FormulaNotFound {
        formula_id: FormulaId,
        tournament_id: TournamentId,
    },

    #[error("Tournament {tournament_id} has {count} active formulas")]
    MultipleActiveFormulas {
        tournament_id: TournamentId,
        count: usize,
    },
}
