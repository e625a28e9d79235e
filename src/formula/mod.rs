pub mod calculators;
pub mod evaluator;
pub mod service;

mod errors;
pub mod models;
mod validation;

pub use errors::{DegenerateReason, FormulaError};
pub use evaluator::FormulaEvaluator;
pub use models::*;
pub use service::FormulaService;
pub use validation::validate_formula;

use crate::stats::EntityStats;

/// Priority constants for score calculators.
/// Lower values run first, which fixes the summation order of the score.
pub mod calculator_priority {
    /// Wins, draws, losses
    pub const OUTCOME: u32 = 100;
    /// Result value sum
    pub const RESULT: u32 = 200;
    /// Placement points
    pub const PLACEMENT: u32 = 300;
}

/// One term of the score. Each calculator receives the running score and returns it
/// with its own contribution added.
pub trait ScoreCalculator: Send + Sync {
    fn calculate(
        &self,
        stats: &EntityStats,
        weights: &ScoringWeights,
        context: &CalculationContext,
    ) -> f64;

    fn priority(&self) -> u32;
}

pub struct CalculationContext {
    pub current_score: f64,
}

impl CalculationContext {
    pub fn new(current_score: f64) -> Self {
        Self { current_score }
    }
}
