use super::super::{CalculationContext, ScoreCalculator, ScoringWeights};
use crate::stats::EntityStats;

pub struct ResultScoreCalculator;

impl Default for ResultScoreCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultScoreCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl ScoreCalculator for ResultScoreCalculator {
    fn calculate(
        &self,
        stats: &EntityStats,
        weights: &ScoringWeights,
        context: &CalculationContext,
    ) -> f64 {
        context.current_score + stats.result_sum as f64 * weights.result
    }

    fn priority(&self) -> u32 {
        crate::formula::calculator_priority::RESULT
    }
}
