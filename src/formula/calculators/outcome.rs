use super::super::{CalculationContext, ScoreCalculator, ScoringWeights};
use crate::stats::EntityStats;

/// Adds wins, draws and losses, in that order
pub struct OutcomeScoreCalculator;

impl Default for OutcomeScoreCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeScoreCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl ScoreCalculator for OutcomeScoreCalculator {
    fn calculate(
        &self,
        stats: &EntityStats,
        weights: &ScoringWeights,
        context: &CalculationContext,
    ) -> f64 {
        let mut score = context.current_score;
        score += f64::from(stats.wins) * weights.win;
        score += f64::from(stats.draws) * weights.draw;
        score += f64::from(stats.losses) * weights.loss;
        score
    }

    fn priority(&self) -> u32 {
        crate::formula::calculator_priority::OUTCOME
    }
}
