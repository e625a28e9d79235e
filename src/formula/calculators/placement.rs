use super::super::{CalculationContext, ScoreCalculator, ScoringWeights};
use crate::stats::EntityStats;

pub struct PlacementScoreCalculator;

impl Default for PlacementScoreCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementScoreCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl ScoreCalculator for PlacementScoreCalculator {
    fn calculate(
        &self,
        stats: &EntityStats,
        weights: &ScoringWeights,
        context: &CalculationContext,
    ) -> f64 {
        context.current_score + stats.placement_points as f64 * weights.placement
    }

    fn priority(&self) -> u32 {
        crate::formula::calculator_priority::PLACEMENT
    }
}
