use std::sync::Arc;

use super::{
    calculators::{OutcomeScoreCalculator, PlacementScoreCalculator, ResultScoreCalculator},
    CalculationContext, ScoreCalculator, ScoringWeights,
};
use crate::stats::EntityStats;

/// Turns cumulative statistics into a single score.
///
/// Pure: the same statistics and weights always produce the same bits, because
/// calculators run in a fixed priority order.
pub struct FormulaEvaluator {
    weights: ScoringWeights,
    calculators: Vec<Arc<dyn ScoreCalculator>>,
}

impl FormulaEvaluator {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            calculators: vec![
                Arc::new(OutcomeScoreCalculator::new()),
                Arc::new(ResultScoreCalculator::new()),
                Arc::new(PlacementScoreCalculator::new()),
            ],
        }
    }

    pub fn with_calculator(mut self, calculator: Arc<dyn ScoreCalculator>) -> Self {
        self.calculators.push(calculator);
        self.calculators.sort_by_key(|c| c.priority());
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score(&self, stats: &EntityStats) -> f64 {
        self.calculators.iter().fold(0.0, |current, calculator| {
            calculator.calculate(stats, &self.weights, &CalculationContext::new(current))
        })
    }
}
