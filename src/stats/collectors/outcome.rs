use super::super::{CollectedData, CollectedDataBatch, StatCollector};
use crate::tournament::Game;

/// Records one outcome per participant; this is also what counts games played
pub struct OutcomeCollector;

impl Default for OutcomeCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeCollector {
    pub fn new() -> Self {
        Self
    }
}

impl StatCollector for OutcomeCollector {
    fn collect(&self, game: &Game) -> CollectedDataBatch {
        game.participants
            .iter()
            .map(|participant| CollectedData::Outcome {
                entity: participant.entity,
                outcome: participant.outcome,
            })
            .collect()
    }
}
