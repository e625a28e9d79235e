use super::super::{CollectedData, CollectedDataBatch, StatCollector};
use crate::tournament::Game;

pub struct ResultValueCollector;

impl Default for ResultValueCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultValueCollector {
    pub fn new() -> Self {
        Self
    }
}

impl StatCollector for ResultValueCollector {
    fn collect(&self, game: &Game) -> CollectedDataBatch {
        game.participants
            .iter()
            .map(|participant| CollectedData::ResultValue {
                entity: participant.entity,
                value: participant.result_value,
            })
            .collect()
    }
}
