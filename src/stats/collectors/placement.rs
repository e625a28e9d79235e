use super::super::{CollectedData, CollectedDataBatch, StatCollector};
use crate::formula::PlacementScoring;
use crate::tournament::Game;

/// Converts finishing positions into table points. Participants without a placement
/// contribute nothing.
pub struct PlacementCollector {
    table: PlacementScoring,
}

impl PlacementCollector {
    pub fn new(table: PlacementScoring) -> Self {
        Self { table }
    }
}

impl StatCollector for PlacementCollector {
    fn collect(&self, game: &Game) -> CollectedDataBatch {
        game.participants
            .iter()
            .filter_map(|participant| {
                participant
                    .placement
                    .map(|placement| CollectedData::PlacementPoints {
                        entity: participant.entity,
                        points: self.table.points_for(placement),
                    })
            })
            .collect()
    }
}
