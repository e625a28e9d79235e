use serde::{Deserialize, Serialize};

use super::errors::StatOverflow;
use crate::tournament::{EntityRef, Outcome};

/// Cumulative statistics for one entity.
///
/// Every field is an integer, so folding games in any order gives the same totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityStats {
    pub games_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub result_sum: i64,
    pub placement_points: i64,
}

impl EntityStats {
    /// Adds one contribution. Fails without changing `self` if a total would leave its range.
    pub fn apply(&mut self, data: &CollectedData) -> Result<(), StatOverflow> {
        let mut next = *self;
        match data {
            CollectedData::Outcome { outcome, .. } => {
                next.games_played = add_count(next.games_played, 1)?;
                match outcome {
                    Outcome::Win => next.wins = add_count(next.wins, 1)?,
                    Outcome::Draw => next.draws = add_count(next.draws, 1)?,
                    Outcome::Loss => next.losses = add_count(next.losses, 1)?,
                }
            }
            CollectedData::ResultValue { value, .. } => {
                next.result_sum = add_sum(next.result_sum, *value)?;
            }
            CollectedData::PlacementPoints { points, .. } => {
                next.placement_points = add_sum(next.placement_points, *points)?;
            }
        }
        *self = next;
        Ok(())
    }

    pub fn merge(&mut self, other: &EntityStats) -> Result<(), StatOverflow> {
        *self = EntityStats {
            games_played: add_count(self.games_played, other.games_played)?,
            wins: add_count(self.wins, other.wins)?,
            draws: add_count(self.draws, other.draws)?,
            losses: add_count(self.losses, other.losses)?,
            result_sum: add_sum(self.result_sum, other.result_sum)?,
            placement_points: add_sum(self.placement_points, other.placement_points)?,
        };
        Ok(())
    }
}

fn add_count(total: u32, extra: u32) -> Result<u32, StatOverflow> {
    total.checked_add(extra).ok_or(StatOverflow)
}

fn add_sum(total: i64, extra: i64) -> Result<i64, StatOverflow> {
    total.checked_add(extra).ok_or(StatOverflow)
}

#[derive(Debug, Clone, PartialEq)]
pub enum CollectedData {
    Outcome { entity: EntityRef, outcome: Outcome },
    ResultValue { entity: EntityRef, value: i64 },
    PlacementPoints { entity: EntityRef, points: i64 },
}

impl CollectedData {
    pub fn entity(&self) -> EntityRef {
        match self {
            CollectedData::Outcome { entity, .. } => *entity,
            CollectedData::ResultValue { entity, .. } => *entity,
            CollectedData::PlacementPoints { entity, .. } => *entity,
        }
    }
}
