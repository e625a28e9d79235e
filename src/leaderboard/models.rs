use serde::{Deserialize, Serialize};

use crate::ranking::RankedEntity;
use crate::tournament::{EntityRef, FormulaId, TournamentId};

/// One ranked row. Derived on demand, never stored as a source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub entity: EntityRef,
    pub display_name: String,
    pub score: f64,
    pub games_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub result_sum: i64,
    pub placement_points: i64,
}

impl From<RankedEntity> for LeaderboardEntry {
    fn from(ranked: RankedEntity) -> Self {
        let RankedEntity { rank, scored } = ranked;
        Self {
            rank,
            entity: scored.entity,
            display_name: scored.display_name,
            score: scored.score,
            games_played: scored.stats.games_played,
            wins: scored.stats.wins,
            draws: scored.stats.draws,
            losses: scored.stats.losses,
            result_sum: scored.stats.result_sum,
            placement_points: scored.stats.placement_points,
        }
    }
}

/// Ranked snapshot of a tournament under one formula.
///
/// A view the formula does not configure is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub tournament_id: TournamentId,
    pub formula_id: FormulaId,
    pub individual: Vec<LeaderboardEntry>,
    pub team: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn is_empty(&self) -> bool {
        self.individual.is_empty() && self.team.is_empty()
    }
}
