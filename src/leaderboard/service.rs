use std::sync::Arc;
use tracing::instrument;

use super::assembler::compute_leaderboard;
use super::models::Leaderboard;
use crate::config::EngineConfig;
use crate::shared::EngineError;
use crate::tournament::{FormulaId, SnapshotSource, TournamentId};

/// Loads a tournament snapshot and ranks it on request.
///
/// Holds no state between calls, so any number of computations may run at once.
pub struct LeaderboardService {
    source: Arc<dyn SnapshotSource>,
    config: EngineConfig,
}

impl LeaderboardService {
    pub fn new(source: Arc<dyn SnapshotSource>, config: EngineConfig) -> Self {
        Self { source, config }
    }

    /// Ranks the tournament with `formula_id`, or with its active formula when `None`
    #[instrument(skip(self))]
    pub async fn compute_leaderboard(
        &self,
        tournament_id: TournamentId,
        formula_id: Option<FormulaId>,
    ) -> Result<Leaderboard, EngineError> {
        let snapshot = self
            .source
            .load_snapshot(tournament_id)
            .await?
            .ok_or(EngineError::TournamentNotFound(tournament_id))?;

        Ok(compute_leaderboard(
            &snapshot,
            formula_id,
            &self.config.weight_defaults,
        )?)
    }
}
