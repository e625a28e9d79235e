use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::models::{FormulaId, Game, GameId, TournamentId};
use super::snapshot::TournamentSnapshot;
use crate::formula::{Formula, FormulaError};
use crate::shared::EngineError;

/// Supplies a consistent, point-in-time snapshot of one tournament
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn load_snapshot(
        &self,
        tournament_id: TournamentId,
    ) -> Result<Option<TournamentSnapshot>, EngineError>;
}

#[async_trait]
pub trait FormulaStore: Send + Sync {
    async fn formulas(&self, tournament_id: TournamentId) -> Result<Vec<Formula>, EngineError>;

    /// Inserts the formula, or replaces the stored one with the same id
    async fn save_formula(&self, formula: Formula) -> Result<(), EngineError>;

    /// Atomically makes `formula_id` the only active formula of the tournament
    async fn set_active_formula(
        &self,
        tournament_id: TournamentId,
        formula_id: FormulaId,
    ) -> Result<(), EngineError>;
}

#[async_trait]
pub trait GameLedger: Send + Sync {
    async fn game(
        &self,
        tournament_id: TournamentId,
        game_id: GameId,
    ) -> Result<Option<Game>, EngineError>;
    async fn insert_game(&self, game: Game) -> Result<(), EngineError>;
    async fn replace_game(&self, game: Game) -> Result<(), EngineError>;
    async fn remove_game(
        &self,
        tournament_id: TournamentId,
        game_id: GameId,
    ) -> Result<Game, EngineError>;
}

/// In-memory implementation of the storage seams for development and testing
#[derive(Debug, Default)]
pub struct InMemoryTournamentStore {
    tournaments: Arc<RwLock<HashMap<TournamentId, TournamentSnapshot>>>,
}

impl InMemoryTournamentStore {
    pub fn new() -> Self {
        Self {
            tournaments: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Stores or replaces everything known about a tournament
    pub async fn insert_snapshot(&self, snapshot: TournamentSnapshot) {
        let mut tournaments = self.tournaments.write().await;
        tournaments.insert(snapshot.tournament_id(), snapshot);
    }
}

#[async_trait]
impl SnapshotSource for InMemoryTournamentStore {
    #[instrument(skip(self))]
    async fn load_snapshot(
        &self,
        tournament_id: TournamentId,
    ) -> Result<Option<TournamentSnapshot>, EngineError> {
        let tournaments = self.tournaments.read().await;
        Ok(tournaments.get(&tournament_id).cloned())
    }
}

#[async_trait]
impl FormulaStore for InMemoryTournamentStore {
    async fn formulas(&self, tournament_id: TournamentId) -> Result<Vec<Formula>, EngineError> {
        let tournaments = self.tournaments.read().await;
        tournaments
            .get(&tournament_id)
            .map(|snapshot| snapshot.formulas.clone())
            .ok_or(EngineError::TournamentNotFound(tournament_id))
    }

    #[instrument(skip(self, formula), fields(formula_id = %formula.id))]
    async fn save_formula(&self, formula: Formula) -> Result<(), EngineError> {
        let mut tournaments = self.tournaments.write().await;
        let snapshot = tournaments
            .get_mut(&formula.tournament_id)
            .ok_or(EngineError::TournamentNotFound(formula.tournament_id))?;

        match snapshot.formulas.iter_mut().find(|f| f.id == formula.id) {
            Some(existing) => *existing = formula,
            None => snapshot.formulas.push(formula),
        }
        debug!(count = snapshot.formulas.len(), "Formula saved");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_active_formula(
        &self,
        tournament_id: TournamentId,
        formula_id: FormulaId,
    ) -> Result<(), EngineError> {
        let mut tournaments = self.tournaments.write().await;
        let snapshot = tournaments
            .get_mut(&tournament_id)
            .ok_or(EngineError::TournamentNotFound(tournament_id))?;

        if !snapshot.formulas.iter().any(|f| f.id == formula_id) {
            return Err(FormulaError::FormulaNotFound {
                formula_id,
                tournament_id,
            }
            .into());
        }

        for formula in snapshot.formulas.iter_mut() {
            formula.is_active = formula.id == formula_id;
        }
        debug!("Active formula switched");
        Ok(())
    }
}

#[async_trait]
impl GameLedger for InMemoryTournamentStore {
    async fn game(
        &self,
        tournament_id: TournamentId,
        game_id: GameId,
    ) -> Result<Option<Game>, EngineError> {
        let tournaments = self.tournaments.read().await;
        let snapshot = tournaments
            .get(&tournament_id)
            .ok_or(EngineError::TournamentNotFound(tournament_id))?;
        Ok(snapshot.games.iter().find(|g| g.id == game_id).cloned())
    }

    #[instrument(skip(self, game), fields(game_id = %game.id))]
    async fn insert_game(&self, game: Game) -> Result<(), EngineError> {
        let mut tournaments = self.tournaments.write().await;
        let snapshot = tournaments
            .get_mut(&game.tournament_id)
            .ok_or(EngineError::TournamentNotFound(game.tournament_id))?;

        if snapshot.games.iter().any(|g| g.id == game.id) {
            return Err(EngineError::Repository(format!(
                "game {} already exists",
                game.id
            )));
        }
        snapshot.games.push(game);
        debug!(games = snapshot.games.len(), "Game inserted");
        Ok(())
    }

    #[instrument(skip(self, game), fields(game_id = %game.id))]
    async fn replace_game(&self, game: Game) -> Result<(), EngineError> {
        let mut tournaments = self.tournaments.write().await;
        let snapshot = tournaments
            .get_mut(&game.tournament_id)
            .ok_or(EngineError::TournamentNotFound(game.tournament_id))?;

        let existing = snapshot
            .games
            .iter_mut()
            .find(|g| g.id == game.id)
            .ok_or(EngineError::GameNotFound(game.id))?;
        *existing = game;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_game(
        &self,
        tournament_id: TournamentId,
        game_id: GameId,
    ) -> Result<Game, EngineError> {
        let mut tournaments = self.tournaments.write().await;
        let snapshot = tournaments
            .get_mut(&tournament_id)
            .ok_or(EngineError::TournamentNotFound(tournament_id))?;

        let position = snapshot
            .games
            .iter()
            .position(|g| g.id == game_id)
            .ok_or(EngineError::GameNotFound(game_id))?;
        Ok(snapshot.games.remove(position))
    }
}
