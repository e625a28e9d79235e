use std::sync::Arc;
use tracing::{info, instrument};

use super::models::{Game, GameId, TournamentId, TournamentMembership};
use super::repository::GameLedger;
use crate::permissions::{require_game_author, PermissionError, ProtectedAction};
use crate::shared::EngineError;

/// Accepts game results from members allowed to record them.
///
/// Structural problems with a game are not checked here; they surface when the
/// leaderboard is next computed.
pub struct ResultsService {
    ledger: Arc<dyn GameLedger>,
}

impl ResultsService {
    pub fn new(ledger: Arc<dyn GameLedger>) -> Self {
        Self { ledger }
    }

    #[instrument(skip(self, actor, game), fields(game_id = %game.id, player_id = %actor.player_id))]
    pub async fn record_game(
        &self,
        actor: &TournamentMembership,
        game: Game,
    ) -> Result<(), EngineError> {
        require_game_author(actor, &game)?;
        self.ledger.insert_game(game).await?;
        info!("Game recorded");
        Ok(())
    }

    /// Replaces a recorded game. Only its author or an administrator may edit it.
    #[instrument(skip(self, actor, game), fields(game_id = %game.id, player_id = %actor.player_id))]
    pub async fn replace_game(
        &self,
        actor: &TournamentMembership,
        game: Game,
    ) -> Result<(), EngineError> {
        let existing = self.existing_game(game.tournament_id, game.id).await?;
        self.require_editor(actor, &existing)?;
        if !actor.capabilities.is_administrator {
            require_game_author(actor, &game)?;
        }
        self.ledger.replace_game(game).await?;
        info!("Game replaced");
        Ok(())
    }

    #[instrument(skip(self, actor), fields(player_id = %actor.player_id))]
    pub async fn delete_game(
        &self,
        actor: &TournamentMembership,
        tournament_id: TournamentId,
        game_id: GameId,
    ) -> Result<Game, EngineError> {
        let existing = self.existing_game(tournament_id, game_id).await?;
        self.require_editor(actor, &existing)?;
        let removed = self.ledger.remove_game(tournament_id, game_id).await?;
        info!("Game deleted");
        Ok(removed)
    }

    async fn existing_game(
        &self,
        tournament_id: TournamentId,
        game_id: GameId,
    ) -> Result<Game, EngineError> {
        self.ledger
            .game(tournament_id, game_id)
            .await?
            .ok_or(EngineError::GameNotFound(game_id))
    }

    fn require_editor(&self, actor: &TournamentMembership, existing: &Game) -> Result<(), EngineError> {
        if actor.capabilities.is_administrator && actor.left_at.is_none() {
            if actor.tournament_id != existing.tournament_id {
                return Err(PermissionError::WrongTournament {
                    membership: actor.tournament_id,
                    requested: existing.tournament_id,
                }
                .into());
            }
            return Ok(());
        }
        require_game_author(actor, existing).map_err(|err| match err {
            PermissionError::AuthorMismatch { .. } => PermissionError::Denied {
                player: actor.player_id,
                action: ProtectedAction::RecordResult,
            },
            other => other,
        })?;
        Ok(())
    }
}
