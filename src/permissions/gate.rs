use super::errors::{PermissionError, ProtectedAction};
use crate::tournament::{Game, TournamentId, TournamentMembership};

/// True iff the member is an administrator or may manage formulas
pub fn can_manage_formula(membership: &TournamentMembership) -> bool {
    let caps = membership.capabilities;
    caps.is_administrator || caps.can_manage_formulas
}

/// True iff the member is an administrator or may record results
pub fn can_record_result(membership: &TournamentMembership) -> bool {
    let caps = membership.capabilities;
    caps.is_administrator || caps.can_record_results
}

/// Checks that `membership` may mutate formulas of `tournament_id`.
///
/// A membership that has ended grants nothing.
pub fn require_formula_manager(
    membership: &TournamentMembership,
    tournament_id: TournamentId,
) -> Result<(), PermissionError> {
    require_same_tournament(membership, tournament_id)?;
    if membership.left_at.is_some() || !can_manage_formula(membership) {
        return Err(PermissionError::Denied {
            player: membership.player_id,
            action: ProtectedAction::ManageFormula,
        });
    }
    Ok(())
}

/// Checks that `membership` may submit `game` and is the player recorded as its author
pub fn require_game_author(
    membership: &TournamentMembership,
    game: &Game,
) -> Result<(), PermissionError> {
    require_same_tournament(membership, game.tournament_id)?;
    if membership.left_at.is_some() || !can_record_result(membership) {
        return Err(PermissionError::Denied {
            player: membership.player_id,
            action: ProtectedAction::RecordResult,
        });
    }
    if game.recorded_by != membership.player_id {
        return Err(PermissionError::AuthorMismatch {
            recorded_by: game.recorded_by,
            submitted_by: membership.player_id,
        });
    }
    Ok(())
}

fn require_same_tournament(
    membership: &TournamentMembership,
    tournament_id: TournamentId,
) -> Result<(), PermissionError> {
    if membership.tournament_id != tournament_id {
        return Err(PermissionError::WrongTournament {
            membership: membership.tournament_id,
            requested: tournament_id,
        });
    }
    Ok(())
}
