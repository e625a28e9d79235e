use thiserror::Error;

use crate::tournament::{EntityRef, GameId, PlayerId, TeamId};

/// A game that cannot be aggregated. Aggregation fails closed on the first one.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MalformedGameError {
    #[error("Game {game_id} has {count} participant(s), at least two are required")]
    TooFewParticipants { game_id: GameId, count: usize },

    #[error("Game {game_id} lists {entity} more than once")]
    DuplicateParticipant { game_id: GameId, entity: EntityRef },

    #[error("Game {game_id} references {entity}, which is unknown to the tournament")]
    UnknownEntity { game_id: GameId, entity: EntityRef },

    #[error("Game {game_id} references player {player_id}, who was not a member when it was played")]
    NotAMember { game_id: GameId, player_id: PlayerId },

    #[error("Game {game_id} gives {entity} placement 0; placements start at 1")]
    InvalidPlacement { game_id: GameId, entity: EntityRef },

    #[error("Game {game_id} pushes a statistic of {entity} out of range")]
    ResultOverflow { game_id: GameId, entity: EntityRef },

    #[error("Member totals of team {team_id} are out of range")]
    TeamTotalOverflow { team_id: TeamId },
}

/// A cumulative statistic would no longer fit its integer type
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Statistic total out of range")]
pub struct StatOverflow;
