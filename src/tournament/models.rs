use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use uuid::Uuid;

macro_rules! id_type {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(
                Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
            )]
            #[serde(transparent)]
            pub struct $name(pub Uuid);

            impl $name {
                pub fn new() -> Self {
                    Self(Uuid::new_v4())
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.0.fmt(f)
                }
            }
        )*
    };
}

id_type!(
    TournamentId,
    PlayerId,
    TeamId,
    GameId,
    /// Identifier of a scoring formula
    FormulaId,
);

/// The unit being ranked: a single player or a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum EntityRef {
    Player(PlayerId),
    Team(TeamId),
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::Player(id) => write!(f, "player:{id}"),
            EntityRef::Team(id) => write!(f, "team:{id}"),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub game_type: String,
    pub is_active: bool,
    pub starts_on: NaiveDate,
    pub ends_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    pub image_ref: Option<String>,
}

/// Per-tournament capability set. Every flag is explicit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub is_administrator: bool,
    pub can_record_results: bool,
    pub can_manage_formulas: bool,
}

impl Capabilities {
    pub fn administrator() -> Self {
        Self {
            is_administrator: true,
            ..Self::default()
        }
    }
}

/// Membership of a player in a tournament.
///
/// A removed member is still supplied with `left_at` set so that games
/// recorded while they belonged to the tournament remain valid input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentMembership {
    pub tournament_id: TournamentId,
    pub player_id: PlayerId,
    pub capabilities: Capabilities,
    pub joined_at: DateTime<Utc>,
    pub left_at: Option<DateTime<Utc>>,
}

impl TournamentMembership {
    /// Whether the membership window `[joined_at, left_at)` contains `at`
    pub fn covers(&self, at: DateTime<Utc>) -> bool {
        self.joined_at <= at && self.left_at.map_or(true, |left| at < left)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub tournament_id: TournamentId,
    pub name: String,
    pub description: Option<String>,
    pub members: Vec<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameParticipant {
    pub entity: EntityRef,
    pub outcome: Outcome,
    pub result_value: i64,
    /// 1-based finishing position for multi-way games
    pub placement: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub tournament_id: TournamentId,
    pub played_at: DateTime<Utc>,
    pub recorded_by: PlayerId,
    pub participants: Vec<GameParticipant>,
}
