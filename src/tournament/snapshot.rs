use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::{
    EntityRef, Game, Player, PlayerId, Team, TeamId, Tournament, TournamentId,
    TournamentMembership,
};
use crate::formula::Formula;

/// Read-only, point-in-time view of everything the engine needs for one tournament.
///
/// Callers needing a consistent view must build it from a single read transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentSnapshot {
    pub tournament: Tournament,
    pub players: Vec<Player>,
    pub memberships: Vec<TournamentMembership>,
    pub teams: Vec<Team>,
    pub games: Vec<Game>,
    pub formulas: Vec<Formula>,
}

impl TournamentSnapshot {
    pub fn new(tournament: Tournament) -> Self {
        Self {
            tournament,
            players: Vec::new(),
            memberships: Vec::new(),
            teams: Vec::new(),
            games: Vec::new(),
            formulas: Vec::new(),
        }
    }

    pub fn tournament_id(&self) -> TournamentId {
        self.tournament.id
    }

    /// Games that belong to this snapshot's tournament
    pub fn tournament_games(&self) -> impl Iterator<Item = &Game> {
        let id = self.tournament.id;
        self.games.iter().filter(move |game| game.tournament_id == id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Team owned by this tournament
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams
            .iter()
            .find(|t| t.id == id && t.tournament_id == self.tournament.id)
    }

    pub fn tournament_teams(&self) -> impl Iterator<Item = &Team> {
        let id = self.tournament.id;
        self.teams.iter().filter(move |t| t.tournament_id == id)
    }

    /// Whether `player` belonged to the tournament at `at`
    pub fn was_member_at(&self, player: PlayerId, at: DateTime<Utc>) -> bool {
        self.memberships.iter().any(|m| {
            m.tournament_id == self.tournament.id && m.player_id == player && m.covers(at)
        })
    }

    pub fn membership(&self, player: PlayerId) -> Option<&TournamentMembership> {
        self.memberships
            .iter()
            .filter(|m| m.tournament_id == self.tournament.id && m.player_id == player)
            .max_by_key(|m| m.joined_at)
    }

    pub fn display_name(&self, entity: EntityRef) -> Option<&str> {
        match entity {
            EntityRef::Player(id) => self.player(id).map(|p| p.display_name.as_str()),
            EntityRef::Team(id) => self.team(id).map(|t| t.name.as_str()),
        }
    }
}
