use chrono::{Duration, NaiveDate, Utc};

use super::{
    Capabilities, EntityRef, FormulaId, Game, GameId, GameParticipant, Outcome, Player, PlayerId,
    Team, TeamId, Tournament, TournamentId, TournamentMembership, TournamentSnapshot,
};
use crate::formula::{Formula, FormulaConfig};

/// Builds snapshots for unit tests. Every player joins a week before any game.
pub struct SnapshotBuilder {
    snapshot: TournamentSnapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            snapshot: TournamentSnapshot::new(Tournament {
                id: TournamentId::new(),
                name: "Fixture Cup".into(),
                game_type: "generic".into(),
                is_active: true,
                starts_on: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                ends_on: None,
            }),
        }
    }

    pub fn player(&mut self, name: &str) -> PlayerId {
        let id = PlayerId::new();
        self.snapshot.players.push(Player {
            id,
            display_name: name.to_string(),
            image_ref: None,
        });
        self.snapshot.memberships.push(TournamentMembership {
            tournament_id: self.snapshot.tournament_id(),
            player_id: id,
            capabilities: Capabilities::default(),
            joined_at: Utc::now() - Duration::days(7),
            left_at: None,
        });
        id
    }

    pub fn team(&mut self, name: &str, members: &[PlayerId]) -> TeamId {
        let id = TeamId::new();
        self.snapshot.teams.push(Team {
            id,
            tournament_id: self.snapshot.tournament_id(),
            name: name.to_string(),
            description: None,
            members: members.to_vec(),
        });
        id
    }

    /// Two-player game decided by result values
    pub fn duel(&mut self, a: PlayerId, b: PlayerId, result_a: i64, result_b: i64) -> &mut Self {
        let (outcome_a, outcome_b) = match result_a.cmp(&result_b) {
            std::cmp::Ordering::Greater => (Outcome::Win, Outcome::Loss),
            std::cmp::Ordering::Less => (Outcome::Loss, Outcome::Win),
            std::cmp::Ordering::Equal => (Outcome::Draw, Outcome::Draw),
        };
        self.game(vec![
            (EntityRef::Player(a), outcome_a, result_a),
            (EntityRef::Player(b), outcome_b, result_b),
        ])
    }

    pub fn team_duel(&mut self, x: TeamId, y: TeamId, outcome_x: Outcome, outcome_y: Outcome) -> &mut Self {
        self.game(vec![
            (EntityRef::Team(x), outcome_x, 0),
            (EntityRef::Team(y), outcome_y, 0),
        ])
    }

    fn game(&mut self, sides: Vec<(EntityRef, Outcome, i64)>) -> &mut Self {
        let recorded_by = self
            .snapshot
            .players
            .first()
            .map(|p| p.id)
            .unwrap_or_default();
        self.snapshot.games.push(Game {
            id: GameId::new(),
            tournament_id: self.snapshot.tournament_id(),
            played_at: Utc::now() - Duration::days(1),
            recorded_by,
            participants: sides
                .into_iter()
                .map(|(entity, outcome, result_value)| GameParticipant {
                    entity,
                    outcome,
                    result_value,
                    placement: None,
                })
                .collect(),
        });
        self
    }

    pub fn formula(&mut self, config: FormulaConfig) -> FormulaId {
        self.push_formula(config, false)
    }

    pub fn active_formula(&mut self, config: FormulaConfig) -> &mut Self {
        self.push_formula(config, true);
        self
    }

    fn push_formula(&mut self, config: FormulaConfig, is_active: bool) -> FormulaId {
        let id = FormulaId::new();
        self.snapshot.formulas.push(Formula {
            id,
            tournament_id: self.snapshot.tournament_id(),
            name: format!("formula-{}", self.snapshot.formulas.len() + 1),
            is_active,
            config,
        });
        id
    }

    pub fn build(&self) -> TournamentSnapshot {
        self.snapshot.clone()
    }
}
