//! Snapshot builders for integration tests
#![allow(dead_code)] // Test utilities may not all be used in every test

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use tourney_ranking::{
    Capabilities, EntityRef, Formula, FormulaConfig, FormulaId, Game, GameId, GameParticipant,
    Outcome, Player, PlayerId, Team, TeamId, Tournament, TournamentId, TournamentMembership,
    TournamentSnapshot,
};

/// Start of the tournament used by every builder; games are spaced an hour apart from here
pub fn season_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
}

// ============================================================================
// Tournament Builder
// ============================================================================

pub struct TournamentBuilder {
    snapshot: TournamentSnapshot,
    next_game_at: DateTime<Utc>,
}

impl TournamentBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            snapshot: TournamentSnapshot::new(Tournament {
                id: TournamentId::new(),
                name: name.to_string(),
                game_type: "chess".to_string(),
                is_active: true,
                starts_on: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                ends_on: None,
            }),
            next_game_at: season_start() + Duration::hours(1),
        }
    }

    pub fn tournament_id(&self) -> TournamentId {
        self.snapshot.tournament_id()
    }

    /// Adds a player who joined at the start of the season with no capabilities
    pub fn player(&mut self, name: &str) -> PlayerId {
        self.member(name, Capabilities::default())
    }

    pub fn member(&mut self, name: &str, capabilities: Capabilities) -> PlayerId {
        let id = PlayerId::new();
        self.snapshot.players.push(Player {
            id,
            display_name: name.to_string(),
            image_ref: None,
        });
        self.snapshot.memberships.push(TournamentMembership {
            tournament_id: self.tournament_id(),
            player_id: id,
            capabilities,
            joined_at: season_start(),
            left_at: None,
        });
        id
    }

    pub fn team(&mut self, name: &str, members: &[PlayerId]) -> TeamId {
        let id = TeamId::new();
        self.snapshot.teams.push(Team {
            id,
            tournament_id: self.tournament_id(),
            name: name.to_string(),
            description: None,
            members: members.to_vec(),
        });
        id
    }

    /// Marks a player as having left after every game recorded so far
    pub fn remove_member(&mut self, player: PlayerId) -> &mut Self {
        let left_at = self.next_game_at;
        for membership in self
            .snapshot
            .memberships
            .iter_mut()
            .filter(|m| m.player_id == player)
        {
            membership.left_at = Some(left_at);
        }
        self.next_game_at += Duration::hours(1);
        self
    }

    /// Two-player game; the outcome follows from the result values
    pub fn duel(&mut self, a: PlayerId, b: PlayerId, result_a: i64, result_b: i64) -> &mut Self {
        let (outcome_a, outcome_b) = match result_a.cmp(&result_b) {
            std::cmp::Ordering::Greater => (Outcome::Win, Outcome::Loss),
            std::cmp::Ordering::Less => (Outcome::Loss, Outcome::Win),
            std::cmp::Ordering::Equal => (Outcome::Draw, Outcome::Draw),
        };
        let game = self.game(vec![
            participant(EntityRef::Player(a), outcome_a, result_a),
            participant(EntityRef::Player(b), outcome_b, result_b),
        ]);
        self.snapshot.games.push(game);
        self
    }

    /// Multi-way game where the first player finishes first, and so on
    pub fn free_for_all(&mut self, finishing_order: &[PlayerId]) -> &mut Self {
        let participants = finishing_order
            .iter()
            .enumerate()
            .map(|(position, player)| GameParticipant {
                entity: EntityRef::Player(*player),
                outcome: if position == 0 { Outcome::Win } else { Outcome::Loss },
                result_value: 0,
                placement: Some(position as u32 + 1),
            })
            .collect();
        let game = self.game(participants);
        self.snapshot.games.push(game);
        self
    }

    /// Builds a game at the next free time slot without adding it to the snapshot
    pub fn game(&mut self, participants: Vec<GameParticipant>) -> Game {
        let played_at = self.next_game_at;
        self.next_game_at += Duration::hours(1);
        Game {
            id: GameId::new(),
            tournament_id: self.tournament_id(),
            played_at,
            recorded_by: self
                .snapshot
                .players
                .first()
                .map(|p| p.id)
                .unwrap_or_default(),
            participants,
        }
    }

    pub fn record(&mut self, game: Game) -> &mut Self {
        self.snapshot.games.push(game);
        self
    }

    pub fn formula(&mut self, name: &str, config: FormulaConfig) -> FormulaId {
        self.push_formula(name, config, false)
    }

    pub fn active_formula(&mut self, name: &str, config: FormulaConfig) -> FormulaId {
        self.push_formula(name, config, true)
    }

    fn push_formula(&mut self, name: &str, config: FormulaConfig, is_active: bool) -> FormulaId {
        let id = FormulaId::new();
        self.snapshot.formulas.push(Formula {
            id,
            tournament_id: self.tournament_id(),
            name: name.to_string(),
            is_active,
            config,
        });
        id
    }

    pub fn membership(&self, player: PlayerId) -> TournamentMembership {
        self.snapshot
            .membership(player)
            .cloned()
            .expect("player should be a member")
    }

    pub fn build(&self) -> TournamentSnapshot {
        self.snapshot.clone()
    }
}

pub fn participant(entity: EntityRef, outcome: Outcome, result_value: i64) -> GameParticipant {
    GameParticipant {
        entity,
        outcome,
        result_value,
        placement: None,
    }
}

/// Players A, B and C with (A beats B 10-5), (B beats C 7-3), (A draws C 4-4)
pub fn three_player_round_robin() -> (TournamentBuilder, [PlayerId; 3]) {
    let mut builder = TournamentBuilder::new("Spring Open");
    let a = builder.player("A");
    let b = builder.player("B");
    let c = builder.player("C");
    builder.duel(a, b, 10, 5).duel(b, c, 7, 3).duel(a, c, 4, 4);
    (builder, [a, b, c])
}
