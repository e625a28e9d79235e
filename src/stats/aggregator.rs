use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;

use tracing::debug;

use super::{
    collectors::{OutcomeCollector, PlacementCollector, ResultValueCollector},
    EntityStats, MalformedGameError, StatCollector,
};
use crate::formula::PlacementScoring;
use crate::tournament::{EntityRef, Game, TournamentSnapshot};

/// Cumulative statistics keyed by entity, iterated in entity order
pub type StatsTable = BTreeMap<EntityRef, EntityStats>;

/// Folds a tournament's games into per-entity statistics.
///
/// The fold only adds integers, so the result does not depend on game order.
pub struct ResultAggregator {
    collectors: Vec<Arc<dyn StatCollector>>,
}

impl ResultAggregator {
    /// Default collectors; placement points are only collected when a table is configured
    pub fn new(placement: Option<PlacementScoring>) -> Self {
        let mut collectors: Vec<Arc<dyn StatCollector>> = vec![
            Arc::new(OutcomeCollector::new()),
            Arc::new(ResultValueCollector::new()),
        ];
        if let Some(table) = placement {
            collectors.push(Arc::new(PlacementCollector::new(table)));
        }
        Self { collectors }
    }

    pub fn with_collector(mut self, collector: Arc<dyn StatCollector>) -> Self {
        self.collectors.push(collector);
        self
    }

    /// Aggregates every game of the snapshot's tournament.
    ///
    /// Fails on the first malformed game; no partial table is returned.
    pub fn aggregate(&self, snapshot: &TournamentSnapshot) -> Result<StatsTable, MalformedGameError> {
        let mut table = StatsTable::new();
        let mut games = 0usize;

        // Fixed fold order so range checks do not depend on storage order
        let mut ordered: Vec<_> = snapshot.tournament_games().collect();
        ordered.sort_by_key(|game| (game.played_at, game.id));

        for game in ordered {
            validate_game(snapshot, game)?;
            for collector in &self.collectors {
                for data in collector.collect(game) {
                    let entity = data.entity();
                    table.entry(entity).or_default().apply(&data).map_err(|_| {
                        MalformedGameError::ResultOverflow {
                            game_id: game.id,
                            entity,
                        }
                    })?;
                }
            }
            games += 1;
        }

        debug!(
            tournament_id = %snapshot.tournament_id(),
            games,
            entities = table.len(),
            "Aggregated tournament results"
        );
        Ok(table)
    }
}

/// Sums each team's members' individual statistics.
///
/// Uses the current team roster. Teams whose members have no games are left out.
pub fn roll_up_teams(
    snapshot: &TournamentSnapshot,
    individual: &StatsTable,
) -> Result<StatsTable, MalformedGameError> {
    let mut table = StatsTable::new();
    for team in snapshot.tournament_teams() {
        let members: BTreeSet<_> = team.members.iter().copied().collect();
        let mut total = EntityStats::default();
        for member in members {
            if let Some(stats) = individual.get(&EntityRef::Player(member)) {
                total
                    .merge(stats)
                    .map_err(|_| MalformedGameError::TeamTotalOverflow { team_id: team.id })?;
            }
        }
        if total.games_played > 0 {
            table.insert(EntityRef::Team(team.id), total);
        }
    }
    Ok(table)
}

fn validate_game(snapshot: &TournamentSnapshot, game: &Game) -> Result<(), MalformedGameError> {
    if game.participants.len() < 2 {
        return Err(MalformedGameError::TooFewParticipants {
            game_id: game.id,
            count: game.participants.len(),
        });
    }

    let mut seen = HashSet::new();
    for participant in &game.participants {
        let entity = participant.entity;
        if !seen.insert(entity) {
            return Err(MalformedGameError::DuplicateParticipant {
                game_id: game.id,
                entity,
            });
        }

        match entity {
            EntityRef::Player(player_id) => {
                if snapshot.player(player_id).is_none() {
                    return Err(MalformedGameError::UnknownEntity {
                        game_id: game.id,
                        entity,
                    });
                }
                if !snapshot.was_member_at(player_id, game.played_at) {
                    return Err(MalformedGameError::NotAMember {
                        game_id: game.id,
                        player_id,
                    });
                }
            }
            EntityRef::Team(team_id) => {
                if snapshot.team(team_id).is_none() {
                    return Err(MalformedGameError::UnknownEntity {
                        game_id: game.id,
                        entity,
                    });
                }
            }
        }

        if participant.placement == Some(0) {
            return Err(MalformedGameError::InvalidPlacement {
                game_id: game.id,
                entity,
            });
        }
    }

    Ok(())
}
