use tracing::debug;

use super::errors::LeaderboardError;
use super::models::{Leaderboard, LeaderboardEntry};
use crate::config::WeightDefaults;
use crate::formula::{validate_formula, Formula, FormulaError, FormulaEvaluator, TeamAggregation};
use crate::ranking::{assign_ranks, ScoredEntity};
use crate::stats::{roll_up_teams, ResultAggregator, StatsTable};
use crate::tournament::{EntityRef, FormulaId, TournamentSnapshot};

/// Picks the formula to rank with: the explicit one if given, otherwise the single
/// active formula of the tournament.
pub fn select_formula(
    snapshot: &TournamentSnapshot,
    formula_id: Option<FormulaId>,
) -> Result<&Formula, FormulaError> {
    let tournament_id = snapshot.tournament_id();
    let mut formulas = snapshot
        .formulas
        .iter()
        .filter(|f| f.tournament_id == tournament_id);

    if let Some(formula_id) = formula_id {
        return formulas
            .find(|f| f.id == formula_id)
            .ok_or(FormulaError::FormulaNotFound {
                formula_id,
                tournament_id,
            });
    }

    let active: Vec<&Formula> = formulas.filter(|f| f.is_active).collect();
    match active.as_slice() {
        [] => Err(FormulaError::NoActiveFormula { tournament_id }),
        [formula] => Ok(*formula),
        many => Err(FormulaError::MultipleActiveFormulas {
            tournament_id,
            count: many.len(),
        }),
    }
}

/// Aggregates, scores and ranks a snapshot.
///
/// Pure and idempotent: identical snapshots give identical leaderboards.
/// Entities without games never appear.
pub fn compute_leaderboard(
    snapshot: &TournamentSnapshot,
    formula_id: Option<FormulaId>,
    defaults: &WeightDefaults,
) -> Result<Leaderboard, LeaderboardError> {
    let formula = select_formula(snapshot, formula_id)?;
    let weights = validate_formula(&formula.config, defaults)?;
    let table = ResultAggregator::new(formula.config.placement.clone()).aggregate(snapshot)?;
    let evaluator = FormulaEvaluator::new(weights);
    let scope = formula.config.scope;

    let players: StatsTable = table
        .iter()
        .filter(|(entity, _)| matches!(entity, EntityRef::Player(_)))
        .map(|(entity, stats)| (*entity, *stats))
        .collect();

    let individual = if scope.includes_individuals() {
        rank_view(snapshot, &evaluator, &players)
    } else {
        Vec::new()
    };

    let team = match scope.team_aggregation() {
        Some(TeamAggregation::Direct) => {
            let teams: StatsTable = table
                .iter()
                .filter(|(entity, _)| matches!(entity, EntityRef::Team(_)))
                .map(|(entity, stats)| (*entity, *stats))
                .collect();
            rank_view(snapshot, &evaluator, &teams)
        }
        Some(TeamAggregation::MemberRollup) => {
            rank_view(snapshot, &evaluator, &roll_up_teams(snapshot, &players)?)
        }
        None => Vec::new(),
    };

    debug!(
        tournament_id = %snapshot.tournament_id(),
        formula_id = %formula.id,
        individual = individual.len(),
        team = team.len(),
        "Computed leaderboard"
    );

    Ok(Leaderboard {
        tournament_id: snapshot.tournament_id(),
        formula_id: formula.id,
        individual,
        team,
    })
}

fn rank_view(
    snapshot: &TournamentSnapshot,
    evaluator: &FormulaEvaluator,
    table: &StatsTable,
) -> Vec<LeaderboardEntry> {
    let scored = table
        .iter()
        .filter(|(_, stats)| stats.games_played > 0)
        .map(|(entity, stats)| ScoredEntity {
            entity: *entity,
            display_name: snapshot
                .display_name(*entity)
                .unwrap_or_default()
                .to_string(),
            score: evaluator.score(stats),
            stats: *stats,
        })
        .collect();

    assign_ranks(scored)
        .into_iter()
        .map(LeaderboardEntry::from)
        .collect()
}
