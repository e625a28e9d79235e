use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::tournament::{FormulaId, TournamentId};

/// Which statistic set a formula claims to rank on.
/// Determines which weight must be supplied explicitly.
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
pub enum PrimaryStatistic {
    Games,
    Points,
    Wins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TeamAggregation {
    /// Team participants in team-vs-team games contribute to their team
    Direct,
    /// Each team sums the individual statistics of its current members
    MemberRollup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingScope {
    Individual,
    Teams(TeamAggregation),
    IndividualAndTeams(TeamAggregation),
}

impl RankingScope {
    pub fn includes_individuals(&self) -> bool {
        matches!(
            self,
            RankingScope::Individual | RankingScope::IndividualAndTeams(_)
        )
    }

    pub fn team_aggregation(&self) -> Option<TeamAggregation> {
        match self {
            RankingScope::Individual => None,
            RankingScope::Teams(mode) | RankingScope::IndividualAndTeams(mode) => Some(*mode),
        }
    }
}

/// Points per finishing position for multi-way games.
/// `points[0]` is awarded for first place; positions past the table earn nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementScoring {
    pub points: Vec<i64>,
    pub weight: f64,
}

impl PlacementScoring {
    pub fn points_for(&self, placement: u32) -> i64 {
        placement
            .checked_sub(1)
            .and_then(|idx| self.points.get(idx as usize))
            .copied()
            .unwrap_or_default()
    }
}

/// Declarative scoring configuration as supplied by an organizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaConfig {
    pub win_weight: Option<f64>,
    pub draw_weight: Option<f64>,
    pub loss_weight: Option<f64>,
    pub result_weight: Option<f64>,
    pub placement: Option<PlacementScoring>,
    pub primary: PrimaryStatistic,
    pub scope: RankingScope,
}

impl FormulaConfig {
    pub fn new(primary: PrimaryStatistic, scope: RankingScope) -> Self {
        Self {
            win_weight: None,
            draw_weight: None,
            loss_weight: None,
            result_weight: None,
            placement: None,
            primary,
            scope,
        }
    }

    /// Classic win/draw/loss points table ranking individuals
    pub fn outcome_points(win: f64, draw: f64, loss: f64) -> Self {
        Self::new(PrimaryStatistic::Games, RankingScope::Individual).with_outcome_weights(
            win, draw, loss,
        )
    }

    pub fn with_outcome_weights(mut self, win: f64, draw: f64, loss: f64) -> Self {
        self.win_weight = Some(win);
        self.draw_weight = Some(draw);
        self.loss_weight = Some(loss);
        self
    }

    pub fn with_result_weight(mut self, weight: f64) -> Self {
        self.result_weight = Some(weight);
        self
    }

    pub fn with_placement(mut self, points: Vec<i64>, weight: f64) -> Self {
        self.placement = Some(PlacementScoring { points, weight });
        self
    }

    pub fn with_scope(mut self, scope: RankingScope) -> Self {
        self.scope = scope;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formula {
    pub id: FormulaId,
    pub tournament_id: TournamentId,
    pub name: String,
    pub is_active: bool,
    pub config: FormulaConfig,
}

/// Weights after validation and default resolution
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoringWeights {
    pub win: f64,
    pub draw: f64,
    pub loss: f64,
    pub result: f64,
    pub placement: f64,
}
