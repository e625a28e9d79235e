// Leaderboard computation engine for tournaments
// This file exposes the public API for host services and integration tests

pub mod config;
pub mod formula;
pub mod leaderboard;
pub mod permissions;
pub mod ranking;
pub mod shared;
pub mod stats;
pub mod telemetry;
pub mod tournament;

// Re-export commonly used types for easier access in tests
pub use config::{EngineConfig, WeightDefaults};
pub use formula::{
    validate_formula, DegenerateReason, Formula, FormulaConfig, FormulaError, FormulaService,
    PrimaryStatistic, RankingScope, TeamAggregation,
};
pub use leaderboard::{
    compute_leaderboard, Leaderboard, LeaderboardEntry, LeaderboardError, LeaderboardService,
};
pub use permissions::{PermissionError, ProtectedAction};
pub use shared::EngineError;
pub use stats::{EntityStats, MalformedGameError};
pub use tournament::{
    Capabilities, EntityRef, FormulaId, Game, GameId, GameParticipant, InMemoryTournamentStore,
    Outcome, Player, PlayerId, ResultsService, Team, TeamId, Tournament, TournamentId,
    TournamentMembership, TournamentSnapshot,
};
