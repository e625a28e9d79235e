pub mod assembler;
pub mod service;

mod errors;
pub mod models;

pub use assembler::{compute_leaderboard, select_formula};
pub use errors::LeaderboardError;
pub use models::{Leaderboard, LeaderboardEntry};
pub use service::LeaderboardService;
