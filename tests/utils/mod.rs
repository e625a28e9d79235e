pub mod builders;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use builders::{participant, season_start, three_player_round_robin, TournamentBuilder};
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder};
