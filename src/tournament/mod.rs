// Public API
pub use models::*;
pub use repository::{FormulaStore, GameLedger, InMemoryTournamentStore, SnapshotSource};
pub use service::ResultsService;
pub use snapshot::TournamentSnapshot;

// Internal modules
pub mod models;
pub mod repository;
pub mod service;
mod snapshot;

#[cfg(test)]
pub(crate) mod fixtures;
