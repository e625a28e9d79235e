#![allow(dead_code)] // Test utilities may not all be used in every test

use std::sync::Arc;

use tourney_ranking::{
    EngineConfig, FormulaService, InMemoryTournamentStore, LeaderboardService, ResultsService,
    TournamentId, TournamentSnapshot,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub store: Arc<InMemoryTournamentStore>,
    pub leaderboards: LeaderboardService,
    pub formulas: FormulaService,
    pub results: ResultsService,
    pub tournament_id: TournamentId,
}

pub struct TestSetupBuilder {
    snapshot: TournamentSnapshot,
    config: EngineConfig,
}

impl TestSetupBuilder {
    pub fn new(snapshot: TournamentSnapshot) -> Self {
        Self {
            snapshot,
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub async fn build(self) -> TestSetup {
        let store = Arc::new(InMemoryTournamentStore::new());
        let tournament_id = self.snapshot.tournament_id();
        store.insert_snapshot(self.snapshot).await;

        TestSetup {
            leaderboards: LeaderboardService::new(store.clone(), self.config.clone()),
            formulas: FormulaService::new(store.clone(), self.config),
            results: ResultsService::new(store.clone()),
            store,
            tournament_id,
        }
    }
}
