use std::sync::Arc;
use tracing::{info, instrument};

use super::{validate_formula, Formula, FormulaConfig, FormulaError};
use crate::config::EngineConfig;
use crate::permissions::require_formula_manager;
use crate::shared::EngineError;
use crate::tournament::{FormulaId, FormulaStore, TournamentId, TournamentMembership};

/// Creates, edits and activates formulas on behalf of tournament members.
///
/// Every mutation passes the permission gate and validation before it reaches
/// the store, so a rejected change leaves stored formulas untouched.
pub struct FormulaService {
    store: Arc<dyn FormulaStore>,
    config: EngineConfig,
}

impl FormulaService {
    pub fn new(store: Arc<dyn FormulaStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    #[instrument(skip(self, actor, config), fields(player_id = %actor.player_id))]
    pub async fn create_formula(
        &self,
        actor: &TournamentMembership,
        tournament_id: TournamentId,
        name: &str,
        config: FormulaConfig,
    ) -> Result<Formula, EngineError> {
        require_formula_manager(actor, tournament_id)?;
        validate_formula(&config, &self.config.weight_defaults)?;

        let formula = Formula {
            id: FormulaId::new(),
            tournament_id,
            name: name.to_string(),
            is_active: false,
            config,
        };
        self.store.save_formula(formula.clone()).await?;
        info!(formula_id = %formula.id, "Formula created");
        Ok(formula)
    }

    /// Replaces a formula's configuration, keeping its active flag
    #[instrument(skip(self, actor, config), fields(player_id = %actor.player_id))]
    pub async fn update_formula(
        &self,
        actor: &TournamentMembership,
        tournament_id: TournamentId,
        formula_id: FormulaId,
        config: FormulaConfig,
    ) -> Result<Formula, EngineError> {
        require_formula_manager(actor, tournament_id)?;
        validate_formula(&config, &self.config.weight_defaults)?;

        let mut formula = self.find(tournament_id, formula_id).await?;
        formula.config = config;
        self.store.save_formula(formula.clone()).await?;
        info!("Formula updated");
        Ok(formula)
    }

    /// Makes a stored formula the tournament's only active one.
    ///
    /// The formula is validated again first; on failure the previous active
    /// formula stays active.
    #[instrument(skip(self, actor), fields(player_id = %actor.player_id))]
    pub async fn activate_formula(
        &self,
        actor: &TournamentMembership,
        tournament_id: TournamentId,
        formula_id: FormulaId,
    ) -> Result<Formula, EngineError> {
        require_formula_manager(actor, tournament_id)?;

        let mut formula = self.find(tournament_id, formula_id).await?;
        validate_formula(&formula.config, &self.config.weight_defaults)?;
        self.store
            .set_active_formula(tournament_id, formula_id)
            .await?;
        formula.is_active = true;
        info!("Formula activated");
        Ok(formula)
    }

    async fn find(
        &self,
        tournament_id: TournamentId,
        formula_id: FormulaId,
    ) -> Result<Formula, EngineError> {
        self.store
            .formulas(tournament_id)
            .await?
            .into_iter()
            .find(|f| f.id == formula_id)
            .ok_or_else(|| {
                FormulaError::FormulaNotFound {
                    formula_id,
                    tournament_id,
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeightDefaults;
    use crate::formula::DegenerateReason;
    use crate::leaderboard::compute_leaderboard;
    use crate::permissions::PermissionError;
    use crate::tournament::fixtures::SnapshotBuilder;
    use crate::tournament::{
        Capabilities, InMemoryTournamentStore, PlayerId, SnapshotSource, TournamentSnapshot,
    };
    use chrono::Utc;

    async fn setup() -> (FormulaService, Arc<InMemoryTournamentStore>, TournamentSnapshot) {
        let mut builder = SnapshotBuilder::new();
        builder.active_formula(FormulaConfig::outcome_points(3.0, 1.0, 0.0));
        let snapshot = builder.build();
        let store = Arc::new(InMemoryTournamentStore::new());
        store.insert_snapshot(snapshot.clone()).await;
        let service = FormulaService::new(store.clone(), EngineConfig::default());
        (service, store, snapshot)
    }

    fn manager(snapshot: &TournamentSnapshot) -> TournamentMembership {
        TournamentMembership {
            tournament_id: snapshot.tournament_id(),
            player_id: PlayerId::new(),
            capabilities: Capabilities {
                can_manage_formulas: true,
                ..Capabilities::default()
            },
            joined_at: Utc::now(),
            left_at: None,
        }
    }

    #[tokio::test]
    async fn creates_inactive_formula() {
        let (service, store, snapshot) = setup().await;
        let tid = snapshot.tournament_id();

        let created = service
            .create_formula(
                &manager(&snapshot),
                tid,
                "Goal difference",
                FormulaConfig::outcome_points(2.0, 1.0, 0.0).with_result_weight(0.1),
            )
            .await
            .unwrap();

        assert!(!created.is_active);
        let stored = store.formulas(tid).await.unwrap();
        assert_eq!(stored.len(), 2);
        assert!(stored.contains(&created));
    }

    #[tokio::test]
    async fn member_without_capability_cannot_create() {
        let (service, store, snapshot) = setup().await;
        let mut actor = manager(&snapshot);
        actor.capabilities = Capabilities {
            can_record_results: true,
            ..Capabilities::default()
        };

        let result = service
            .create_formula(
                &actor,
                snapshot.tournament_id(),
                "Sneaky",
                FormulaConfig::outcome_points(3.0, 0.0, 0.0),
            )
            .await;

        assert!(matches!(
            result,
            Err(EngineError::Permission(PermissionError::Denied { .. }))
        ));
        assert_eq!(
            store.formulas(snapshot.tournament_id()).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn degenerate_update_leaves_formula_unchanged() {
        let (service, store, snapshot) = setup().await;
        let tid = snapshot.tournament_id();
        let active = snapshot.formulas[0].clone();

        let result = service
            .update_formula(
                &manager(&snapshot),
                tid,
                active.id,
                FormulaConfig::outcome_points(0.0, 0.0, 0.0),
            )
            .await;

        assert_eq!(
            result,
            Err(EngineError::Formula(FormulaError::Degenerate(
                DegenerateReason::AllWeightsZero
            )))
        );
        assert_eq!(store.formulas(tid).await.unwrap(), vec![active]);
    }

    #[tokio::test]
    async fn updated_active_formula_stays_active_and_ranks() {
        let mut builder = SnapshotBuilder::new();
        let a = builder.player("A");
        let b = builder.player("B");
        builder
            .duel(a, b, 2, 1)
            .duel(a, b, 0, 0)
            .active_formula(FormulaConfig::outcome_points(3.0, 1.0, 0.0));
        let snapshot = builder.build();
        let tid = snapshot.tournament_id();
        let active_id = snapshot.formulas[0].id;
        let store = Arc::new(InMemoryTournamentStore::new());
        store.insert_snapshot(snapshot.clone()).await;
        let service = FormulaService::new(store.clone(), EngineConfig::default());

        let updated = service
            .update_formula(
                &manager(&snapshot),
                tid,
                active_id,
                FormulaConfig::outcome_points(1.0, 0.0, 0.0).with_result_weight(0.5),
            )
            .await
            .unwrap();

        assert!(updated.is_active);
        let active: Vec<FormulaId> = store
            .formulas(tid)
            .await
            .unwrap()
            .into_iter()
            .filter(|f| f.is_active)
            .map(|f| f.id)
            .collect();
        assert_eq!(active, vec![active_id]);

        let stored = store.load_snapshot(tid).await.unwrap().unwrap();
        let board = compute_leaderboard(&stored, None, &WeightDefaults::default()).unwrap();
        assert_eq!(board.formula_id, active_id);
        let scores: Vec<f64> = board.individual.iter().map(|e| e.score).collect();
        // 1 per win plus half the result sum, instead of the old 3-1-0 points
        assert_eq!(scores, vec![2.0, 0.5]);
    }

    #[tokio::test]
    async fn activation_switches_active_formula() {
        let (service, store, snapshot) = setup().await;
        let tid = snapshot.tournament_id();
        let actor = manager(&snapshot);
        let created = service
            .create_formula(&actor, tid, "Wins only", FormulaConfig::outcome_points(1.0, 0.0, 0.0))
            .await
            .unwrap();

        let activated = service.activate_formula(&actor, tid, created.id).await.unwrap();

        assert!(activated.is_active);
        let active: Vec<FormulaId> = store
            .formulas(tid)
            .await
            .unwrap()
            .into_iter()
            .filter(|f| f.is_active)
            .map(|f| f.id)
            .collect();
        assert_eq!(active, vec![created.id]);
    }

    #[tokio::test]
    async fn activating_unknown_formula_is_not_found() {
        let (service, _store, snapshot) = setup().await;
        let missing = FormulaId::new();

        let result = service
            .activate_formula(&manager(&snapshot), snapshot.tournament_id(), missing)
            .await;
        assert!(matches!(
            result,
            Err(EngineError::Formula(FormulaError::FormulaNotFound { formula_id, .. })) if formula_id == missing
        ));
    }
}
