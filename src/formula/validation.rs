use tracing::debug;

use super::errors::{DegenerateReason, FormulaError};
use super::models::{FormulaConfig, PrimaryStatistic, ScoringWeights};
use crate::config::WeightDefaults;

/// Validates a formula configuration and resolves its weights.
///
/// Rules are checked in order: finite weights, non-empty placement table,
/// the primary statistic's weight present, at least one non-zero weight.
pub fn validate_formula(
    config: &FormulaConfig,
    defaults: &WeightDefaults,
) -> Result<ScoringWeights, FormulaError> {
    check_finite(config)?;
    check_placement_table(config)?;
    check_primary_weight(config)?;

    let weights = resolve_weights(config, defaults);
    if !has_effect(config, &weights) {
        return Err(DegenerateReason::AllWeightsZero.into());
    }

    debug!(primary = %config.primary, ?weights, "Formula validated");
    Ok(weights)
}

fn check_finite(config: &FormulaConfig) -> Result<(), DegenerateReason> {
    let explicit = [
        ("win", config.win_weight),
        ("draw", config.draw_weight),
        ("loss", config.loss_weight),
        ("result", config.result_weight),
        ("placement", config.placement.as_ref().map(|p| p.weight)),
    ];

    match explicit
        .iter()
        .find(|(_, weight)| weight.is_some_and(|w| !w.is_finite()))
    {
        Some((name, _)) => Err(DegenerateReason::NonFiniteWeight(*name)),
        None => Ok(()),
    }
}

fn check_placement_table(config: &FormulaConfig) -> Result<(), DegenerateReason> {
    match &config.placement {
        Some(placement) if placement.points.is_empty() => {
            Err(DegenerateReason::EmptyPlacementTable)
        }
        _ => Ok(()),
    }
}

fn check_primary_weight(config: &FormulaConfig) -> Result<(), DegenerateReason> {
    let missing = match config.primary {
        PrimaryStatistic::Wins if config.win_weight.is_none() => Some("win"),
        PrimaryStatistic::Points if config.result_weight.is_none() => Some("result"),
        PrimaryStatistic::Games
            if config.win_weight.is_none()
                && config.draw_weight.is_none()
                && config.loss_weight.is_none() =>
        {
            Some("win/draw/loss")
        }
        _ => None,
    };

    match missing {
        Some(weight) => Err(DegenerateReason::MissingWeight {
            primary: config.primary,
            weight,
        }),
        None => Ok(()),
    }
}

fn resolve_weights(config: &FormulaConfig, defaults: &WeightDefaults) -> ScoringWeights {
    ScoringWeights {
        win: config.win_weight.unwrap_or(defaults.win),
        draw: config.draw_weight.unwrap_or(defaults.draw),
        loss: config.loss_weight.unwrap_or(defaults.loss),
        result: config.result_weight.unwrap_or(defaults.result),
        placement: config.placement.as_ref().map_or(0.0, |p| p.weight),
    }
}

fn has_effect(config: &FormulaConfig, weights: &ScoringWeights) -> bool {
    let placement_counts = config
        .placement
        .as_ref()
        .is_some_and(|p| p.weight != 0.0 && p.points.iter().any(|&pts| pts != 0));

    weights.win != 0.0
        || weights.draw != 0.0
        || weights.loss != 0.0
        || weights.result != 0.0
        || placement_counts
}
