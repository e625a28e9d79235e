use std::cmp::Ordering;

use serde::Serialize;

use crate::stats::EntityStats;
use crate::tournament::EntityRef;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredEntity {
    pub entity: EntityRef,
    pub display_name: String,
    pub score: f64,
    pub stats: EntityStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntity {
    pub rank: u32,
    pub scored: ScoredEntity,
}

/// Score descending, then more wins, higher result sum, fewer games played,
/// and finally display name ascending ignoring case.
fn ranking_keys(a: &ScoredEntity, b: &ScoredEntity) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.stats.wins.cmp(&a.stats.wins))
        .then_with(|| b.stats.result_sum.cmp(&a.stats.result_sum))
        .then_with(|| a.stats.games_played.cmp(&b.stats.games_played))
        .then_with(|| {
            a.display_name
                .to_lowercase()
                .cmp(&b.display_name.to_lowercase())
        })
}

/// True when two entities are equal on every ranking key, name included
pub fn is_full_tie(a: &ScoredEntity, b: &ScoredEntity) -> bool {
    ranking_keys(a, b) == Ordering::Equal
}

/// Strict total order over scored entities.
///
/// Fully tied entities are placed by entity id so that output order is stable;
/// they still share a rank.
pub fn compare(a: &ScoredEntity, b: &ScoredEntity) -> Ordering {
    ranking_keys(a, b).then_with(|| a.entity.cmp(&b.entity))
}

/// Sorts and assigns standard competition ranks (1, 2, 2, 4).
pub fn assign_ranks(mut entities: Vec<ScoredEntity>) -> Vec<RankedEntity> {
    entities.sort_by(compare);

    let mut ranked: Vec<RankedEntity> = Vec::with_capacity(entities.len());
    for (position, scored) in entities.into_iter().enumerate() {
        let rank = match ranked.last() {
            Some(previous) if is_full_tie(&previous.scored, &scored) => previous.rank,
            _ => position as u32 + 1,
        };
        ranked.push(RankedEntity { rank, scored });
    }
    ranked
}
