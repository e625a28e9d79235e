pub use tiebreak::{assign_ranks, compare, is_full_tie, RankedEntity, ScoredEntity};

mod tiebreak;
