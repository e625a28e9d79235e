pub use outcome::OutcomeScoreCalculator;
pub use placement::PlacementScoreCalculator;
pub use result_value::ResultScoreCalculator;

mod outcome;
mod placement;
mod result_value;
