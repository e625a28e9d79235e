pub use outcome::OutcomeCollector;
pub use placement::PlacementCollector;
pub use result_value::ResultValueCollector;

mod outcome;
mod placement;
mod result_value;
