mod benefit;
mod midpoint_splitter;
mod observed_value_splitter;
pub mod splitter;

pub use benefit::{Benefit, MIN_IMPROVEMENT};
pub use midpoint_splitter::MidpointSplitter;
pub use observed_value_splitter::ObservedValueSplitter;
pub use splitter::Splitter;
