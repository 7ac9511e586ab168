mod error;
mod learners;
mod tree_classifier;

pub use error::BuildError;
pub use learners::build_learner;
