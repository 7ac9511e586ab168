pub mod build;
pub mod choices;

pub use build::{BuildError, build_learner};
pub use choices::{LearnerChoice, LearnerKind, TreeClassifierParams};
