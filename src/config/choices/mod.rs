mod learner_choice;
mod schema;
mod tree_classifier_choice;

pub use learner_choice::*;
pub use schema::*;
pub use tree_classifier_choice::*;
