pub mod attribute_class_observers;
pub mod classifier;
pub mod decision_tree;
mod error;
pub mod leaf_models;

pub use classifier::{Classifier, ClassifierFactory};
pub use decision_tree::TreeClassifier;
pub use error::ClassifierError;
pub use leaf_models::{LeafModel, LeafModelFactory, MajorityClass, NaiveBayes};
