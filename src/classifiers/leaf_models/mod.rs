mod leaf_model;
mod majority_class;
mod naive_bayes;

pub use leaf_model::{LeafModel, LeafModelFactory};
pub use majority_class::MajorityClass;
pub use naive_bayes::NaiveBayes;
