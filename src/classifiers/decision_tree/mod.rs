mod attribute_value_distribution;
mod leaf_creator;
pub mod nodes;
mod pre_processor;
mod projection;
pub mod pruners;
mod split_condition;
pub mod split_criteria;
pub mod splitters;
pub mod terminators;
mod tree_builder;
mod tree_classifier;

pub use attribute_value_distribution::{AttributeValueDistribution, AttributeValueLabel};
pub use leaf_creator::{LeafCreator, TrainedLeafCreator};
pub use pre_processor::{BootstrapPreProcessor, SplitPreProcessor, SubsamplePreProcessor};
pub use projection::{
    FeatureSubset, IdentityProjectionFactory, Projection, ProjectionFactory,
    RandomSubspaceProjectionFactory, projected_dimension,
};
pub use split_condition::{Direction, SplitCondition};
pub use tree_builder::TreeBuilder;
pub use tree_classifier::TreeClassifier;
