use crate::classifiers::decision_tree::nodes::{LeafNode, Node};
use crate::classifiers::{Classifier, ClassifierError, ClassifierFactory};
use crate::core::instances::Instances;

/// Turns a frontier node into a leaf built from the instances that reached it.
pub trait LeafCreator<M> {
    fn change_tree_to_leaf(&self, instances: &Instances) -> Result<Node<M>, ClassifierError>;
}

/// Trains a fresh factory model on exactly the node's instances.
///
/// Training errors of the embedded model are returned unchanged.
#[derive(Debug, Clone)]
pub struct TrainedLeafCreator<F> {
    factory: F,
}

impl<F> TrainedLeafCreator<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F: ClassifierFactory> LeafCreator<F::Model> for TrainedLeafCreator<F> {
    fn change_tree_to_leaf(&self, instances: &Instances) -> Result<Node<F::Model>, ClassifierError> {
        let mut model = self.factory.new_classifier();
        model.train(instances)?;
        Ok(Node::Leaf(LeafNode::new(model, instances.label_counts())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::{LeafModelFactory, MajorityClass};
    use crate::core::instances::{DenseInstance, Instance};

    #[derive(Debug)]
    struct FailingModel;

    impl Classifier for FailingModel {
        fn train(&mut self, _instances: &Instances) -> Result<(), ClassifierError> {
            Err(ClassifierError::InvalidParameter("boom".into()))
        }

        fn predict(&self, _instance: &dyn Instance) -> Result<f64, ClassifierError> {
            Ok(0.0)
        }
    }

    #[test]
    fn trains_model_on_node_instances() {
        let creator = TrainedLeafCreator::new(MajorityClass::new);
        let instances = Instances::from_instances(
            1,
            [1.0, 1.0, 0.0].map(|y| DenseInstance::labeled(vec![0.0], y)),
        )
        .unwrap();
        let Node::Leaf(leaf) = creator.change_tree_to_leaf(&instances).unwrap() else {
            panic!("expected a leaf");
        };
        assert_eq!(leaf.model().count(), 3);
        assert_eq!(leaf.counts().positive, 2.0);
    }

    #[test]
    fn works_with_leaf_model_factory() {
        let creator = TrainedLeafCreator::new(LeafModelFactory::NaiveBayes);
        let node = creator.change_tree_to_leaf(&Instances::new(2)).unwrap();
        assert!(node.is_leaf());
    }

    #[test]
    fn model_training_failure_propagates() {
        let creator = TrainedLeafCreator::new(|| FailingModel);
        let err = creator.change_tree_to_leaf(&Instances::new(1)).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidParameter(msg) if msg == "boom"));
    }
}
