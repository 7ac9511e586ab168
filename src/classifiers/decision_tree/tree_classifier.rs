use crate::classifiers::decision_tree::nodes::Root;
use crate::classifiers::decision_tree::pruners::Pruner;
use crate::classifiers::decision_tree::split_criteria::{InfoGainSplitCriterion, SplitCriterion};
use crate::classifiers::decision_tree::splitters::{MidpointSplitter, Splitter};
use crate::classifiers::decision_tree::terminators::{
    EmptyTerminator, MaxDepthTerminator, MinEntropyTerminator, MinExamplesTerminator,
    SingleLabelTerminator, Terminator,
};
use crate::classifiers::decision_tree::{
    LeafCreator, ProjectionFactory, SplitPreProcessor, TrainedLeafCreator, TreeBuilder,
};
use crate::classifiers::{Classifier, ClassifierError, ClassifierFactory};
use crate::core::instances::{Instance, Instances};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Batch decision-tree learner whose leaves hold trained models of type `M`.
///
/// Every call to `train` induces a new tree from scratch. The stopping
/// options translate into terminators: the empty-set and single-label rules
/// always apply, depth / example / entropy limits only when set.
pub struct TreeClassifier<M> {
    builder: TreeBuilder<M>,
    max_depth: Option<usize>,
    min_examples: usize,
    min_entropy: f64,
    pre_pruning_attempts: usize,
    projection_ratio: f64,
    additional_terminators: Vec<Arc<dyn Terminator>>,
    root: Option<Root<M>>,
}

impl<M: 'static> TreeClassifier<M> {
    /// Information gain, midpoint thresholds, and leaves trained from `factory`.
    pub fn new<F>(factory: F) -> Self
    where
        F: ClassifierFactory<Model = M> + 'static,
    {
        Self::with_builder(TreeBuilder::new(
            Box::new(InfoGainSplitCriterion::new()),
            Box::new(MidpointSplitter::new()),
            Box::new(TrainedLeafCreator::new(factory)),
        ))
    }
}

impl<M> TreeClassifier<M> {
    pub fn with_builder(builder: TreeBuilder<M>) -> Self {
        Self {
            builder,
            max_depth: None,
            min_examples: 0,
            min_entropy: 0.0,
            pre_pruning_attempts: 0,
            projection_ratio: 1.0,
            additional_terminators: Vec::new(),
            root: None,
        }
    }

    pub fn with_criterion(mut self, criterion: Box<dyn SplitCriterion>) -> Self {
        self.builder = self.builder.with_criterion(criterion);
        self
    }

    pub fn with_splitter(mut self, splitter: Box<dyn Splitter>) -> Self {
        self.builder = self.builder.with_splitter(splitter);
        self
    }

    pub fn with_leaf_creator(mut self, leaf_creator: Box<dyn LeafCreator<M>>) -> Self {
        self.builder = self.builder.with_leaf_creator(leaf_creator);
        self
    }

    pub fn with_pruner(mut self, pruner: Box<dyn Pruner<M>>) -> Self {
        self.builder = self.builder.with_pruner(pruner);
        self
    }

    pub fn with_projection(mut self, projection: Box<dyn ProjectionFactory>) -> Self {
        self.builder = self.builder.with_projection(projection);
        self
    }

    pub fn with_pre_processor(mut self, pre_processor: Box<dyn SplitPreProcessor>) -> Self {
        self.builder = self.builder.with_pre_processor(pre_processor);
        self
    }

    pub fn set_max_depth(&mut self, max_depth: Option<usize>) {
        self.max_depth = max_depth;
    }

    pub fn get_max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn set_min_examples(&mut self, min_examples: usize) {
        self.min_examples = min_examples;
    }

    pub fn get_min_examples(&self) -> usize {
        self.min_examples
    }

    pub fn set_min_entropy(&mut self, min_entropy: f64) -> Result<(), ClassifierError> {
        if !(min_entropy >= 0.0) {
            return Err(ClassifierError::InvalidParameter(format!(
                "min_entropy must be non-negative, got {min_entropy}"
            )));
        }
        self.min_entropy = min_entropy;
        Ok(())
    }

    pub fn get_min_entropy(&self) -> f64 {
        self.min_entropy
    }

    pub fn set_pre_pruning_attempts(&mut self, attempts: usize) {
        self.pre_pruning_attempts = attempts;
    }

    pub fn get_pre_pruning_attempts(&self) -> usize {
        self.pre_pruning_attempts
    }

    pub fn set_projection_ratio(&mut self, ratio: f64) -> Result<(), ClassifierError> {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(ClassifierError::InvalidParameter(format!(
                "projection_ratio must be in (0, 1], got {ratio}"
            )));
        }
        self.projection_ratio = ratio;
        Ok(())
    }

    pub fn get_projection_ratio(&self) -> f64 {
        self.projection_ratio
    }

    pub fn add_terminator(&mut self, terminator: Arc<dyn Terminator>) {
        self.additional_terminators.push(terminator);
    }

    /// Stopping rules in evaluation order.
    pub fn terminators(&self) -> Vec<Arc<dyn Terminator>> {
        let mut terminators: Vec<Arc<dyn Terminator>> =
            vec![Arc::new(EmptyTerminator), Arc::new(SingleLabelTerminator)];
        if let Some(max_depth) = self.max_depth {
            terminators.push(Arc::new(MaxDepthTerminator::new(max_depth)));
        }
        if self.min_examples > 0 {
            terminators.push(Arc::new(MinExamplesTerminator::new(self.min_examples)));
        }
        if self.min_entropy > 0.0 {
            terminators.push(Arc::new(MinEntropyTerminator::new(self.min_entropy)));
        }
        terminators.extend(self.additional_terminators.iter().cloned());
        terminators
    }

    pub fn root(&self) -> Option<&Root<M>> {
        self.root.as_ref()
    }

    fn trained_root(&self) -> Result<&Root<M>, ClassifierError> {
        self.root.as_ref().ok_or(ClassifierError::NotTrained)
    }

    /// Stable id of the leaf `instance` falls into.
    pub fn leaf_id(&self, instance: &dyn Instance) -> Result<usize, ClassifierError> {
        self.trained_root()?.id_for_instance(instance)
    }

    pub fn leaf_count(&self) -> usize {
        self.root.as_ref().map_or(0, Root::leaf_count)
    }
}

impl<M: Serialize> TreeClassifier<M> {
    pub fn to_json(&self) -> Result<String, ClassifierError> {
        self.trained_root()?.to_json()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ClassifierError> {
        self.trained_root()?.save(path)
    }
}

impl<M: DeserializeOwned> TreeClassifier<M> {
    /// Replaces the current tree with one read from JSON.
    pub fn load_json(&mut self, json: &str) -> Result<(), ClassifierError> {
        self.root = Some(Root::from_json(json)?);
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ClassifierError> {
        self.root = Some(Root::load(path)?);
        Ok(())
    }
}

impl<M: Classifier> Classifier for TreeClassifier<M> {
    fn train(&mut self, instances: &Instances) -> Result<(), ClassifierError> {
        instances.ensure_labeled()?;
        self.root = None;

        self.builder.set_terminators(self.terminators());
        self.builder.set_projection_ratio(self.projection_ratio);
        self.builder.set_pre_pruning_attempts(self.pre_pruning_attempts);

        let root = self.builder.build(instances)?;
        debug!(
            instances = instances.len(),
            leaves = root.leaf_count(),
            depth = root.depth(),
            "trained tree classifier"
        );
        self.root = Some(root);
        Ok(())
    }

    fn predict(&self, instance: &dyn Instance) -> Result<f64, ClassifierError> {
        self.trained_root()?.predict(instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::decision_tree::{BootstrapPreProcessor, RandomSubspaceProjectionFactory};
    use crate::classifiers::{LeafModel, LeafModelFactory, MajorityClass};
    use crate::core::instances::DenseInstance;
    use crate::testing::dummies::threshold_dataset;

    fn separable() -> Instances {
        Instances::from_instances(
            2,
            [
                ([0.0, 0.0], 0.0),
                ([0.0, 1.0], 0.0),
                ([1.0, 0.0], 1.0),
                ([1.0, 1.0], 1.0),
            ]
            .map(|(x, y)| DenseInstance::labeled(x.to_vec(), y)),
        )
        .unwrap()
    }

    #[test]
    fn default_terminators_are_empty_and_single_label() {
        let classifier = TreeClassifier::new(MajorityClass::new);
        let names: Vec<_> = classifier.terminators().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["empty", "single-label"]);
    }

    #[test]
    fn configured_limits_add_terminators() {
        let mut classifier = TreeClassifier::new(MajorityClass::new);
        classifier.set_max_depth(Some(3));
        classifier.set_min_examples(5);
        classifier.set_min_entropy(0.1).unwrap();
        assert_eq!(classifier.terminators().len(), 5);
    }

    #[test]
    fn rejects_invalid_options() {
        let mut classifier = TreeClassifier::new(MajorityClass::new);
        assert!(classifier.set_min_entropy(-1.0).is_err());
        assert!(classifier.set_min_entropy(f64::NAN).is_err());
        assert!(classifier.set_projection_ratio(0.0).is_err());
        assert!(classifier.set_projection_ratio(1.5).is_err());
        assert_eq!(classifier.get_projection_ratio(), 1.0);
    }

    #[test]
    fn predict_before_train_fails() {
        let classifier = TreeClassifier::new(MajorityClass::new);
        let err = classifier.predict(&DenseInstance::unlabeled(vec![0.0, 0.0]));
        assert!(matches!(err, Err(ClassifierError::NotTrained)));
    }

    #[test]
    fn train_rejects_unlabeled_instances() {
        let mut instances = Instances::new(1);
        instances.push(DenseInstance::unlabeled(vec![0.0])).unwrap();
        let mut classifier = TreeClassifier::new(MajorityClass::new);
        assert!(matches!(
            classifier.train(&instances),
            Err(ClassifierError::MissingLabel)
        ));
    }

    #[test]
    fn learns_separable_data() {
        let mut classifier = TreeClassifier::new(LeafModelFactory::MajorityClass);
        let instances = separable();
        classifier.train(&instances).unwrap();
        assert_eq!(classifier.leaf_count(), 2);
        for instance in instances.iter() {
            assert_eq!(classifier.predict(instance).unwrap(), instance.label().unwrap());
        }
        let low = classifier.leaf_id(&DenseInstance::unlabeled(vec![0.2, 9.0])).unwrap();
        let high = classifier.leaf_id(&DenseInstance::unlabeled(vec![0.8, 9.0])).unwrap();
        assert_eq!((low, high), (0, 1));
    }

    #[test]
    fn max_depth_zero_trains_single_leaf() {
        let mut classifier = TreeClassifier::new(MajorityClass::new);
        classifier.set_max_depth(Some(0));
        classifier.train(&separable()).unwrap();
        let root = classifier.root().unwrap();
        assert!(root.is_leaf());
        assert_eq!(
            classifier.predict(&DenseInstance::unlabeled(vec![1.0, 1.0])).unwrap(),
            0.5
        );
    }

    #[test]
    fn pure_naive_bayes_leaves_reload() {
        let mut classifier = TreeClassifier::new(LeafModelFactory::NaiveBayes);
        classifier.train(&separable()).unwrap();
        let root = classifier.root().unwrap();
        assert!(root.leaf_ids().iter().all(|(id, _)| {
            root.node(*id)
                .and_then(|node| node.as_leaf())
                .is_some_and(|leaf| leaf.counts().is_pure())
        }));

        let mut restored: TreeClassifier<LeafModel> =
            TreeClassifier::new(LeafModelFactory::NaiveBayes);
        restored.load_json(&classifier.to_json().unwrap()).unwrap();
        assert_eq!(restored.root(), classifier.root());
    }

    #[test]
    fn retraining_with_seeds_rebuilds_the_same_tree() {
        let instances = threshold_dataset(90, 0.35);
        let mut classifier = TreeClassifier::new(LeafModelFactory::MajorityClass)
            .with_projection(Box::new(RandomSubspaceProjectionFactory::new(17)))
            .with_pre_processor(Box::new(BootstrapPreProcessor::new(8)));
        classifier.set_projection_ratio(0.5).unwrap();
        classifier.set_pre_pruning_attempts(3);

        classifier.train(&instances).unwrap();
        let first = classifier.root().cloned();
        classifier.train(&instances).unwrap();
        assert_eq!(classifier.root().cloned(), first);
    }

    #[test]
    fn json_round_trip_keeps_predictions() {
        let mut classifier = TreeClassifier::new(LeafModelFactory::NaiveBayes);
        classifier.train(&separable()).unwrap();
        let json = classifier.to_json().unwrap();

        let mut restored: TreeClassifier<LeafModel> =
            TreeClassifier::new(LeafModelFactory::NaiveBayes);
        restored.load_json(&json).unwrap();
        let probe = DenseInstance::unlabeled(vec![0.3, 0.7]);
        assert_eq!(
            restored.predict(&probe).unwrap(),
            classifier.predict(&probe).unwrap()
        );
    }
}
