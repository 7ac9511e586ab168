use crate::classifiers::ClassifierError;
use crate::classifiers::decision_tree::nodes::{Edge, InternalNode, Node, NodeId, Root};
use crate::classifiers::decision_tree::pruners::Pruner;
use crate::classifiers::decision_tree::split_criteria::SplitCriterion;
use crate::classifiers::decision_tree::splitters::{Benefit, Splitter};
use crate::classifiers::decision_tree::terminators::{
    EmptyTerminator, SingleLabelTerminator, Terminator,
};
use crate::classifiers::decision_tree::{
    AttributeValueDistribution, IdentityProjectionFactory, LeafCreator, ProjectionFactory,
    SplitCondition, SplitPreProcessor,
};
use crate::core::instances::Instances;
use std::sync::Arc;
use tracing::{debug, trace};

/// Flat holder of one strategy per induction axis.
///
/// `build` grows a tree top-down: terminators are checked first, then the
/// best split over the projected candidate features is searched, retried on
/// resampled instances when it does not improve, and committed as a
/// `> threshold` / `<= threshold` pair of edges.
pub struct TreeBuilder<M> {
    terminators: Vec<Arc<dyn Terminator>>,
    criterion: Box<dyn SplitCriterion>,
    splitter: Box<dyn Splitter>,
    leaf_creator: Box<dyn LeafCreator<M>>,
    pruner: Option<Box<dyn Pruner<M>>>,
    projection: Box<dyn ProjectionFactory>,
    projection_ratio: f64,
    pre_processor: Option<Box<dyn SplitPreProcessor>>,
    pre_pruning_attempts: usize,
}

impl<M> TreeBuilder<M> {
    pub fn new(
        criterion: Box<dyn SplitCriterion>,
        splitter: Box<dyn Splitter>,
        leaf_creator: Box<dyn LeafCreator<M>>,
    ) -> Self {
        Self {
            terminators: vec![Arc::new(EmptyTerminator), Arc::new(SingleLabelTerminator)],
            criterion,
            splitter,
            leaf_creator,
            pruner: None,
            projection: Box::new(IdentityProjectionFactory),
            projection_ratio: 1.0,
            pre_processor: None,
            pre_pruning_attempts: 0,
        }
    }

    pub fn set_terminators(&mut self, terminators: Vec<Arc<dyn Terminator>>) {
        self.terminators = terminators;
    }

    pub fn terminators(&self) -> &[Arc<dyn Terminator>] {
        &self.terminators
    }

    pub fn with_criterion(mut self, criterion: Box<dyn SplitCriterion>) -> Self {
        self.criterion = criterion;
        self
    }

    pub fn with_splitter(mut self, splitter: Box<dyn Splitter>) -> Self {
        self.splitter = splitter;
        self
    }

    pub fn with_leaf_creator(mut self, leaf_creator: Box<dyn LeafCreator<M>>) -> Self {
        self.leaf_creator = leaf_creator;
        self
    }

    pub fn with_pruner(mut self, pruner: Box<dyn Pruner<M>>) -> Self {
        self.pruner = Some(pruner);
        self
    }

    pub fn with_projection(mut self, projection: Box<dyn ProjectionFactory>) -> Self {
        self.projection = projection;
        self
    }

    pub fn with_pre_processor(mut self, pre_processor: Box<dyn SplitPreProcessor>) -> Self {
        self.pre_processor = Some(pre_processor);
        self
    }

    pub fn set_projection_ratio(&mut self, ratio: f64) {
        self.projection_ratio = ratio;
    }

    pub fn set_pre_pruning_attempts(&mut self, attempts: usize) {
        self.pre_pruning_attempts = attempts;
    }

    /// Induces a complete tree from `instances`. Seeded strategies restart
    /// from their seed, so equal inputs give equal trees.
    pub fn build(&mut self, instances: &Instances) -> Result<Root<M>, ClassifierError> {
        self.projection.reset();
        if let Some(pre_processor) = self.pre_processor.as_mut() {
            pre_processor.reset();
        }

        let mut nodes = Vec::new();
        let root = self.grow(instances, 0, &mut nodes)?;
        let mut tree = Root::from_arena(instances.dimension(), nodes, root);

        if let Some(pruner) = &self.pruner {
            let collapsed = pruner.prune(&mut tree, instances, self.leaf_creator.as_ref())?;
            debug!(pruner = pruner.name(), collapsed, "pruned tree");
        }
        tree.compact();

        debug!(
            instances = instances.len(),
            nodes = tree.node_count(),
            leaves = tree.leaf_count(),
            depth = tree.depth(),
            criterion = self.criterion.name(),
            "built decision tree"
        );
        Ok(tree)
    }

    /// Children are pushed before their parent, so the arena is in postorder
    /// until `compact` renumbers it.
    fn grow(
        &mut self,
        instances: &Instances,
        depth: usize,
        nodes: &mut Vec<Node<M>>,
    ) -> Result<NodeId, ClassifierError> {
        if let Some(terminator) = self
            .terminators
            .iter()
            .find(|terminator| terminator.terminate(instances, depth))
        {
            trace!(depth, instances = instances.len(), terminator = terminator.name(), "leaf");
            return self.push_leaf(instances, nodes);
        }

        let Some(condition) = self.choose_split(instances)? else {
            trace!(depth, instances = instances.len(), "no improving split, leaf");
            return self.push_leaf(instances, nodes);
        };

        let (above, below) = instances.partition(|instance| condition.is_satisfied(instance))?;
        trace!(
            depth,
            split = %condition,
            above = above.len(),
            below = below.len(),
            "split"
        );
        let high = self.grow(&above, depth + 1, nodes)?;
        let low = self.grow(&below, depth + 1, nodes)?;

        nodes.push(Node::Internal(InternalNode::new(
            vec![
                Edge::new(condition, high),
                Edge::new(condition.complement(), low),
            ],
            instances.label_counts(),
        )));
        Ok(NodeId(nodes.len() - 1))
    }

    fn push_leaf(
        &self,
        instances: &Instances,
        nodes: &mut Vec<Node<M>>,
    ) -> Result<NodeId, ClassifierError> {
        nodes.push(self.leaf_creator.change_tree_to_leaf(instances)?);
        Ok(NodeId(nodes.len() - 1))
    }

    /// Greater-than condition of the accepted split, if any.
    fn choose_split(
        &mut self,
        instances: &Instances,
    ) -> Result<Option<SplitCondition>, ClassifierError> {
        let features = self
            .projection
            .build_projection(instances.dimension(), self.projection_ratio)?
            .candidate_features()
            .to_vec();

        let best = best_benefit(
            self.criterion.as_ref(),
            self.splitter.as_ref(),
            instances,
            &features,
        )?;
        if let Some(condition) = accept(&best, instances)? {
            return Ok(Some(condition));
        }

        let Some(pre_processor) = self.pre_processor.as_mut() else {
            return Ok(None);
        };
        for attempt in 0..self.pre_pruning_attempts {
            let resampled = pre_processor.preprocess(instances);
            let benefit = best_benefit(
                self.criterion.as_ref(),
                self.splitter.as_ref(),
                &resampled,
                &features,
            )?;
            if let Some(condition) = accept(&benefit, instances)? {
                trace!(attempt, split = %condition, "accepted split on resampled instances");
                return Ok(Some(condition));
            }
        }
        Ok(None)
    }
}

/// Highest-scoring split over `features`; equal scores keep the earlier
/// (lower) feature.
fn best_benefit(
    criterion: &dyn SplitCriterion,
    splitter: &dyn Splitter,
    instances: &Instances,
    features: &[usize],
) -> Result<Benefit, ClassifierError> {
    let mut best = Benefit::none(features.first().copied().unwrap_or(0));
    for &dimension in features {
        let distribution = AttributeValueDistribution::build(instances, dimension)?;
        let candidate = splitter.build_split(criterion, &distribution, dimension);
        if candidate.improves_on(&best) {
            best = candidate;
        }
    }
    Ok(best)
}

/// A benefit is committed only if it improves and leaves both sides of
/// `instances` non-empty.
fn accept(
    benefit: &Benefit,
    instances: &Instances,
) -> Result<Option<SplitCondition>, ClassifierError> {
    let Some(threshold) = benefit.threshold() else {
        return Ok(None);
    };
    if !benefit.is_improvement() {
        return Ok(None);
    }
    let condition = SplitCondition::greater_than(benefit.dimension(), threshold);
    let mut above = 0;
    for instance in instances.iter() {
        if condition.is_satisfied(instance)? {
            above += 1;
        }
    }
    Ok((above > 0 && above < instances.len()).then_some(condition))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::MajorityClass;
    use crate::classifiers::decision_tree::split_criteria::InfoGainSplitCriterion;
    use crate::classifiers::decision_tree::splitters::MidpointSplitter;
    use crate::classifiers::decision_tree::pruners::RedundantSplitPruner;
    use crate::classifiers::decision_tree::terminators::MaxDepthTerminator;
    use crate::classifiers::decision_tree::{
        BootstrapPreProcessor, Direction, RandomSubspaceProjectionFactory, TrainedLeafCreator,
    };
    use crate::core::instances::DenseInstance;
    use crate::testing::dummies::{
        constant_label, separable_on_first_feature as separable, threshold_dataset, xor,
    };

    fn builder() -> TreeBuilder<MajorityClass> {
        TreeBuilder::new(
            Box::new(InfoGainSplitCriterion::new()),
            Box::new(MidpointSplitter::new()),
            Box::new(TrainedLeafCreator::new(MajorityClass::new)),
        )
    }

    fn data(rows: &[([f64; 2], f64)]) -> Instances {
        Instances::from_instances(
            2,
            rows.iter().map(|(x, y)| DenseInstance::labeled(x.to_vec(), *y)),
        )
        .unwrap()
    }

    #[test]
    fn separable_data_yields_one_split() {
        let instances = separable();
        let tree = builder().build(&instances).unwrap();
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.leaf_count(), 2);

        let root = tree.node(tree.root_id()).and_then(Node::as_internal).unwrap();
        let conditions: Vec<_> = root.edges().iter().map(|e| *e.condition()).collect();
        assert!(conditions.iter().all(|c| c.feature() == 0 && c.threshold() == 0.5));
        assert_eq!(conditions[0].direction(), Direction::LessOrEqual);
        for instance in instances.iter() {
            assert_eq!(tree.predict(instance).unwrap(), instance.label().unwrap());
        }
    }

    #[test]
    fn tree_is_compacted_in_preorder() {
        let tree = builder().build(&separable()).unwrap();
        assert_eq!(tree.root_id().index(), 0);
        let order: Vec<usize> = tree.preorder().iter().map(|id| id.index()).collect();
        assert_eq!(order, (0..tree.node_count()).collect::<Vec<_>>());
    }

    #[test]
    fn xor_without_retries_is_a_leaf() {
        let tree = builder().build(&xor()).unwrap();
        assert!(tree.is_leaf());
    }

    #[test]
    fn zero_attempts_never_retries() {
        let mut builder = builder().with_pre_processor(Box::new(BootstrapPreProcessor::new(3)));
        builder.set_pre_pruning_attempts(0);
        assert!(builder.build(&xor()).unwrap().is_leaf());
    }

    #[test]
    fn bootstrap_retries_can_break_symmetry() {
        let mut builder = builder().with_pre_processor(Box::new(BootstrapPreProcessor::new(3)));
        builder.set_pre_pruning_attempts(20);
        let instances = xor();
        let tree = builder.build(&instances).unwrap();
        assert!(!tree.is_leaf());
        for instance in instances.iter() {
            let path = tree.path_for_instance(instance).unwrap();
            assert!(path.iter().all(|e| e.condition().is_satisfied(instance).unwrap()));
        }
    }

    #[test]
    fn terminators_short_circuit_before_search() {
        let mut builder = builder();
        builder.set_terminators(vec![Arc::new(MaxDepthTerminator::new(0))]);
        let tree = builder.build(&xor()).unwrap();
        assert!(tree.is_leaf());
        let leaf = tree.node(tree.root_id()).and_then(Node::as_leaf).unwrap();
        assert_eq!(leaf.model().count(), 4);
    }

    #[test]
    fn projection_restricts_candidate_features() {
        let mut builder =
            builder().with_projection(Box::new(RandomSubspaceProjectionFactory::new(5)));
        builder.set_projection_ratio(0.5);
        let tree = builder.build(&separable()).unwrap();
        // Feature 1 carries no signal, so only feature 0 is ever split on.
        for id in tree.preorder() {
            if let Some(node) = tree.node(id).and_then(Node::as_internal) {
                assert!(node.edges().iter().all(|e| e.condition().feature() == 0));
            }
        }
        assert!(tree.depth() <= 1);
    }

    #[test]
    fn pruner_runs_after_growth() {
        // The best root split leaves {1, 0} and {1, 1, 1, 1}; both sides vote positive.
        let instances = data(&[
            ([0.0, 0.0], 1.0),
            ([0.1, 0.0], 0.0),
            ([0.2, 0.0], 1.0),
            ([0.3, 0.0], 1.0),
            ([0.4, 0.0], 1.0),
            ([0.5, 0.0], 1.0),
        ]);
        let depth_limited: Vec<Arc<dyn Terminator>> = vec![
            Arc::new(EmptyTerminator),
            Arc::new(SingleLabelTerminator),
            Arc::new(MaxDepthTerminator::new(1)),
        ];

        let mut plain = builder();
        plain.set_terminators(depth_limited.clone());
        let grown = plain.build(&instances).unwrap();
        assert_eq!(grown.leaf_count(), 2);

        let mut pruned = builder().with_pruner(Box::new(RedundantSplitPruner::new()));
        pruned.set_terminators(depth_limited);
        let tree = pruned.build(&instances).unwrap();
        assert!(tree.is_leaf());
        assert_eq!(tree.leaf_ids().len(), 1);
    }

    #[test]
    fn single_label_collection_is_a_leaf() {
        let tree = builder().build(&constant_label(8, 1.0)).unwrap();
        assert!(tree.is_leaf());
        assert_eq!(tree.predict(&DenseInstance::unlabeled(vec![3.0, 5.0])).unwrap(), 1.0);
    }

    #[test]
    fn rebuilding_with_seeded_strategies_is_repeatable() {
        let mut builder = builder()
            .with_projection(Box::new(RandomSubspaceProjectionFactory::new(17)))
            .with_pre_processor(Box::new(BootstrapPreProcessor::new(4)));
        builder.set_projection_ratio(0.5);
        builder.set_pre_pruning_attempts(3);

        let instances = threshold_dataset(60, 0.4);
        let first = builder.build(&instances).unwrap();
        let second = builder.build(&instances).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_collection_builds_single_leaf() {
        let tree = builder().build(&Instances::new(2)).unwrap();
        assert!(tree.is_leaf());
        assert_eq!(tree.leaf_count(), 1);
    }
}
