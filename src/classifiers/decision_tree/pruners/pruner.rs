use crate::classifiers::ClassifierError;
use crate::classifiers::decision_tree::LeafCreator;
use crate::classifiers::decision_tree::nodes::{InternalNode, Node, NodeId, Root};
use crate::core::instances::{Instances, LabelCounts};
use tracing::trace;

/// Post-pruning pass run once after the tree is grown.
pub trait Pruner<M> {
    fn name(&self) -> &'static str;

    /// Collapses subtrees into leaves and returns how many were collapsed.
    /// Leaf ids are reset before returning.
    fn prune(
        &self,
        root: &mut Root<M>,
        instances: &Instances,
        leaf_creator: &dyn LeafCreator<M>,
    ) -> Result<usize, ClassifierError>;
}

/// Bottom-up collapse shared by the pruners.
///
/// Every internal node whose children are all leaves is offered to
/// `should_collapse` together with its children's label counts. Collapsed
/// nodes are rebuilt by `leaf_creator` from the training instances routed to
/// them, so a parent can collapse after its children did.
pub(crate) fn prune_bottom_up<M, F>(
    root: &mut Root<M>,
    instances: &Instances,
    leaf_creator: &dyn LeafCreator<M>,
    mut should_collapse: F,
) -> Result<usize, ClassifierError>
where
    F: FnMut(&InternalNode, &[LabelCounts]) -> bool,
{
    let reached = route_training_instances(root, instances)?;
    let order = root.preorder();
    let mut collapsed = 0;

    for id in order.into_iter().rev() {
        let Some(Node::Internal(node)) = root.node(id) else {
            continue;
        };
        let mut child_counts = Vec::with_capacity(node.edges().len());
        for child in node.children() {
            match root.node(child) {
                Some(Node::Leaf(leaf)) => child_counts.push(leaf.counts()),
                _ => break,
            }
        }
        if child_counts.len() != node.edges().len() || !should_collapse(node, &child_counts) {
            continue;
        }

        let subset = instances.select(&reached[id.index()]);
        trace!(node = %id, instances = subset.len(), "collapsing subtree into leaf");
        let leaf = leaf_creator.change_tree_to_leaf(&subset)?;
        root.replace_node(id, leaf);
        collapsed += 1;
    }

    if collapsed > 0 {
        root.compact();
    }
    Ok(collapsed)
}

/// Indices of the training instances that pass through each arena slot.
fn route_training_instances<M>(
    root: &Root<M>,
    instances: &Instances,
) -> Result<Vec<Vec<usize>>, ClassifierError> {
    let slots = root.preorder().iter().map(|id| id.index() + 1).max().unwrap_or(0);
    let mut reached = vec![Vec::new(); slots];
    for (index, instance) in instances.iter().enumerate() {
        let mut visit = |id: NodeId| {
            if let Some(bucket) = reached.get_mut(id.index()) {
                bucket.push(index);
            }
        };
        visit(root.root_id());
        for edge in root.path_for_instance(instance)? {
            visit(edge.child());
        }
    }
    Ok(reached)
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::classifiers::MajorityClass;
    use crate::classifiers::decision_tree::nodes::{Edge, InternalNode, Node, NodeId, Root};
    use crate::classifiers::decision_tree::{LeafCreator, SplitCondition, TrainedLeafCreator};
    use crate::core::instances::{DenseInstance, Instances};

    pub(crate) fn creator() -> TrainedLeafCreator<fn() -> MajorityClass> {
        TrainedLeafCreator::new(MajorityClass::new)
    }

    pub(crate) fn data(rows: &[(f64, f64)]) -> Instances {
        Instances::from_instances(
            1,
            rows.iter().map(|(x, y)| DenseInstance::labeled(vec![*x], *y)),
        )
        .unwrap()
    }

    /// One split on feature 0 at `threshold`, leaves trained on each side.
    pub(crate) fn stump(instances: &Instances, threshold: f64) -> Root<MajorityClass> {
        let creator = creator();
        let high = SplitCondition::greater_than(0, threshold);
        let (above, below) = instances
            .partition(|instance| high.is_satisfied(instance))
            .unwrap();
        let nodes = vec![
            creator.change_tree_to_leaf(&below).unwrap(),
            creator.change_tree_to_leaf(&above).unwrap(),
            Node::Internal(InternalNode::new(
                vec![
                    Edge::new(high.complement(), NodeId(0)),
                    Edge::new(high, NodeId(1)),
                ],
                instances.label_counts(),
            )),
        ];
        Root::from_arena(1, nodes, NodeId(2))
    }
}
