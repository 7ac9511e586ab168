use crate::classifiers::decision_tree::nodes::{Edge, LeafNode, Node, NodeId};
use crate::classifiers::{Classifier, ClassifierError};
use crate::core::instances::Instance;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Entry point of an induced tree.
///
/// Nodes live in an arena addressed by [`NodeId`]. Leaf ids are dense
/// integers assigned in depth-first order (edges visited in their total
/// order) and are recomputed by [`Root::reset_leaves`] after every structural
/// change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Root<M> {
    dimension: usize,
    nodes: Vec<Node<M>>,
    root: NodeId,
    leaf_ids: Vec<Option<usize>>,
    leaf_count: usize,
}

impl<M> Root<M> {
    pub(crate) fn from_arena(dimension: usize, nodes: Vec<Node<M>>, root: NodeId) -> Self {
        let mut tree = Self {
            dimension,
            nodes,
            root,
            leaf_ids: Vec::new(),
            leaf_count: 0,
        };
        tree.reset_leaves();
        tree
    }

    pub fn single_leaf(dimension: usize, leaf: LeafNode<M>) -> Self {
        Self::from_arena(dimension, vec![Node::Leaf(leaf)], NodeId(0))
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<M>> {
        self.nodes.get(id.0)
    }

    pub fn is_leaf(&self) -> bool {
        self.node(self.root).is_some_and(Node::is_leaf)
    }

    pub fn node_count(&self) -> usize {
        self.preorder().len()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let Some(Node::Internal(node)) = self.node(id) {
                stack.extend(node.children().map(|child| (child, depth + 1)));
            }
        }
        deepest
    }

    /// Reachable node ids, parents before children, edges in order.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(Node::Internal(node)) = self.node(id) {
                stack.extend(node.children().rev());
            }
        }
        order
    }

    /// Checks that every node reachable from the root exists and is reached
    /// through exactly one edge.
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.root.0 >= self.nodes.len() {
            return Err(ClassifierError::MalformedTree(format!(
                "root {} is outside an arena of {} nodes",
                self.root,
                self.nodes.len()
            )));
        }
        let mut seen = vec![false; self.nodes.len()];
        seen[self.root.0] = true;
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(Node::Internal(node)) = self.node(id) else {
                continue;
            };
            for child in node.children() {
                match seen.get_mut(child.0) {
                    None => {
                        return Err(ClassifierError::MalformedTree(format!(
                            "node {id} points to missing node {child}"
                        )));
                    }
                    Some(true) => {
                        return Err(ClassifierError::MalformedTree(format!(
                            "node {child} is reached more than once"
                        )));
                    }
                    Some(visited) => {
                        *visited = true;
                        stack.push(child);
                    }
                }
            }
        }
        Ok(())
    }

    /// Replaces any previous leaf-id mapping with a fresh dense numbering.
    pub fn reset_leaves(&mut self) {
        let mut leaf_ids = vec![None; self.nodes.len()];
        let mut next = 0;
        for id in self.preorder() {
            if self.nodes.get(id.0).is_some_and(Node::is_leaf) {
                leaf_ids[id.0] = Some(next);
                next += 1;
            }
        }
        self.leaf_ids = leaf_ids;
        self.leaf_count = next;
    }

    pub fn leaf_id(&self, node: NodeId) -> Option<usize> {
        self.leaf_ids.get(node.0).copied().flatten()
    }

    /// `(node, leaf id)` for every reachable leaf, ordered by leaf id.
    pub fn leaf_ids(&self) -> Vec<(NodeId, usize)> {
        self.preorder()
            .into_iter()
            .filter_map(|id| self.leaf_id(id).map(|leaf| (id, leaf)))
            .collect()
    }

    /// Edges taken by `instance` from the root down to its leaf.
    pub fn path_for_instance(&self, instance: &dyn Instance) -> Result<Vec<Edge>, ClassifierError> {
        if instance.dimension() != self.dimension {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.dimension,
                found: instance.dimension(),
            });
        }

        let mut path = Vec::new();
        let mut current = self.root;
        while let Some(Node::Internal(node)) = self.node(current) {
            let mut matched = None;
            for edge in node.edges() {
                if edge.condition().is_satisfied(instance)? {
                    if matched.is_some() {
                        return Err(ClassifierError::UnroutableInstance { node: current.0 });
                    }
                    matched = Some(*edge);
                }
            }
            let edge = matched.ok_or(ClassifierError::UnroutableInstance { node: current.0 })?;
            path.push(edge);
            current = edge.child();
        }
        Ok(path)
    }

    pub fn leaf_for_instance(&self, instance: &dyn Instance) -> Result<NodeId, ClassifierError> {
        let path = self.path_for_instance(instance)?;
        Ok(path.last().map_or(self.root, Edge::child))
    }

    /// Stable id of the leaf `instance` falls into; 0 when the root is a leaf.
    pub fn id_for_instance(&self, instance: &dyn Instance) -> Result<usize, ClassifierError> {
        let leaf = self.leaf_for_instance(instance)?;
        self.leaf_id(leaf)
            .ok_or(ClassifierError::UnroutableInstance { node: leaf.0 })
    }

    pub(crate) fn replace_node(&mut self, id: NodeId, node: Node<M>) {
        if let Some(slot) = self.nodes.get_mut(id.0) {
            *slot = node;
        }
    }

    /// Drops unreachable nodes and renumbers the arena in preorder.
    pub(crate) fn compact(&mut self) {
        let order = self.preorder();
        let mut new_index = vec![None; self.nodes.len()];
        for (position, id) in order.iter().enumerate() {
            new_index[id.0] = Some(position);
        }

        let mut old: Vec<Option<Node<M>>> =
            std::mem::take(&mut self.nodes).into_iter().map(Some).collect();
        let mut nodes = Vec::with_capacity(order.len());
        for id in order {
            let Some(mut node) = old[id.0].take() else {
                continue;
            };
            if let Node::Internal(internal) = &mut node {
                for edge in internal.edges_mut() {
                    if let Some(position) = new_index[edge.child().0] {
                        edge.remap(NodeId(position));
                    }
                }
            }
            nodes.push(node);
        }

        self.nodes = nodes;
        self.root = NodeId(0);
        self.reset_leaves();
    }

    /// Indented dump of conditions and leaf statistics.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        match self.node(id) {
            Some(Node::Leaf(leaf)) => {
                let counts = leaf.counts();
                writeln!(
                    f,
                    "{pad}leaf {}: {} instances, {} positive",
                    self.leaf_id(id).map_or_else(|| "?".to_string(), |l| l.to_string()),
                    counts.total(),
                    counts.positive
                )
            }
            Some(Node::Internal(node)) => {
                for edge in node.edges() {
                    writeln!(f, "{pad}{}", edge.condition())?;
                    self.fmt_node(f, edge.child(), indent + 1)?;
                }
                Ok(())
            }
            None => writeln!(f, "{pad}<missing node {id}>"),
        }
    }
}

impl<M: Classifier> Root<M> {
    /// Descends to the leaf of `instance` and defers to its model.
    pub fn predict(&self, instance: &dyn Instance) -> Result<f64, ClassifierError> {
        let leaf = self.leaf_for_instance(instance)?;
        match self.node(leaf) {
            Some(Node::Leaf(leaf)) => leaf.model().predict(instance),
            _ => Err(ClassifierError::UnroutableInstance { node: leaf.0 }),
        }
    }
}

impl<M: Serialize> Root<M> {
    pub fn to_json(&self) -> Result<String, ClassifierError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ClassifierError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl<M: DeserializeOwned> Root<M> {
    pub fn from_json(json: &str) -> Result<Self, ClassifierError> {
        let mut tree: Self = serde_json::from_str(json)?;
        tree.validate()?;
        tree.reset_leaves();
        Ok(tree)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ClassifierError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

impl<M> fmt::Display for Root<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, self.root, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::MajorityClass;
    use crate::classifiers::decision_tree::SplitCondition;
    use crate::classifiers::decision_tree::nodes::InternalNode;
    use crate::core::instances::{DenseInstance, LabelCounts};

    fn leaf(p: f64) -> Node<MajorityClass> {
        let mut model = MajorityClass::new();
        let instances = crate::core::instances::Instances::from_instances(
            1,
            [DenseInstance::labeled(vec![0.0], p)],
        )
        .unwrap();
        model.train(&instances).unwrap();
        Node::Leaf(LeafNode::new(model, LabelCounts::new(1.0 - p, p)))
    }

    fn split(feature: usize, threshold: f64, low: usize, high: usize) -> Node<MajorityClass> {
        Node::Internal(InternalNode::new(
            vec![
                Edge::new(SplitCondition::greater_than(feature, threshold), NodeId(high)),
                Edge::new(SplitCondition::less_or_equal(feature, threshold), NodeId(low)),
            ],
            LabelCounts::default(),
        ))
    }

    /// x0 <= 0.5 -> leaf(0); x0 > 0.5 -> (x1 <= 0.5 -> leaf(0.5); x1 > 0.5 -> leaf(1))
    fn two_level() -> Root<MajorityClass> {
        let nodes = vec![leaf(0.0), leaf(0.5), leaf(1.0), split(1, 0.5, 1, 2), split(0, 0.5, 0, 3)];
        Root::from_arena(2, nodes, NodeId(4))
    }

    #[test]
    fn leaf_ids_are_dense_in_preorder() {
        let tree = two_level();
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(
            tree.leaf_ids(),
            vec![(NodeId(0), 0), (NodeId(1), 1), (NodeId(2), 2)]
        );
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn reset_leaves_is_idempotent() {
        let mut tree = two_level();
        let before = tree.leaf_ids();
        tree.reset_leaves();
        tree.reset_leaves();
        assert_eq!(tree.leaf_ids(), before);
    }

    #[test]
    fn predicts_through_leaf_model() {
        let tree = two_level();
        let p = tree.predict(&DenseInstance::unlabeled(vec![0.9, 0.9])).unwrap();
        assert_eq!(p, 1.0);
        let id = tree.id_for_instance(&DenseInstance::unlabeled(vec![0.9, 0.1])).unwrap();
        assert_eq!(id, 1);
    }

    #[test]
    fn path_is_consistent_with_features() {
        let tree = two_level();
        let inst = DenseInstance::unlabeled(vec![0.7, 0.2]);
        let path = tree.path_for_instance(&inst).unwrap();
        assert_eq!(path.len(), 2);
        assert!(path.iter().all(|e| e.condition().is_satisfied(&inst).unwrap()));
    }

    #[test]
    fn wrong_dimension_fails_fast() {
        let tree = two_level();
        assert!(matches!(
            tree.predict(&DenseInstance::unlabeled(vec![0.7])),
            Err(ClassifierError::DimensionMismatch {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn single_leaf_root_has_id_zero() {
        let tree = Root::from_arena(3, vec![leaf(1.0)], NodeId(0));
        assert!(tree.is_leaf());
        assert_eq!(
            tree.id_for_instance(&DenseInstance::unlabeled(vec![1.0, 2.0, 3.0]))
                .unwrap(),
            0
        );
    }

    #[test]
    fn compact_drops_orphans_and_keeps_predictions() {
        let mut tree = two_level();
        tree.replace_node(NodeId(3), leaf(1.0));
        tree.compact();
        assert_eq!(tree.nodes.len(), 3);
        assert_eq!(tree.root_id(), NodeId(0));
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(
            tree.predict(&DenseInstance::unlabeled(vec![0.9, 0.1])).unwrap(),
            1.0
        );
    }

    #[test]
    fn display_lists_conditions_and_leaves() {
        let text = two_level().describe();
        assert!(text.contains("x[0] <= 0.5"));
        assert!(text.contains("leaf 2: 1 instances, 1 positive"));
    }

    #[test]
    fn loading_a_cyclic_tree_fails() {
        let nodes = vec![split(0, 0.5, 0, 0)];
        let tree = Root {
            dimension: 1,
            nodes,
            root: NodeId(0),
            leaf_ids: Vec::new(),
            leaf_count: 0,
        };
        let json = serde_json::to_string(&tree).unwrap();
        assert!(matches!(
            Root::<MajorityClass>::from_json(&json),
            Err(ClassifierError::MalformedTree(_))
        ));
    }

    #[test]
    fn loading_a_dangling_child_fails() {
        let tree = Root {
            dimension: 1,
            nodes: vec![leaf(0.0), split(0, 0.5, 0, 7)],
            root: NodeId(1),
            leaf_ids: Vec::new(),
            leaf_count: 0,
        };
        let json = serde_json::to_string(&tree).unwrap();
        assert!(matches!(
            Root::<MajorityClass>::from_json(&json),
            Err(ClassifierError::MalformedTree(_))
        ));
        let out_of_range_root = Root::<MajorityClass> {
            root: NodeId(9),
            ..two_level()
        };
        assert!(out_of_range_root.validate().is_err());
    }

    #[test]
    fn json_keeps_thresholds_bit_exact() {
        let threshold = 9.735062461969135e-1;
        let tree = Root::from_arena(
            1,
            vec![leaf(0.0), leaf(1.0), split(0, threshold, 0, 1)],
            NodeId(2),
        );
        let back: Root<MajorityClass> = Root::from_json(&tree.to_json().unwrap()).unwrap();
        let Some(Node::Internal(node)) = back.node(back.root_id()) else {
            panic!("root should be internal");
        };
        assert!(node
            .edges()
            .iter()
            .all(|edge| edge.condition().threshold().to_bits() == threshold.to_bits()));
    }

    #[test]
    fn induced_trees_validate() {
        assert!(two_level().validate().is_ok());
    }

    #[test]
    fn json_round_trip_preserves_structure() {
        let tree = two_level();
        let back: Root<MajorityClass> = Root::from_json(&tree.to_json().unwrap()).unwrap();
        assert_eq!(back, tree);
    }
}
