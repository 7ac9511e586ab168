use crate::classifiers::decision_tree::SplitCondition;
use crate::core::instances::LabelCounts;
use serde::{Deserialize, Serialize};

/// Stable index of a node inside a [`Root`](super::Root) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outgoing branch of an internal node, guarded by `condition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    condition: SplitCondition,
    child: NodeId,
}

impl Edge {
    pub fn new(condition: SplitCondition, child: NodeId) -> Self {
        Self { condition, child }
    }

    pub fn condition(&self) -> &SplitCondition {
        &self.condition
    }

    pub fn child(&self) -> NodeId {
        self.child
    }

    pub(crate) fn remap(&mut self, child: NodeId) {
        self.child = child;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalNode {
    edges: Vec<Edge>,
    counts: LabelCounts,
}

impl InternalNode {
    /// Edges are stored in their total order so iteration is deterministic.
    pub fn new(mut edges: Vec<Edge>, counts: LabelCounts) -> Self {
        edges.sort();
        Self { edges, counts }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }

    pub fn children(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.edges.iter().map(Edge::child)
    }

    /// Label counts of the training instances that reached this node.
    pub fn counts(&self) -> LabelCounts {
        self.counts
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode<M> {
    model: M,
    counts: LabelCounts,
}

impl<M> LeafNode<M> {
    pub fn new(model: M, counts: LabelCounts) -> Self {
        Self { model, counts }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn counts(&self) -> LabelCounts {
        self.counts
    }
}

/// A tree node is decided once, when it is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Node<M> {
    Internal(InternalNode),
    Leaf(LeafNode<M>),
}

impl<M> Node<M> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn counts(&self) -> LabelCounts {
        match self {
            Node::Internal(node) => node.counts(),
            Node::Leaf(leaf) => leaf.counts(),
        }
    }

    pub fn as_leaf(&self) -> Option<&LeafNode<M>> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Internal(_) => None,
        }
    }

    pub fn as_internal(&self) -> Option<&InternalNode> {
        match self {
            Node::Internal(node) => Some(node),
            Node::Leaf(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_node_sorts_edges() {
        let node = InternalNode::new(
            vec![
                Edge::new(SplitCondition::greater_than(0, 0.5), NodeId(1)),
                Edge::new(SplitCondition::less_or_equal(0, 0.5), NodeId(2)),
            ],
            LabelCounts::new(2.0, 2.0),
        );
        let children: Vec<NodeId> = node.children().collect();
        assert_eq!(children, vec![NodeId(2), NodeId(1)]);
    }

    #[test]
    fn node_kind_is_tagged_in_json() {
        let leaf: Node<f64> = Node::Leaf(LeafNode::new(0.25, LabelCounts::new(3.0, 1.0)));
        let json = serde_json::to_value(&leaf).unwrap();
        assert_eq!(json["kind"], "leaf");
        assert!(leaf.is_leaf());
        assert_eq!(leaf.counts().total(), 4.0);
    }
}
