use crate::classifiers::ClassifierError;
use crate::classifiers::decision_tree::LeafCreator;
use crate::classifiers::decision_tree::nodes::Root;
use crate::classifiers::decision_tree::pruners::Pruner;
use crate::classifiers::decision_tree::pruners::pruner::prune_bottom_up;
use crate::core::instances::Instances;

pub const DEFAULT_PENALTY: f64 = 0.5;

/// Pessimistic error pruning with a continuity correction of `penalty` per
/// leaf.
///
/// A subtree is replaced by a leaf when the corrected error of the leaf is
/// within one standard error of the corrected error of the subtree.
#[derive(Debug, Clone, Copy)]
pub struct PessimisticErrorPruner {
    penalty: f64,
}

impl PessimisticErrorPruner {
    pub fn new(penalty: f64) -> Result<Self, ClassifierError> {
        if !(penalty >= 0.0) || !penalty.is_finite() {
            return Err(ClassifierError::InvalidParameter(format!(
                "pessimistic penalty must be a finite non-negative number, got {penalty}"
            )));
        }
        Ok(Self { penalty })
    }

    pub fn penalty(&self) -> f64 {
        self.penalty
    }
}

impl Default for PessimisticErrorPruner {
    fn default() -> Self {
        Self {
            penalty: DEFAULT_PENALTY,
        }
    }
}

impl<M> Pruner<M> for PessimisticErrorPruner {
    fn name(&self) -> &'static str {
        "pessimistic-error"
    }

    fn prune(
        &self,
        root: &mut Root<M>,
        instances: &Instances,
        leaf_creator: &dyn LeafCreator<M>,
    ) -> Result<usize, ClassifierError> {
        prune_bottom_up(root, instances, leaf_creator, |node, children| {
            let counts = node.counts();
            let total = counts.total();
            let leaf_error = counts.minority() + self.penalty;
            let subtree_error = children.iter().map(|c| c.minority()).sum::<f64>()
                + self.penalty * children.len() as f64;
            let standard_error = if total > 0.0 {
                (subtree_error * (total - subtree_error).max(0.0) / total).sqrt()
            } else {
                0.0
            };
            leaf_error <= subtree_error + standard_error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::decision_tree::pruners::pruner::tests::{creator, data, stump};

    #[test]
    fn keeps_clean_split_of_large_node() {
        let rows: Vec<(f64, f64)> = (0..20)
            .map(|i| (i as f64 / 20.0, if i < 10 { 0.0 } else { 1.0 }))
            .collect();
        let instances = data(&rows);
        let mut tree = stump(&instances, 0.475);
        let pruner = PessimisticErrorPruner::default();
        assert_eq!(pruner.prune(&mut tree, &instances, &creator()).unwrap(), 0);
        assert_eq!(tree.leaf_count(), 2);
    }

    #[test]
    fn collapses_split_that_barely_helps() {
        // Leaf error 2 + 0.5 against subtree error 2 + 1.0 plus its standard error.
        let instances = data(&[
            (0.1, 0.0),
            (0.2, 1.0),
            (0.3, 0.0),
            (0.7, 1.0),
            (0.8, 0.0),
            (0.9, 0.0),
        ]);
        let mut tree = stump(&instances, 0.5);
        let pruner = PessimisticErrorPruner::new(0.5).unwrap();
        assert_eq!(pruner.prune(&mut tree, &instances, &creator()).unwrap(), 1);
        assert!(tree.is_leaf());
    }

    #[test]
    fn rejects_negative_penalty() {
        assert!(PessimisticErrorPruner::new(-0.1).is_err());
        assert!(PessimisticErrorPruner::new(f64::NAN).is_err());
        assert_eq!(PessimisticErrorPruner::default().penalty(), 0.5);
    }
}
