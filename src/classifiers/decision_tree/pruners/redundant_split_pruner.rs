use crate::classifiers::ClassifierError;
use crate::classifiers::decision_tree::LeafCreator;
use crate::classifiers::decision_tree::nodes::Root;
use crate::classifiers::decision_tree::pruners::Pruner;
use crate::classifiers::decision_tree::pruners::pruner::prune_bottom_up;
use crate::core::instances::Instances;

/// Collapses splits whose leaf children all predict the same majority class.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedundantSplitPruner;

impl RedundantSplitPruner {
    pub fn new() -> Self {
        Self
    }
}

impl<M> Pruner<M> for RedundantSplitPruner {
    fn name(&self) -> &'static str {
        "redundant-split"
    }

    fn prune(
        &self,
        root: &mut Root<M>,
        instances: &Instances,
        leaf_creator: &dyn LeafCreator<M>,
    ) -> Result<usize, ClassifierError> {
        prune_bottom_up(root, instances, leaf_creator, |_, children| {
            children
                .iter()
                .filter(|counts| !counts.is_empty())
                .map(|counts| counts.majority())
                .collect::<Vec<_>>()
                .windows(2)
                .all(|pair| pair[0] == pair[1])
        })
    }
}
