use crate::classifiers::decision_tree::split_criteria::split_criterion::{
    SplitCriterion, impurity_reduction,
};
use crate::core::instances::LabelCounts;

/// Information gain: reduction of Shannon entropy (bits).
#[derive(Debug, Clone, Copy, Default)]
pub struct InfoGainSplitCriterion;

impl InfoGainSplitCriterion {
    pub fn new() -> Self {
        Self
    }
}

impl SplitCriterion for InfoGainSplitCriterion {
    fn name(&self) -> &'static str {
        "info-gain"
    }

    fn get_merit_of_split(
        &self,
        pre_split_distribution: &LabelCounts,
        post_split_dists: &[LabelCounts; 2],
    ) -> f64 {
        impurity_reduction(pre_split_distribution, post_split_dists, LabelCounts::entropy)
    }
}
