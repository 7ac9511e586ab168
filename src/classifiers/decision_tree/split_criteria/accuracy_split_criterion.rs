use crate::classifiers::decision_tree::split_criteria::split_criterion::{
    SplitCriterion, impurity_reduction,
};
use crate::core::instances::LabelCounts;

/// Reduction of the majority-vote error rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccuracySplitCriterion;

impl AccuracySplitCriterion {
    pub fn new() -> Self {
        Self
    }
}

fn error_rate(counts: &LabelCounts) -> f64 {
    let total = counts.total();
    if total <= 0.0 {
        0.0
    } else {
        counts.minority() / total
    }
}

impl SplitCriterion for AccuracySplitCriterion {
    fn name(&self) -> &'static str {
        "accuracy"
    }

    fn get_merit_of_split(
        &self,
        pre_split_distribution: &LabelCounts,
        post_split_dists: &[LabelCounts; 2],
    ) -> f64 {
        impurity_reduction(pre_split_distribution, post_split_dists, error_rate)
    }
}
