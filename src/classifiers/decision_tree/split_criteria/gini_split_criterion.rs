use crate::classifiers::decision_tree::split_criteria::split_criterion::{
    SplitCriterion, impurity_reduction,
};
use crate::core::instances::LabelCounts;

#[derive(Debug, Clone, Copy, Default)]
pub struct GiniSplitCriterion;

impl GiniSplitCriterion {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_gini(&self, distribution: &LabelCounts) -> f64 {
        let total = distribution.total();
        if total <= 0.0 {
            return 0.0;
        }
        let mut gini = 1.0;
        for count in [distribution.negative, distribution.positive] {
            let rel_freq = count / total;
            gini -= rel_freq.powi(2);
        }
        gini
    }
}

impl SplitCriterion for GiniSplitCriterion {
    fn name(&self) -> &'static str {
        "gini"
    }

    fn get_merit_of_split(
        &self,
        pre_split_distribution: &LabelCounts,
        post_split_dists: &[LabelCounts; 2],
    ) -> f64 {
        impurity_reduction(pre_split_distribution, post_split_dists, |counts| {
            self.compute_gini(counts)
        })
    }
}
