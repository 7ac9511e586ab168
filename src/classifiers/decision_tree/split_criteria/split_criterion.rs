use crate::classifiers::decision_tree::AttributeValueDistribution;
use crate::core::instances::LabelCounts;

/// Scores a candidate binary split; higher is better.
pub trait SplitCriterion {
    fn name(&self) -> &'static str;

    /// Merit of splitting `pre_split_distribution` into the two
    /// `post_split_dists` (`[<= threshold, > threshold]`).
    fn get_merit_of_split(
        &self,
        pre_split_distribution: &LabelCounts,
        post_split_dists: &[LabelCounts; 2],
    ) -> f64;

    fn compute_objective(&self, distribution: &AttributeValueDistribution, threshold: f64) -> f64 {
        self.get_merit_of_split(&distribution.priors(), &distribution.partition(threshold))
    }
}

/// `impurity(priors) - sum(share_i * impurity(post_i))`, skipping empty sides.
pub(crate) fn impurity_reduction<F>(pre: &LabelCounts, post: &[LabelCounts; 2], impurity: F) -> f64
where
    F: Fn(&LabelCounts) -> f64,
{
    let total = pre.total();
    if total <= 0.0 {
        return 0.0;
    }
    let mut merit = impurity(pre);
    for part in post {
        let mass = part.total();
        if mass > 0.0 {
            merit -= mass / total * impurity(part);
        }
    }
    merit
}
