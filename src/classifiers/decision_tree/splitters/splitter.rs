use crate::classifiers::decision_tree::AttributeValueDistribution;
use crate::classifiers::decision_tree::split_criteria::SplitCriterion;
use crate::classifiers::decision_tree::splitters::Benefit;
use crate::core::instances::LabelCounts;

/// Finds the best threshold for one feature.
///
/// Implementations only consider boundaries between values that occur in
/// the distribution, and return [`Benefit::none`] when fewer than two
/// distinct values exist.
pub trait Splitter {
    fn build_split(
        &self,
        criterion: &dyn SplitCriterion,
        distribution: &AttributeValueDistribution,
        dimension: usize,
    ) -> Benefit;
}

/// Incremental sweep over adjacent distinct values. `threshold_between`
/// picks the threshold for the boundary `(lower, upper)`; it must satisfy
/// `lower <= t < upper`. Equal scores keep the lowest threshold.
pub(crate) fn sweep<F>(
    criterion: &dyn SplitCriterion,
    distribution: &AttributeValueDistribution,
    dimension: usize,
    threshold_between: F,
) -> Benefit
where
    F: Fn(f64, f64) -> f64,
{
    let priors = distribution.priors();
    let mut below = LabelCounts::default();
    let mut best = Benefit::none(dimension);

    for pair in distribution.entries().windows(2) {
        let (lower, counts) = pair[0];
        let (upper, _) = pair[1];
        below += counts;
        let above = priors - below;

        let score = criterion.get_merit_of_split(&priors, &[below, above]);
        let candidate = Benefit::new(dimension, score, threshold_between(lower, upper));
        if candidate.improves_on(&best) {
            best = candidate;
        }
    }
    best
}
