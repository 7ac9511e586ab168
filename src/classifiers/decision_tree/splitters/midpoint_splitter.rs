use crate::classifiers::decision_tree::AttributeValueDistribution;
use crate::classifiers::decision_tree::split_criteria::SplitCriterion;
use crate::classifiers::decision_tree::splitters::splitter::{Splitter, sweep};
use crate::classifiers::decision_tree::splitters::Benefit;

/// Thresholds at the midpoint between adjacent observed values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MidpointSplitter;

impl MidpointSplitter {
    pub fn new() -> Self {
        Self
    }
}

fn midpoint(lower: f64, upper: f64) -> f64 {
    let mid = lower + (upper - lower) / 2.0;
    // adjacent floats (or overflow) can round the midpoint onto `upper`
    if mid < upper && mid >= lower { mid } else { lower }
}

impl Splitter for MidpointSplitter {
    fn build_split(
        &self,
        criterion: &dyn SplitCriterion,
        distribution: &AttributeValueDistribution,
        dimension: usize,
    ) -> Benefit {
        sweep(criterion, distribution, dimension, midpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::decision_tree::AttributeValueLabel;
    use crate::classifiers::decision_tree::split_criteria::InfoGainSplitCriterion;

    fn dist(pairs: &[(f64, bool)]) -> AttributeValueDistribution {
        AttributeValueDistribution::from_pairs(
            0,
            pairs.iter().map(|(v, l)| AttributeValueLabel::new(*v, *l)),
        )
    }

    #[test]
    fn finds_separating_midpoint() {
        let d = dist(&[(0.0, false), (0.0, false), (1.0, true), (1.0, true)]);
        let benefit = MidpointSplitter::new().build_split(&InfoGainSplitCriterion, &d, 0);
        assert_eq!(benefit.threshold(), Some(0.5));
        assert!((benefit.score() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_feature_has_no_split() {
        let d = dist(&[(2.0, false), (2.0, true), (2.0, true)]);
        let benefit = MidpointSplitter::new().build_split(&InfoGainSplitCriterion, &d, 0);
        assert!(!benefit.is_split());
    }

    #[test]
    fn picks_best_of_several_boundaries() {
        let d = dist(&[
            (1.0, false),
            (2.0, false),
            (3.0, false),
            (4.0, true),
            (5.0, true),
        ]);
        let benefit = MidpointSplitter::new().build_split(&InfoGainSplitCriterion, &d, 0);
        assert_eq!(benefit.threshold(), Some(3.5));
    }

    #[test]
    fn equal_scores_keep_lowest_threshold() {
        // both boundaries isolate one pure group of equal size
        let d = dist(&[(1.0, true), (2.0, false), (2.0, false), (3.0, true)]);
        let benefit = MidpointSplitter::new().build_split(&InfoGainSplitCriterion, &d, 0);
        assert_eq!(benefit.threshold(), Some(1.5));
    }

    #[test]
    fn midpoint_never_reaches_upper_value() {
        let lower = 1.0f64;
        let upper = f64::from_bits(lower.to_bits() + 1);
        let t = midpoint(lower, upper);
        assert!(t >= lower && t < upper);
    }
}
