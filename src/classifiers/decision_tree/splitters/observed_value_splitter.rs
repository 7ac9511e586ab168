use crate::classifiers::decision_tree::AttributeValueDistribution;
use crate::classifiers::decision_tree::split_criteria::SplitCriterion;
use crate::classifiers::decision_tree::splitters::splitter::{Splitter, sweep};
use crate::classifiers::decision_tree::splitters::Benefit;

/// Thresholds at the observed value itself (`x <= v` goes left).
#[derive(Debug, Clone, Copy, Default)]
pub struct ObservedValueSplitter;

impl ObservedValueSplitter {
    pub fn new() -> Self {
        Self
    }
}

impl Splitter for ObservedValueSplitter {
    fn build_split(
        &self,
        criterion: &dyn SplitCriterion,
        distribution: &AttributeValueDistribution,
        dimension: usize,
    ) -> Benefit {
        sweep(criterion, distribution, dimension, |lower, _| lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::decision_tree::AttributeValueLabel;
    use crate::classifiers::decision_tree::split_criteria::GiniSplitCriterion;

    #[test]
    fn threshold_is_an_observed_value() {
        let d = AttributeValueDistribution::from_pairs(
            4,
            [(0.2, false), (0.7, false), (1.9, true), (2.4, true)]
                .map(|(v, l)| AttributeValueLabel::new(v, l)),
        );
        let benefit = ObservedValueSplitter::new().build_split(&GiniSplitCriterion, &d, 4);
        assert_eq!(benefit.dimension(), 4);
        assert_eq!(benefit.threshold(), Some(0.7));
        assert_eq!(d.partition(0.7)[0].total(), 2.0);
    }
}
