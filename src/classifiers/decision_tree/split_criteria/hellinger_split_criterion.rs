use crate::classifiers::decision_tree::split_criteria::split_criterion::SplitCriterion;
use crate::core::instances::LabelCounts;

/// Hellinger distance between the class-conditional distributions over the
/// two sides of the split. Insensitive to class skew; bounded by `sqrt(2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HellingerSplitCriterion;

impl HellingerSplitCriterion {
    pub fn new() -> Self {
        Self
    }
}

impl SplitCriterion for HellingerSplitCriterion {
    fn name(&self) -> &'static str {
        "hellinger"
    }

    fn get_merit_of_split(
        &self,
        pre_split_distribution: &LabelCounts,
        post_split_dists: &[LabelCounts; 2],
    ) -> f64 {
        let positives = pre_split_distribution.positive;
        let negatives = pre_split_distribution.negative;
        if positives <= 0.0 || negatives <= 0.0 {
            return 0.0;
        }
        post_split_dists
            .iter()
            .map(|side| {
                let diff = (side.positive / positives).sqrt() - (side.negative / negatives).sqrt();
                diff * diff
            })
            .sum::<f64>()
            .sqrt()
    }
}
