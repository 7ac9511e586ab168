use crate::classifiers::attribute_class_observers::AttributeClassObserver;
use crate::core::estimators::GaussianEstimator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianNumericAttributeClassObserver {
    range_observed_per_class: [Option<(f64, f64)>; 2],
    attribute_value_distribution_per_class: [Option<GaussianEstimator>; 2],
}

impl Default for GaussianNumericAttributeClassObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl GaussianNumericAttributeClassObserver {
    pub fn new() -> Self {
        GaussianNumericAttributeClassObserver {
            range_observed_per_class: [None, None],
            attribute_value_distribution_per_class: [None, None],
        }
    }

    /// Observed `(min, max)` for a class, `None` until the class is seen.
    pub fn observed_range(&self, class_val: bool) -> Option<(f64, f64)> {
        self.range_observed_per_class[class_val as usize]
    }
}

impl AttributeClassObserver for GaussianNumericAttributeClassObserver {
    fn observe_attribute_class(&mut self, att_val: f64, class_val: bool, weight: f64) {
        if att_val.is_nan() {
            return;
        }
        let w = if weight.is_finite() {
            weight.max(0.0)
        } else {
            0.0
        };
        if w == 0.0 {
            return;
        }

        let c = class_val as usize;
        let est = self.attribute_value_distribution_per_class[c]
            .get_or_insert_with(GaussianEstimator::new);

        let range = self.range_observed_per_class[c].get_or_insert((att_val, att_val));
        range.0 = range.0.min(att_val);
        range.1 = range.1.max(att_val);

        est.add_observation(att_val, w);
    }

    fn probability_of_attribute_value_given_class(
        &self,
        att_val: f64,
        class_val: bool,
    ) -> Option<f64> {
        if att_val.is_nan() {
            return None;
        }
        self.attribute_value_distribution_per_class[class_val as usize]
            .as_ref()
            .map(|est| est.probability_density(att_val))
    }
}
