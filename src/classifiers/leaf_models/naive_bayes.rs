use crate::classifiers::attribute_class_observers::{
    AttributeClassObserver, GaussianNumericAttributeClassObserver,
};
use crate::classifiers::{Classifier, ClassifierError};
use crate::core::instances::{Instance, Instances, LabelCounts};
use serde::{Deserialize, Serialize};

/// Gaussian naive Bayes over numeric features.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayes {
    observed_class_distribution: LabelCounts,
    attribute_observers: Vec<GaussianNumericAttributeClassObserver>,
}

impl NaiveBayes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observed_class_distribution(&self) -> LabelCounts {
        self.observed_class_distribution
    }

    fn log_joint(&self, instance: &dyn Instance, class: bool) -> Result<f64, ClassifierError> {
        let prior = if class {
            self.observed_class_distribution.positive
        } else {
            self.observed_class_distribution.negative
        };
        let mut log_p = (prior / self.observed_class_distribution.total()).ln();
        for (index, observer) in self.attribute_observers.iter().enumerate() {
            let value = instance
                .value_at_index(index)
                .ok_or(ClassifierError::FeatureOutOfRange {
                    index,
                    dimension: instance.dimension(),
                })?;
            if let Some(density) = observer.probability_of_attribute_value_given_class(value, class)
            {
                log_p += density.max(f64::MIN_POSITIVE).ln();
            }
        }
        Ok(log_p)
    }
}

impl Classifier for NaiveBayes {
    fn train(&mut self, instances: &Instances) -> Result<(), ClassifierError> {
        let mut distribution = LabelCounts::default();
        let mut observers =
            vec![GaussianNumericAttributeClassObserver::new(); instances.dimension()];

        for instance in instances.iter() {
            let class = instance.class().ok_or(ClassifierError::MissingLabel)?;
            distribution.add_class(class, 1.0);
            for (index, observer) in observers.iter_mut().enumerate() {
                if let Some(value) = instance.value_at_index(index) {
                    observer.observe_attribute_class(value, class, 1.0);
                }
            }
        }

        self.observed_class_distribution = distribution;
        self.attribute_observers = observers;
        Ok(())
    }

    fn predict(&self, instance: &dyn Instance) -> Result<f64, ClassifierError> {
        let counts = self.observed_class_distribution;
        if counts.is_empty() {
            return Ok(0.5);
        }
        if counts.is_pure() {
            return Ok(if counts.positive > 0.0 { 1.0 } else { 0.0 });
        }
        if instance.dimension() != self.attribute_observers.len() {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.attribute_observers.len(),
                found: instance.dimension(),
            });
        }

        let log_neg = self.log_joint(instance, false)?;
        let log_pos = self.log_joint(instance, true)?;
        // logistic of the log-odds keeps the ratio stable for tiny densities
        Ok(1.0 / (1.0 + (log_neg - log_pos).exp()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instances::DenseInstance;

    fn two_clusters() -> Instances {
        let mut rows = Vec::new();
        for (v, w) in [(0.8, 5.0), (1.0, 5.2), (1.1, 4.9), (1.3, 5.1)] {
            rows.push(DenseInstance::labeled(vec![v, w], 0.0));
        }
        for (v, w) in [(4.9, 5.1), (5.0, 4.9), (5.2, 5.0), (5.4, 5.2)] {
            rows.push(DenseInstance::labeled(vec![v, w], 1.0));
        }
        Instances::from_instances(2, rows).unwrap()
    }

    #[test]
    fn separates_gaussian_clusters() {
        let mut nb = NaiveBayes::new();
        nb.train(&two_clusters()).unwrap();
        let low = nb.predict(&DenseInstance::unlabeled(vec![1.0, 5.0])).unwrap();
        let high = nb.predict(&DenseInstance::unlabeled(vec![5.1, 5.0])).unwrap();
        assert!(low < 0.1, "low={low}");
        assert!(high > 0.9, "high={high}");
    }

    #[test]
    fn untrained_or_empty_predicts_half() {
        let nb = NaiveBayes::new();
        assert_eq!(nb.predict(&DenseInstance::unlabeled(vec![1.0])).unwrap(), 0.5);
    }

    #[test]
    fn single_class_training_is_certain() {
        let instances = Instances::from_instances(
            1,
            [1.0, 2.0].map(|v| DenseInstance::labeled(vec![v], 1.0)),
        )
        .unwrap();
        let mut nb = NaiveBayes::new();
        nb.train(&instances).unwrap();
        assert_eq!(nb.predict(&DenseInstance::unlabeled(vec![-4.0])).unwrap(), 1.0);
    }

    #[test]
    fn wrong_dimension_fails_fast() {
        let mut nb = NaiveBayes::new();
        nb.train(&two_clusters()).unwrap();
        assert!(matches!(
            nb.predict(&DenseInstance::unlabeled(vec![1.0])),
            Err(ClassifierError::DimensionMismatch { .. })
        ));
    }
}
