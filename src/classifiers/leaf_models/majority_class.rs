use crate::classifiers::{Classifier, ClassifierError};
use crate::core::instances::{Instance, Instances};
use serde::{Deserialize, Serialize};

/// Predicts the mean label of its training instances; 0.5 when trained on
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MajorityClass {
    label_sum: f64,
    count: usize,
}

impl MajorityClass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn probability(&self) -> f64 {
        if self.count == 0 {
            0.5
        } else {
            self.label_sum / self.count as f64
        }
    }
}

impl Classifier for MajorityClass {
    fn train(&mut self, instances: &Instances) -> Result<(), ClassifierError> {
        let mut label_sum = 0.0;
        for instance in instances.iter() {
            label_sum += instance.label().ok_or(ClassifierError::MissingLabel)?;
        }
        self.label_sum = label_sum;
        self.count = instances.len();
        Ok(())
    }

    fn predict(&self, _instance: &dyn Instance) -> Result<f64, ClassifierError> {
        Ok(self.probability())
    }
}
