use crate::classifiers::ClassifierError;
use crate::core::instances::instance::{Instance, check_label};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseInstance {
    pub values: Vec<f64>,
    pub label: Option<f64>,
}

impl DenseInstance {
    pub fn new(values: Vec<f64>, label: Option<f64>) -> DenseInstance {
        DenseInstance { values, label }
    }

    pub fn labeled(values: Vec<f64>, label: f64) -> DenseInstance {
        DenseInstance::new(values, Some(label))
    }

    pub fn unlabeled(values: Vec<f64>) -> DenseInstance {
        DenseInstance::new(values, None)
    }
}

impl Instance for DenseInstance {
    fn dimension(&self) -> usize {
        self.values.len()
    }

    fn value_at_index(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    fn set_value_at_index(&mut self, index: usize, new_value: f64) -> Result<(), ClassifierError> {
        let dimension = self.values.len();
        match self.values.get_mut(index) {
            Some(value) => {
                *value = new_value;
                Ok(())
            }
            None => Err(ClassifierError::FeatureOutOfRange { index, dimension }),
        }
    }

    fn label(&self) -> Option<f64> {
        self.label
    }

    fn set_label(&mut self, new_value: f64) -> Result<(), ClassifierError> {
        self.label = Some(check_label(new_value)?);
        Ok(())
    }

    fn to_vec(&self) -> Vec<f64> {
        self.values.clone()
    }
}
