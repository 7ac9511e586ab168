use crate::classifiers::ClassifierError;
use crate::core::instances::instance::{Instance, check_label};
use serde::{Deserialize, Serialize};

/// Instance storing only its non-zero features, indices kept sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseInstance {
    dimension: usize,
    indices: Vec<usize>,
    values: Vec<f64>,
    label: Option<f64>,
}

impl SparseInstance {
    pub fn new(
        dimension: usize,
        entries: Vec<(usize, f64)>,
        label: Option<f64>,
    ) -> Result<SparseInstance, ClassifierError> {
        let mut entries = entries;
        entries.sort_by_key(|(index, _)| *index);
        entries.dedup_by_key(|(index, _)| *index);

        if let Some((index, _)) = entries.iter().find(|(index, _)| *index >= dimension) {
            return Err(ClassifierError::FeatureOutOfRange {
                index: *index,
                dimension,
            });
        }
        if let Some(label) = label {
            check_label(label)?;
        }

        let (indices, values) = entries.into_iter().unzip();
        Ok(SparseInstance {
            dimension,
            indices,
            values,
            label,
        })
    }

    pub fn number_of_stored_values(&self) -> usize {
        self.indices.len()
    }
}

impl Instance for SparseInstance {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn value_at_index(&self, index: usize) -> Option<f64> {
        if index >= self.dimension {
            return None;
        }
        match self.indices.binary_search(&index) {
            Ok(pos) => Some(self.values[pos]),
            Err(_) => Some(0.0),
        }
    }

    fn set_value_at_index(&mut self, index: usize, new_value: f64) -> Result<(), ClassifierError> {
        if index >= self.dimension {
            return Err(ClassifierError::FeatureOutOfRange {
                index,
                dimension: self.dimension,
            });
        }
        match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos] = new_value,
            Err(pos) => {
                self.indices.insert(pos, index);
                self.values.insert(pos, new_value);
            }
        }
        Ok(())
    }

    fn label(&self) -> Option<f64> {
        self.label
    }

    fn set_label(&mut self, new_value: f64) -> Result<(), ClassifierError> {
        self.label = Some(check_label(new_value)?);
        Ok(())
    }

    fn to_vec(&self) -> Vec<f64> {
        let mut out = vec![0.0; self.dimension];
        for (index, value) in self.indices.iter().zip(&self.values) {
            out[*index] = *value;
        }
        out
    }
}
