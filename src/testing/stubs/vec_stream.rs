use crate::classifiers::ClassifierError;
use crate::core::instances::{DenseInstance, Instance};
use crate::streams::Stream;

/// Finite one-feature stream; each instance's feature equals its label.
pub struct VecStream {
    pub labels: Vec<usize>,
    idx: usize,
}

impl VecStream {
    pub fn new(labels: Vec<usize>) -> Self {
        Self { labels, idx: 0 }
    }
}

impl Stream for VecStream {
    fn dimension(&self) -> usize {
        1
    }

    fn has_more_instances(&self) -> bool {
        self.idx < self.labels.len()
    }

    fn next_instance(&mut self) -> Option<Box<dyn Instance>> {
        if !self.has_more_instances() {
            return None;
        }

        let y = self.labels[self.idx] as f64;
        self.idx += 1;
        Some(Box::new(DenseInstance::labeled(vec![y], y)))
    }

    fn restart(&mut self) -> Result<(), ClassifierError> {
        self.idx = 0;
        Ok(())
    }
}
