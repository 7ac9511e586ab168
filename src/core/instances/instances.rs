use crate::classifiers::ClassifierError;
use crate::core::instances::LabelCounts;
use crate::core::instances::instance::{Instance, check_label};
use crate::streams::Stream;
use rand::Rng;
use std::sync::Arc;

/// Sized collection of instances sharing one dimension.
///
/// Instances are shared behind `Arc`, so partitioning and resampling only
/// copy pointers. Every instance pushed is checked for dimension, label range
/// and missing (NaN) feature values.
#[derive(Clone)]
pub struct Instances {
    dimension: usize,
    instances: Vec<Arc<dyn Instance>>,
}

impl Instances {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            instances: Vec::new(),
        }
    }

    pub fn from_instances<I, T>(dimension: usize, instances: I) -> Result<Self, ClassifierError>
    where
        I: IntoIterator<Item = T>,
        T: Instance + 'static,
    {
        let mut out = Self::new(dimension);
        for instance in instances {
            out.push(instance)?;
        }
        Ok(out)
    }

    /// Drains up to `max_instances` instances from `stream`.
    pub fn from_stream(
        stream: &mut dyn Stream,
        max_instances: usize,
    ) -> Result<Self, ClassifierError> {
        let mut out = Self::new(stream.dimension());
        while out.len() < max_instances && stream.has_more_instances() {
            let Some(instance) = stream.next_instance() else {
                break;
            };
            out.push_shared(Arc::from(instance))?;
        }
        Ok(out)
    }

    pub fn push<T: Instance + 'static>(&mut self, instance: T) -> Result<(), ClassifierError> {
        self.push_shared(Arc::new(instance))
    }

    pub fn push_shared(&mut self, instance: Arc<dyn Instance>) -> Result<(), ClassifierError> {
        if instance.dimension() != self.dimension {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.dimension,
                found: instance.dimension(),
            });
        }
        if let Some(label) = instance.label() {
            check_label(label)?;
        }
        for index in 0..self.dimension {
            if instance.value_at_index(index).is_none_or(f64::is_nan) {
                return Err(ClassifierError::MissingValue { index });
            }
        }
        self.instances.push(instance);
        Ok(())
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&dyn Instance> {
        self.instances.get(index).map(|instance| instance.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Instance> + '_ {
        self.instances.iter().map(|instance| instance.as_ref())
    }

    /// Fails with `MissingLabel` if any instance is unlabeled.
    pub fn ensure_labeled(&self) -> Result<(), ClassifierError> {
        if self.iter().any(|instance| instance.is_label_missing()) {
            return Err(ClassifierError::MissingLabel);
        }
        Ok(())
    }

    /// Hard-class counts over the labeled instances.
    pub fn label_counts(&self) -> LabelCounts {
        let mut counts = LabelCounts::default();
        for class in self.iter().filter_map(|instance| instance.class()) {
            counts.add_class(class, 1.0);
        }
        counts
    }

    pub fn label_entropy(&self) -> f64 {
        self.label_counts().entropy()
    }

    /// New collection holding the instances at `indices`, in that order.
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            dimension: self.dimension,
            instances: indices
                .iter()
                .filter_map(|index| self.instances.get(*index).cloned())
                .collect(),
        }
    }

    /// Bootstrap sample of `size` instances drawn with replacement.
    pub fn bag<R: Rng + ?Sized>(&self, rng: &mut R, size: usize) -> Self {
        if self.is_empty() {
            return Self::new(self.dimension);
        }
        let indices: Vec<usize> = (0..size)
            .map(|_| rng.random_range(0..self.len()))
            .collect();
        self.select(&indices)
    }

    /// Sample without replacement of `ceil(ratio * len)` instances, kept in
    /// their original order.
    pub fn subsample<R: Rng + ?Sized>(&self, rng: &mut R, ratio: f64) -> Self {
        let amount = ((self.len() as f64 * ratio).ceil() as usize).min(self.len());
        let mut indices = rand::seq::index::sample(rng, self.len(), amount).into_vec();
        indices.sort_unstable();
        self.select(&indices)
    }

    /// Splits the collection into `(accepted, rejected)` by `predicate`.
    pub fn partition<F>(&self, mut predicate: F) -> Result<(Self, Self), ClassifierError>
    where
        F: FnMut(&dyn Instance) -> Result<bool, ClassifierError>,
    {
        let mut accepted = Self::new(self.dimension);
        let mut rejected = Self::new(self.dimension);
        for instance in &self.instances {
            if predicate(instance.as_ref())? {
                accepted.instances.push(Arc::clone(instance));
            } else {
                rejected.instances.push(Arc::clone(instance));
            }
        }
        Ok((accepted, rejected))
    }
}

impl std::fmt::Debug for Instances {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instances")
            .field("dimension", &self.dimension)
            .field("len", &self.instances.len())
            .finish()
    }
}
