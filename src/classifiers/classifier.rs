use crate::classifiers::ClassifierError;
use crate::core::instances::{Instance, Instances};

/// Batch binary classifier producing the probability of the positive class.
pub trait Classifier {
    /// Trains from scratch on `instances`, discarding any previous state.
    fn train(&mut self, instances: &Instances) -> Result<(), ClassifierError>;

    /// Probability in `[0, 1]` that `instance` belongs to the positive class.
    fn predict(&self, instance: &dyn Instance) -> Result<f64, ClassifierError>;
}

/// Creates fresh, untrained classifiers, e.g. one per tree leaf.
pub trait ClassifierFactory {
    type Model: Classifier;

    fn new_classifier(&self) -> Self::Model;
}

impl<M, F> ClassifierFactory for F
where
    M: Classifier,
    F: Fn() -> M,
{
    type Model = M;

    fn new_classifier(&self) -> M {
        self()
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn train(&mut self, instances: &Instances) -> Result<(), ClassifierError> {
        (**self).train(instances)
    }

    fn predict(&self, instance: &dyn Instance) -> Result<f64, ClassifierError> {
        (**self).predict(instance)
    }
}
