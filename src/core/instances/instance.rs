use crate::classifiers::ClassifierError;

/// A fixed-dimension feature vector with an optional binary label.
///
/// Labels are probability valued in `[0, 1]`; the hard class of an instance
/// is `label >= 0.5`.
pub trait Instance {
    fn dimension(&self) -> usize;

    /// Value of feature `index`, or `None` when `index >= dimension()`.
    fn value_at_index(&self, index: usize) -> Option<f64>;

    fn set_value_at_index(&mut self, index: usize, new_value: f64) -> Result<(), ClassifierError>;

    fn label(&self) -> Option<f64>;

    fn set_label(&mut self, new_value: f64) -> Result<(), ClassifierError>;

    fn is_label_missing(&self) -> bool {
        self.label().is_none()
    }

    /// Hard class of the label, `None` when the label is missing.
    fn class(&self) -> Option<bool> {
        self.label().map(|label| label >= 0.5)
    }

    fn to_vec(&self) -> Vec<f64>;
}

pub(crate) fn check_label(label: f64) -> Result<f64, ClassifierError> {
    if (0.0..=1.0).contains(&label) {
        Ok(label)
    } else {
        Err(ClassifierError::InvalidLabel(label))
    }
}
