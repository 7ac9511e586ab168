mod datasets;

pub use datasets::{constant_label, separable_on_first_feature, threshold_dataset, xor};
