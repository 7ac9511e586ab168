pub mod dense_instance;
pub mod instance;
mod instances;
mod label_counts;
pub mod sparse_instance;

pub use dense_instance::DenseInstance;
pub use instance::Instance;
pub use instances::Instances;
pub use label_counts::LabelCounts;
pub use sparse_instance::SparseInstance;
