mod pessimistic_error_pruner;
pub mod pruner;
mod redundant_split_pruner;

pub use pessimistic_error_pruner::PessimisticErrorPruner;
pub use pruner::Pruner;
pub use redundant_split_pruner::RedundantSplitPruner;
