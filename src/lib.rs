pub mod classifiers;
pub mod config;
pub mod core;
pub mod streams;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
