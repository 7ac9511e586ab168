use crate::classifiers::ClassifierError;
use crate::core::instances::Instance;

/// Pull-based source of labeled instances of one fixed dimension.
///
/// Implementations may be finite datasets or unbounded generators. Every
/// instance yielded must have [`Stream::dimension`] features.
pub trait Stream {
    /// Number of features of every instance produced.
    fn dimension(&self) -> usize;

    /// Whether the stream *may* produce more instances.
    ///
    /// Finite streams return `false` once exhausted; a subsequent call to
    /// [`Stream::next_instance`] must then return `None`.
    fn has_more_instances(&self) -> bool;

    /// Produces the next instance, or `None` if the stream is exhausted.
    fn next_instance(&mut self) -> Option<Box<dyn Instance>>;

    /// Resets the stream to its initial state. Generators re-seed their RNG
    /// and clear internal counters.
    fn restart(&mut self) -> Result<(), ClassifierError>;
}
