use crate::classifiers::ClassifierError;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Candidate features examined at one node.
pub trait Projection {
    fn candidate_features(&self) -> &[usize];

    fn output_dimension(&self) -> usize {
        self.candidate_features().len()
    }
}

pub trait ProjectionFactory {
    /// Restores the initial state; called at the start of every build.
    fn reset(&mut self) {}

    /// Builds a projection keeping `ceil(percentage * input_dimension)`
    /// features (at least one when `input_dimension > 0`).
    fn build_projection(
        &mut self,
        input_dimension: usize,
        percentage: f64,
    ) -> Result<Box<dyn Projection>, ClassifierError>;
}

/// Sorted subset of the input features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSubset {
    features: Vec<usize>,
}

impl FeatureSubset {
    pub fn new(mut features: Vec<usize>) -> Self {
        features.sort_unstable();
        features.dedup();
        Self { features }
    }

    pub fn all(input_dimension: usize) -> Self {
        Self {
            features: (0..input_dimension).collect(),
        }
    }
}

impl Projection for FeatureSubset {
    fn candidate_features(&self) -> &[usize] {
        &self.features
    }
}

pub fn projected_dimension(
    input_dimension: usize,
    percentage: f64,
) -> Result<usize, ClassifierError> {
    if !(percentage > 0.0 && percentage <= 1.0) {
        return Err(ClassifierError::InvalidParameter(format!(
            "projection percentage must be in (0, 1], got {percentage}"
        )));
    }
    if input_dimension == 0 {
        return Ok(0);
    }
    let reduced = (input_dimension as f64 * percentage).ceil() as usize;
    Ok(reduced.clamp(1, input_dimension))
}

/// Keeps the first `ceil(percentage * d)` features.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityProjectionFactory;

impl ProjectionFactory for IdentityProjectionFactory {
    fn build_projection(
        &mut self,
        input_dimension: usize,
        percentage: f64,
    ) -> Result<Box<dyn Projection>, ClassifierError> {
        let reduced = projected_dimension(input_dimension, percentage)?;
        Ok(Box::new(FeatureSubset::all(reduced)))
    }
}

/// Draws a fresh random feature subset at every node (random subspace).
#[derive(Debug, Clone)]
pub struct RandomSubspaceProjectionFactory {
    seed: u64,
    rng: StdRng,
}

impl RandomSubspaceProjectionFactory {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ProjectionFactory for RandomSubspaceProjectionFactory {
    fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    fn build_projection(
        &mut self,
        input_dimension: usize,
        percentage: f64,
    ) -> Result<Box<dyn Projection>, ClassifierError> {
        let reduced = projected_dimension(input_dimension, percentage)?;
        let features = rand::seq::index::sample(&mut self.rng, input_dimension, reduced).into_vec();
        Ok(Box::new(FeatureSubset::new(features)))
    }
}
