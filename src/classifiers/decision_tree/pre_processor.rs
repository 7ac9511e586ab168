use crate::classifiers::ClassifierError;
use crate::core::instances::Instances;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Resamples a node's instances before a retried split search.
pub trait SplitPreProcessor {
    fn preprocess(&mut self, instances: &Instances) -> Instances;

    /// Restores the initial state; called at the start of every build.
    fn reset(&mut self) {}
}

/// Bootstrap sample of the same size, drawn with replacement.
#[derive(Debug, Clone)]
pub struct BootstrapPreProcessor {
    seed: u64,
    rng: StdRng,
}

impl BootstrapPreProcessor {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SplitPreProcessor for BootstrapPreProcessor {
    fn preprocess(&mut self, instances: &Instances) -> Instances {
        instances.bag(&mut self.rng, instances.len())
    }

    fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}

/// Sample of `ceil(ratio * n)` instances without replacement.
#[derive(Debug, Clone)]
pub struct SubsamplePreProcessor {
    ratio: f64,
    seed: u64,
    rng: StdRng,
}

impl SubsamplePreProcessor {
    pub fn new(ratio: f64, seed: u64) -> Result<Self, ClassifierError> {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(ClassifierError::InvalidParameter(format!(
                "subsample ratio must be in (0, 1], got {ratio}"
            )));
        }
        Ok(Self {
            ratio,
            seed,
            rng: StdRng::seed_from_u64(seed),
        })
    }
}

impl SplitPreProcessor for SubsamplePreProcessor {
    fn preprocess(&mut self, instances: &Instances) -> Instances {
        instances.subsample(&mut self.rng, self.ratio)
    }

    fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}
