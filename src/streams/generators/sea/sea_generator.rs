use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::classifiers::ClassifierError;
use crate::core::instances::{DenseInstance, Instance};
use crate::streams::Stream;
use crate::streams::generators::sea::SeaFunction;

const DIMENSION: usize = 3;

/// SEA concepts generator: three uniform features in `[0, 10)`, the third
/// irrelevant, and a binary label from [`SeaFunction`] with optional
/// class balancing and label noise.
#[derive(Debug)]
pub struct SeaGenerator {
    seed: u64,
    rng: StdRng,
    threshold: f64,
    balance_classes: bool,
    next_class_should_be_zero: bool,
    noise_percentage: u32,
    max_instances: Option<usize>,
    produced: usize,
}

impl SeaGenerator {
    pub fn new(
        function: SeaFunction,
        balance: bool,
        noise_percentage: u32,
        max_instances: Option<usize>,
        seed: u64,
    ) -> Result<Self, ClassifierError> {
        Self::with_threshold(
            function.threshold(),
            balance,
            noise_percentage,
            max_instances,
            seed,
        )
    }

    pub fn with_threshold(
        threshold: f64,
        balance: bool,
        noise_percentage: u32,
        max_instances: Option<usize>,
        seed: u64,
    ) -> Result<Self, ClassifierError> {
        if !(0.0..=20.0).contains(&threshold) {
            return Err(ClassifierError::InvalidParameter(format!(
                "SEA threshold must be in [0, 20], got {threshold}"
            )));
        }
        if noise_percentage > 100 {
            return Err(ClassifierError::InvalidParameter(format!(
                "noise percentage must be in [0, 100], got {noise_percentage}"
            )));
        }

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            threshold,
            balance_classes: balance,
            next_class_should_be_zero: false,
            noise_percentage,
            max_instances,
            produced: 0,
        })
    }

    #[inline]
    fn gen_attr(&mut self) -> f64 {
        self.rng.random_range(0.0..10.0)
    }

    #[inline]
    fn determine_class(&self, a1: f64, a2: f64) -> bool {
        a1 + a2 > self.threshold
    }

    #[inline]
    fn maybe_flip_with_noise(&mut self, class: bool) -> bool {
        let roll: u32 = self.rng.random_range(1..=100);
        if roll <= self.noise_percentage {
            !class
        } else {
            class
        }
    }
}

impl Stream for SeaGenerator {
    fn dimension(&self) -> usize {
        DIMENSION
    }

    fn has_more_instances(&self) -> bool {
        self.max_instances.is_none_or(|max| self.produced < max)
    }

    fn next_instance(&mut self) -> Option<Box<dyn Instance>> {
        if !self.has_more_instances() {
            return None;
        }

        let (values, class) = loop {
            let values = [self.gen_attr(), self.gen_attr(), self.gen_attr()];
            let class = self.determine_class(values[0], values[1]);

            if !self.balance_classes {
                break (values, class);
            }
            if self.next_class_should_be_zero != class {
                self.next_class_should_be_zero = !self.next_class_should_be_zero;
                break (values, class);
            }
        };

        let class = self.maybe_flip_with_noise(class);
        self.produced += 1;
        Some(Box::new(DenseInstance::labeled(
            values.to_vec(),
            if class { 1.0 } else { 0.0 },
        )))
    }

    fn restart(&mut self) -> Result<(), ClassifierError> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        self.next_class_should_be_zero = false;
        Ok(())
    }
}
