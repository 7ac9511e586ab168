use serde::{Deserialize, Serialize};

const NORMAL_CONSTANT: f64 = 2.506_628_274_631_000_2; // sqrt(2 * pi)

/// Incremental weighted mean / variance (Welford) with a normal density.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GaussianEstimator {
    weight_sum: f64,
    mean: f64,
    variance_sum: f64,
}

impl GaussianEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observation(&mut self, value: f64, weight: f64) {
        if value.is_nan() || weight <= 0.0 || !weight.is_finite() {
            return;
        }
        if self.weight_sum > 0.0 {
            self.weight_sum += weight;
            let last_mean = self.mean;
            self.mean += weight * (value - last_mean) / self.weight_sum;
            self.variance_sum += weight * (value - last_mean) * (value - self.mean);
        } else {
            self.mean = value;
            self.weight_sum = weight;
        }
    }

    pub fn total_weight_observed(&self) -> f64 {
        self.weight_sum
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn variance(&self) -> f64 {
        if self.weight_sum > 1.0 {
            self.variance_sum / (self.weight_sum - 1.0)
        } else {
            0.0
        }
    }

    /// Normal density at `value`; a degenerate (zero variance) estimator puts
    /// all mass on its mean.
    pub fn probability_density(&self, value: f64) -> f64 {
        if self.weight_sum <= 0.0 {
            return 0.0;
        }
        let std_dev = self.std_dev();
        if std_dev > 0.0 {
            let diff = value - self.mean;
            (1.0 / (NORMAL_CONSTANT * std_dev)) * (-(diff * diff) / (2.0 * std_dev * std_dev)).exp()
        } else if value == self.mean {
            1.0
        } else {
            0.0
        }
    }
}
