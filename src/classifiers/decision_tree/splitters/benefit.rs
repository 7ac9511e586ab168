/// Smallest score treated as a real improvement; guards against splits whose
/// merit is only floating-point noise.
pub const MIN_IMPROVEMENT: f64 = 1e-10;

/// Best split found for one feature: its score and threshold, or no split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Benefit {
    dimension: usize,
    score: f64,
    threshold: Option<f64>,
}

impl Benefit {
    pub fn new(dimension: usize, score: f64, threshold: f64) -> Self {
        Self {
            dimension,
            score,
            threshold: Some(threshold),
        }
    }

    /// No valid split exists for `dimension`.
    pub fn none(dimension: usize) -> Self {
        Self {
            dimension,
            score: f64::NEG_INFINITY,
            threshold: None,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    pub fn is_split(&self) -> bool {
        self.threshold.is_some()
    }

    pub fn is_improvement(&self) -> bool {
        self.is_split() && self.score > MIN_IMPROVEMENT
    }

    /// Strictly better than `other`; equal scores never replace the incumbent.
    pub fn improves_on(&self, other: &Benefit) -> bool {
        self.is_split() && (!other.is_split() || self.score > other.score)
    }
}
