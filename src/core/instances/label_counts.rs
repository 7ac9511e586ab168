use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};

/// Negative / positive class mass of a group of instances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelCounts {
    pub negative: f64,
    pub positive: f64,
}

impl LabelCounts {
    pub fn new(negative: f64, positive: f64) -> Self {
        Self { negative, positive }
    }

    #[inline]
    pub fn add_class(&mut self, class: bool, weight: f64) {
        if class {
            self.positive += weight;
        } else {
            self.negative += weight;
        }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.negative + self.positive
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total() <= 0.0
    }

    pub fn is_pure(&self) -> bool {
        self.negative <= 0.0 || self.positive <= 0.0
    }

    /// Fraction of positive mass, `None` for empty counts.
    pub fn positive_fraction(&self) -> Option<f64> {
        let total = self.total();
        (total > 0.0).then(|| self.positive / total)
    }

    /// Majority hard class; ties go to the positive class.
    pub fn majority(&self) -> bool {
        self.positive >= self.negative
    }

    /// Mass of the minority class, i.e. training errors of a majority vote.
    pub fn minority(&self) -> f64 {
        self.negative.min(self.positive)
    }

    /// Shannon entropy in bits; 0 for empty counts.
    pub fn entropy(&self) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            return 0.0;
        }
        [self.negative, self.positive]
            .into_iter()
            .filter(|count| *count > 0.0)
            .map(|count| {
                let p = count / total;
                -p * p.log2()
            })
            .sum()
    }
}

impl Add for LabelCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.negative + other.negative, self.positive + other.positive)
    }
}

impl AddAssign for LabelCounts {
    fn add_assign(&mut self, other: Self) {
        self.negative += other.negative;
        self.positive += other.positive;
    }
}

impl Sub for LabelCounts {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.negative - other.negative, self.positive - other.positive)
    }
}
