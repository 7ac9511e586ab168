use crate::classifiers::ClassifierError;
use crate::core::instances::Instance;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    LessOrEqual,
    GreaterThan,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::LessOrEqual => Direction::GreaterThan,
            Direction::GreaterThan => Direction::LessOrEqual,
        }
    }
}

/// Binary test on a single feature.
///
/// For a given `(feature, threshold)` exactly one of the two directions is
/// satisfied by any instance. NaN feature values route to `LessOrEqual`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SplitCondition {
    feature: usize,
    threshold: f64,
    direction: Direction,
}

impl SplitCondition {
    pub fn new(feature: usize, threshold: f64, direction: Direction) -> Self {
        Self {
            feature,
            threshold,
            direction,
        }
    }

    pub fn greater_than(feature: usize, threshold: f64) -> Self {
        Self::new(feature, threshold, Direction::GreaterThan)
    }

    pub fn less_or_equal(feature: usize, threshold: f64) -> Self {
        Self::new(feature, threshold, Direction::LessOrEqual)
    }

    pub fn feature(&self) -> usize {
        self.feature
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn complement(&self) -> Self {
        Self::new(self.feature, self.threshold, self.direction.opposite())
    }

    #[inline]
    pub fn is_satisfied_by_value(&self, value: f64) -> bool {
        let above = value > self.threshold;
        match self.direction {
            Direction::GreaterThan => above,
            Direction::LessOrEqual => !above,
        }
    }

    pub fn is_satisfied(&self, instance: &dyn Instance) -> Result<bool, ClassifierError> {
        let value =
            instance
                .value_at_index(self.feature)
                .ok_or(ClassifierError::FeatureOutOfRange {
                    index: self.feature,
                    dimension: instance.dimension(),
                })?;
        Ok(self.is_satisfied_by_value(value))
    }
}

impl PartialEq for SplitCondition {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SplitCondition {}

impl PartialOrd for SplitCondition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SplitCondition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.feature
            .cmp(&other.feature)
            .then_with(|| self.threshold.total_cmp(&other.threshold))
            .then_with(|| self.direction.cmp(&other.direction))
    }
}

impl std::fmt::Display for SplitCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self.direction {
            Direction::GreaterThan => ">",
            Direction::LessOrEqual => "<=",
        };
        write!(f, "x[{}] {} {}", self.feature, op, self.threshold)
    }
}
