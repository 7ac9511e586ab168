use serde::{Deserialize, Serialize};

/// SEA concept: an instance is negative iff `x0 + x1 <= threshold`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeaFunction {
    #[default]
    F1 = 1,
    F2 = 2,
    F3 = 3,
    F4 = 4,
}

impl SeaFunction {
    pub fn threshold(self) -> f64 {
        match self {
            SeaFunction::F1 => 8.0,
            SeaFunction::F2 => 9.0,
            SeaFunction::F3 => 7.0,
            SeaFunction::F4 => 9.5,
        }
    }
}
