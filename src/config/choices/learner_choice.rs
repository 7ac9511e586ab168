use crate::config::choices::TreeClassifierParams;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Empty parameter object so every variant still carries a "params" key.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct NoParams {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(LearnerKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum LearnerChoice {
    #[strum_discriminants(strum(
        message = "Decision Tree Classifier",
        detailed_message = "Batch recursive-partitioning tree with pluggable strategies."
    ))]
    TreeClassifier(TreeClassifierParams),
    #[strum_discriminants(strum(
        message = "Naive Bayes Classifier",
        detailed_message = "Gaussian naive Bayes assuming feature independence."
    ))]
    NaiveBayes(NoParams),
    #[strum_discriminants(strum(
        message = "Majority Class Classifier",
        detailed_message = "Predicts the mean training label."
    ))]
    MajorityClass(NoParams),
}

impl LearnerChoice {
    pub fn schema() -> Schema {
        schema_for!(LearnerChoice)
    }

    /// The choice of `kind` with all parameters at their defaults.
    pub fn default_for(kind: LearnerKind) -> Self {
        match kind {
            LearnerKind::TreeClassifier => {
                LearnerChoice::TreeClassifier(TreeClassifierParams::default())
            }
            LearnerKind::NaiveBayes => LearnerChoice::NaiveBayes(NoParams::default()),
            LearnerKind::MajorityClass => LearnerChoice::MajorityClass(NoParams::default()),
        }
    }

    pub fn kind(&self) -> LearnerKind {
        LearnerKind::from(self)
    }
}
