use crate::config::choices::NoParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_projection_ratio() -> f64 {
    1.0
}
fn default_penalty() -> f64 {
    0.5
}
fn default_subsample_ratio() -> f64 {
    0.5
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(SplitCriterionKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum SplitCriterionChoice {
    #[strum_discriminants(strum(
        message = "Information Gain",
        detailed_message = "Reduction of Shannon entropy."
    ))]
    InfoGain(NoParams),
    #[strum_discriminants(strum(message = "Gini", detailed_message = "Reduction of Gini impurity."))]
    Gini(NoParams),
    #[strum_discriminants(strum(
        message = "Hellinger Distance",
        detailed_message = "Skew-insensitive distance between the class-conditional partitions."
    ))]
    Hellinger(NoParams),
    #[strum_discriminants(strum(
        message = "Accuracy",
        detailed_message = "Reduction of majority-vote error rate."
    ))]
    Accuracy(NoParams),
}
impl Default for SplitCriterionChoice {
    fn default() -> Self {
        Self::InfoGain(NoParams::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(SplitterKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum SplitterChoice {
    #[strum_discriminants(strum(
        message = "Midpoint",
        detailed_message = "Threshold halfway between adjacent observed values."
    ))]
    Midpoint(NoParams),
    #[strum_discriminants(strum(
        message = "Observed Value",
        detailed_message = "Threshold at the lower observed value of each boundary."
    ))]
    ObservedValue(NoParams),
}
impl Default for SplitterChoice {
    fn default() -> Self {
        Self::Midpoint(NoParams::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(LeafModelKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum LeafModelChoice {
    #[strum_discriminants(strum(
        message = "Majority Class",
        detailed_message = "Leaves predict their mean training label."
    ))]
    MajorityClass(NoParams),
    #[strum_discriminants(strum(
        message = "Naive Bayes",
        detailed_message = "Leaves hold a Gaussian naive Bayes model."
    ))]
    NaiveBayes(NoParams),
}
impl Default for LeafModelChoice {
    fn default() -> Self {
        Self::MajorityClass(NoParams::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PessimisticErrorParams {
    #[serde(default = "default_penalty")]
    #[schemars(
        title = "Leaf penalty",
        description = "Continuity correction added per leaf.",
        range(min = 0.0),
        default = "default_penalty"
    )]
    pub penalty: f64,
}
impl Default for PessimisticErrorParams {
    fn default() -> Self {
        Self {
            penalty: default_penalty(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(PrunerKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum PrunerChoice {
    #[strum_discriminants(strum(message = "None", detailed_message = "Keep the grown tree."))]
    None(NoParams),
    #[strum_discriminants(strum(
        message = "Redundant Split",
        detailed_message = "Collapse splits whose leaves agree on the majority class."
    ))]
    RedundantSplit(NoParams),
    #[strum_discriminants(strum(
        message = "Pessimistic Error",
        detailed_message = "Collapse subtrees within one standard error of their leaf."
    ))]
    PessimisticError(PessimisticErrorParams),
}
impl Default for PrunerChoice {
    fn default() -> Self {
        Self::None(NoParams::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
pub struct BootstrapParams {
    #[serde(default)]
    #[schemars(title = "Seed", description = "Seed of the resampling RNG.")]
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SubsampleParams {
    #[serde(default = "default_subsample_ratio")]
    #[schemars(
        title = "Ratio",
        description = "Fraction of the node's instances kept (0–1].",
        range(min = 0.0, max = 1.0),
        default = "default_subsample_ratio"
    )]
    pub ratio: f64,

    #[serde(default)]
    #[schemars(title = "Seed", description = "Seed of the resampling RNG.")]
    pub seed: u64,
}
impl Default for SubsampleParams {
    fn default() -> Self {
        Self {
            ratio: default_subsample_ratio(),
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(PreProcessorKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum PreProcessorChoice {
    #[strum_discriminants(strum(message = "None", detailed_message = "No split retries."))]
    None(NoParams),
    #[strum_discriminants(strum(
        message = "Bootstrap",
        detailed_message = "Retry split search on a bootstrap sample."
    ))]
    Bootstrap(BootstrapParams),
    #[strum_discriminants(strum(
        message = "Subsample",
        detailed_message = "Retry split search on a sample without replacement."
    ))]
    Subsample(SubsampleParams),
}
impl Default for PreProcessorChoice {
    fn default() -> Self {
        Self::None(NoParams::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TreeClassifierParams {
    #[serde(default)]
    #[schemars(
        title = "Maximum depth",
        description = "Deepest level a node may be split at; unbounded when absent."
    )]
    pub max_depth: Option<usize>,

    #[serde(default)]
    #[schemars(
        title = "Minimum examples",
        description = "Nodes with fewer instances become leaves (0 disables)."
    )]
    pub min_examples: usize,

    #[serde(default)]
    #[schemars(
        title = "Minimum entropy",
        description = "Nodes with lower label entropy become leaves (0 disables).",
        range(min = 0.0, max = 1.0)
    )]
    pub min_entropy: f64,

    #[serde(default)]
    #[schemars(
        title = "Pre-pruning attempts",
        description = "Resampled split searches tried before a node becomes a leaf."
    )]
    pub pre_pruning_attempts: usize,

    #[serde(default = "default_projection_ratio")]
    #[schemars(
        title = "Projection ratio",
        description = "Fraction of features searched at each node (0–1].",
        range(min = 0.0, max = 1.0),
        default = "default_projection_ratio"
    )]
    pub projection_ratio: f64,

    #[serde(default)]
    #[schemars(
        title = "Projection seed",
        description = "Seed of the random subspace; leading features are kept when absent."
    )]
    pub projection_seed: Option<u64>,

    #[serde(default)]
    #[schemars(skip)]
    pub split_criterion: SplitCriterionChoice,

    #[serde(default)]
    #[schemars(skip)]
    pub splitter: SplitterChoice,

    #[serde(default)]
    #[schemars(skip)]
    pub leaf_model: LeafModelChoice,

    #[serde(default)]
    #[schemars(skip)]
    pub pruner: PrunerChoice,

    #[serde(default)]
    #[schemars(skip)]
    pub pre_processor: PreProcessorChoice,
}
impl Default for TreeClassifierParams {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_examples: 0,
            min_entropy: 0.0,
            pre_pruning_attempts: 0,
            projection_ratio: default_projection_ratio(),
            projection_seed: None,
            split_criterion: SplitCriterionChoice::default(),
            splitter: SplitterChoice::default(),
            leaf_model: LeafModelChoice::default(),
            pruner: PrunerChoice::default(),
            pre_processor: PreProcessorChoice::default(),
        }
    }
}
