mod accuracy_split_criterion;
mod gini_split_criterion;
mod hellinger_split_criterion;
mod info_gain_split_criterion;
pub mod split_criterion;

pub use accuracy_split_criterion::AccuracySplitCriterion;
pub use gini_split_criterion::GiniSplitCriterion;
pub use hellinger_split_criterion::HellingerSplitCriterion;
pub use info_gain_split_criterion::InfoGainSplitCriterion;
pub use split_criterion::SplitCriterion;
