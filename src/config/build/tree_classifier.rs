use crate::classifiers::decision_tree::pruners::{PessimisticErrorPruner, RedundantSplitPruner};
use crate::classifiers::decision_tree::split_criteria::{
    AccuracySplitCriterion, GiniSplitCriterion, HellingerSplitCriterion, InfoGainSplitCriterion,
    SplitCriterion,
};
use crate::classifiers::decision_tree::splitters::{
    MidpointSplitter, ObservedValueSplitter, Splitter,
};
use crate::classifiers::decision_tree::{
    BootstrapPreProcessor, RandomSubspaceProjectionFactory, SubsamplePreProcessor,
};
use crate::classifiers::{LeafModel, LeafModelFactory, TreeClassifier};
use crate::config::build::BuildError;
use crate::config::choices::{
    LeafModelChoice, PreProcessorChoice, PrunerChoice, SplitCriterionChoice, SplitterChoice,
    TreeClassifierParams,
};

impl From<SplitCriterionChoice> for Box<dyn SplitCriterion> {
    fn from(choice: SplitCriterionChoice) -> Self {
        match choice {
            SplitCriterionChoice::InfoGain(_) => Box::new(InfoGainSplitCriterion::new()),
            SplitCriterionChoice::Gini(_) => Box::new(GiniSplitCriterion::new()),
            SplitCriterionChoice::Hellinger(_) => Box::new(HellingerSplitCriterion::new()),
            SplitCriterionChoice::Accuracy(_) => Box::new(AccuracySplitCriterion::new()),
        }
    }
}

impl From<SplitterChoice> for Box<dyn Splitter> {
    fn from(choice: SplitterChoice) -> Self {
        match choice {
            SplitterChoice::Midpoint(_) => Box::new(MidpointSplitter::new()),
            SplitterChoice::ObservedValue(_) => Box::new(ObservedValueSplitter::new()),
        }
    }
}

impl From<LeafModelChoice> for LeafModelFactory {
    fn from(choice: LeafModelChoice) -> Self {
        match choice {
            LeafModelChoice::MajorityClass(_) => LeafModelFactory::MajorityClass,
            LeafModelChoice::NaiveBayes(_) => LeafModelFactory::NaiveBayes,
        }
    }
}

/// Every option is validated here, before any training happens.
impl TryFrom<TreeClassifierParams> for TreeClassifier<LeafModel> {
    type Error = BuildError;

    fn try_from(params: TreeClassifierParams) -> Result<Self, Self::Error> {
        let mut classifier = TreeClassifier::new(LeafModelFactory::from(params.leaf_model))
            .with_criterion(params.split_criterion.into())
            .with_splitter(params.splitter.into());

        classifier = match params.pruner {
            PrunerChoice::None(_) => classifier,
            PrunerChoice::RedundantSplit(_) => {
                classifier.with_pruner(Box::new(RedundantSplitPruner::new()))
            }
            PrunerChoice::PessimisticError(p) => {
                classifier.with_pruner(Box::new(PessimisticErrorPruner::new(p.penalty)?))
            }
        };

        classifier = match params.pre_processor {
            PreProcessorChoice::None(_) => classifier,
            PreProcessorChoice::Bootstrap(p) => {
                classifier.with_pre_processor(Box::new(BootstrapPreProcessor::new(p.seed)))
            }
            PreProcessorChoice::Subsample(p) => classifier
                .with_pre_processor(Box::new(SubsamplePreProcessor::new(p.ratio, p.seed)?)),
        };

        if let Some(seed) = params.projection_seed {
            classifier =
                classifier.with_projection(Box::new(RandomSubspaceProjectionFactory::new(seed)));
        }

        classifier.set_max_depth(params.max_depth);
        classifier.set_min_examples(params.min_examples);
        classifier.set_min_entropy(params.min_entropy)?;
        classifier.set_pre_pruning_attempts(params.pre_pruning_attempts);
        classifier.set_projection_ratio(params.projection_ratio)?;
        Ok(classifier)
    }
}
