use crate::classifiers::{Classifier, MajorityClass, NaiveBayes, TreeClassifier};
use crate::config::build::BuildError;
use crate::config::choices::LearnerChoice;

pub fn build_learner(choice: LearnerChoice) -> Result<Box<dyn Classifier>, BuildError> {
    match choice {
        LearnerChoice::TreeClassifier(params) => Ok(Box::new(TreeClassifier::try_from(params)?)),
        LearnerChoice::NaiveBayes(_) => Ok(Box::new(NaiveBayes::new())),
        LearnerChoice::MajorityClass(_) => Ok(Box::new(MajorityClass::new())),
    }
}
