use crate::classifiers::ClassifierError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Classifier(ClassifierError),
}

impl From<ClassifierError> for BuildError {
    fn from(error: ClassifierError) -> Self {
        match error {
            ClassifierError::InvalidParameter(message) => BuildError::InvalidParameter(message),
            other => BuildError::Classifier(other),
        }
    }
}
