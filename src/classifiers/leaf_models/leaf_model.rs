use crate::classifiers::leaf_models::{MajorityClass, NaiveBayes};
use crate::classifiers::{Classifier, ClassifierError, ClassifierFactory};
use crate::core::instances::{Instance, Instances};
use serde::{Deserialize, Serialize};

/// Serializable model embedded in tree leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LeafModel {
    MajorityClass(MajorityClass),
    NaiveBayes(NaiveBayes),
}

impl Classifier for LeafModel {
    fn train(&mut self, instances: &Instances) -> Result<(), ClassifierError> {
        match self {
            LeafModel::MajorityClass(model) => model.train(instances),
            LeafModel::NaiveBayes(model) => model.train(instances),
        }
    }

    fn predict(&self, instance: &dyn Instance) -> Result<f64, ClassifierError> {
        match self {
            LeafModel::MajorityClass(model) => model.predict(instance),
            LeafModel::NaiveBayes(model) => model.predict(instance),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeafModelFactory {
    #[default]
    MajorityClass,
    NaiveBayes,
}

impl ClassifierFactory for LeafModelFactory {
    type Model = LeafModel;

    fn new_classifier(&self) -> LeafModel {
        match self {
            LeafModelFactory::MajorityClass => LeafModel::MajorityClass(MajorityClass::new()),
            LeafModelFactory::NaiveBayes => LeafModel::NaiveBayes(NaiveBayes::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instances::DenseInstance;

    #[test]
    fn factory_builds_requested_kind() {
        assert!(matches!(
            LeafModelFactory::MajorityClass.new_classifier(),
            LeafModel::MajorityClass(_)
        ));
        assert!(matches!(
            LeafModelFactory::NaiveBayes.new_classifier(),
            LeafModel::NaiveBayes(_)
        ));
    }

    #[test]
    fn serializes_with_type_tag() {
        let mut model = LeafModelFactory::MajorityClass.new_classifier();
        let instances =
            Instances::from_instances(1, [DenseInstance::labeled(vec![1.0], 1.0)]).unwrap();
        model.train(&instances).unwrap();

        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["type"], "majority-class");

        let back: LeafModel = serde_json::from_value(json).unwrap();
        assert_eq!(back, model);
    }
}
