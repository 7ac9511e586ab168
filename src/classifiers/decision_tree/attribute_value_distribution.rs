use crate::classifiers::ClassifierError;
use crate::core::instances::{Instances, LabelCounts};

/// A `(feature value, hard label)` pair, the unit counted into a distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeValueLabel {
    pub value: f64,
    pub label: bool,
}

impl AttributeValueLabel {
    pub fn new(value: f64, label: bool) -> Self {
        Self { value, label }
    }
}

/// Compressed `(value, label) -> count` table for one feature at one node.
///
/// Entries are kept sorted by value with one row per distinct value, so a
/// threshold sweep is a single ordered scan. The counts of all rows sum to
/// the number of instances the distribution was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeValueDistribution {
    dimension: usize,
    entries: Vec<(f64, LabelCounts)>,
    priors: LabelCounts,
}

impl AttributeValueDistribution {
    /// Counts feature `dimension` of every instance against its hard label.
    pub fn build(instances: &Instances, dimension: usize) -> Result<Self, ClassifierError> {
        let mut pairs = Vec::with_capacity(instances.len());
        for instance in instances.iter() {
            let value =
                instance
                    .value_at_index(dimension)
                    .ok_or(ClassifierError::FeatureOutOfRange {
                        index: dimension,
                        dimension: instance.dimension(),
                    })?;
            let label = instance.class().ok_or(ClassifierError::MissingLabel)?;
            pairs.push(AttributeValueLabel::new(value, label));
        }
        Ok(Self::from_pairs(dimension, pairs))
    }

    pub fn from_pairs<I>(dimension: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = AttributeValueLabel>,
    {
        let mut pairs: Vec<AttributeValueLabel> = pairs.into_iter().collect();
        pairs.sort_by(|a, b| a.value.total_cmp(&b.value));

        let mut entries: Vec<(f64, LabelCounts)> = Vec::new();
        let mut priors = LabelCounts::default();
        for pair in pairs {
            priors.add_class(pair.label, 1.0);
            match entries.last_mut() {
                Some((value, counts)) if *value == pair.value => {
                    counts.add_class(pair.label, 1.0)
                }
                _ => {
                    let mut counts = LabelCounts::default();
                    counts.add_class(pair.label, 1.0);
                    entries.push((pair.value, counts));
                }
            }
        }

        Self {
            dimension,
            entries,
            priors,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Label marginals over the whole node.
    pub fn priors(&self) -> LabelCounts {
        self.priors
    }

    pub fn total(&self) -> f64 {
        self.priors.total()
    }

    /// One row per distinct value, ascending.
    pub fn entries(&self) -> &[(f64, LabelCounts)] {
        &self.entries
    }

    /// Flat `((value, label), count)` view, skipping zero counts.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeValueLabel, f64)> + '_ {
        self.entries.iter().flat_map(|(value, counts)| {
            [(false, counts.negative), (true, counts.positive)]
                .into_iter()
                .filter(|(_, count)| *count > 0.0)
                .map(move |(label, count)| (AttributeValueLabel::new(*value, label), count))
        })
    }

    /// Label counts on each side of `threshold`: `[<= threshold, > threshold]`.
    pub fn partition(&self, threshold: f64) -> [LabelCounts; 2] {
        let mut below = LabelCounts::default();
        for (value, counts) in &self.entries {
            if *value > threshold {
                break;
            }
            below += *counts;
        }
        [below, self.priors - below]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instances::DenseInstance;

    fn instances() -> Instances {
        Instances::from_instances(
            2,
            [
                (vec![3.0, 0.0], 1.0),
                (vec![1.0, 0.0], 0.0),
                (vec![3.0, 1.0], 0.0),
                (vec![2.0, 1.0], 1.0),
                (vec![1.0, 1.0], 0.0),
            ]
            .map(|(x, y)| DenseInstance::labeled(x, y)),
        )
        .unwrap()
    }

    #[test]
    fn compresses_and_sorts_by_value() {
        let dist = AttributeValueDistribution::build(&instances(), 0).unwrap();
        let values: Vec<f64> = dist.entries().iter().map(|(v, _)| *v).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
        assert_eq!(dist.entries()[0].1, LabelCounts::new(2.0, 0.0));
        assert_eq!(dist.entries()[2].1, LabelCounts::new(1.0, 1.0));
    }

    #[test]
    fn counts_sum_to_instance_count() {
        let data = instances();
        for dimension in 0..data.dimension() {
            let dist = AttributeValueDistribution::build(&data, dimension).unwrap();
            let sum: f64 = dist.iter().map(|(_, count)| count).sum();
            assert_eq!(sum, data.len() as f64);
            assert_eq!(dist.total(), data.len() as f64);
        }
    }

    #[test]
    fn partition_splits_at_threshold() {
        let dist = AttributeValueDistribution::build(&instances(), 0).unwrap();
        let [below, above] = dist.partition(1.5);
        assert_eq!(below, LabelCounts::new(2.0, 0.0));
        assert_eq!(above, LabelCounts::new(1.0, 2.0));

        let [below, above] = dist.partition(3.0);
        assert_eq!(below.total(), 5.0);
        assert!(above.is_empty());
    }

    #[test]
    fn missing_label_is_rejected() {
        let mut data = instances();
        data.push(DenseInstance::unlabeled(vec![0.0, 0.0])).unwrap();
        assert!(matches!(
            AttributeValueDistribution::build(&data, 1),
            Err(ClassifierError::MissingLabel)
        ));
    }
}
