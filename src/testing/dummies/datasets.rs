use crate::core::instances::{DenseInstance, Instances};

fn from_rows(dimension: usize, rows: &[(&[f64], f64)]) -> Instances {
    let mut instances = Instances::new(dimension);
    for (values, label) in rows {
        instances
            .push(DenseInstance::labeled(values.to_vec(), *label))
            .expect("fixture rows match their dimension");
    }
    instances
}

/// `{[0,0]->0, [0,1]->0, [1,0]->1, [1,1]->1}`: split on feature 0 at 0.5.
pub fn separable_on_first_feature() -> Instances {
    from_rows(
        2,
        &[
            (&[0.0, 0.0], 0.0),
            (&[0.0, 1.0], 0.0),
            (&[1.0, 0.0], 1.0),
            (&[1.0, 1.0], 1.0),
        ],
    )
}

/// No single split on either feature has positive information gain.
pub fn xor() -> Instances {
    from_rows(
        2,
        &[
            (&[0.0, 0.0], 0.0),
            (&[0.0, 1.0], 1.0),
            (&[1.0, 0.0], 1.0),
            (&[1.0, 1.0], 0.0),
        ],
    )
}

/// `n` two-feature rows all carrying `label`.
pub fn constant_label(n: usize, label: f64) -> Instances {
    let mut instances = Instances::new(2);
    for i in 0..n {
        instances
            .push(DenseInstance::labeled(vec![i as f64, (n - i) as f64], label))
            .expect("fixture rows match their dimension");
    }
    instances
}

/// `n` evenly spaced points on `[0, 1)` in feature 0, positive above
/// `threshold`; feature 1 cycles through `0, 1, 2` and carries no signal.
pub fn threshold_dataset(n: usize, threshold: f64) -> Instances {
    let mut instances = Instances::new(2);
    for i in 0..n {
        let x = i as f64 / n as f64;
        let y = if x > threshold { 1.0 } else { 0.0 };
        instances
            .push(DenseInstance::labeled(vec![x, (i % 3) as f64], y))
            .expect("fixture rows match their dimension");
    }
    instances
}
