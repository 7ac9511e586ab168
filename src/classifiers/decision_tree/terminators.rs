use crate::core::instances::Instances;

/// Stopping rule evaluated at every node before a split is searched.
pub trait Terminator {
    fn name(&self) -> &'static str;

    fn terminate(&self, instances: &Instances, depth: usize) -> bool;
}

/// Stops on an empty instance set.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyTerminator;

impl Terminator for EmptyTerminator {
    fn name(&self) -> &'static str {
        "empty"
    }

    fn terminate(&self, instances: &Instances, _depth: usize) -> bool {
        instances.is_empty()
    }
}

/// Stops when every instance has the same hard class.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleLabelTerminator;

impl Terminator for SingleLabelTerminator {
    fn name(&self) -> &'static str {
        "single-label"
    }

    fn terminate(&self, instances: &Instances, _depth: usize) -> bool {
        let mut classes = instances.iter().filter_map(|instance| instance.class());
        match classes.next() {
            Some(first) => classes.all(|class| class == first),
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MaxDepthTerminator {
    max_depth: usize,
}

impl MaxDepthTerminator {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Terminator for MaxDepthTerminator {
    fn name(&self) -> &'static str {
        "max-depth"
    }

    fn terminate(&self, _instances: &Instances, depth: usize) -> bool {
        depth >= self.max_depth
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MinExamplesTerminator {
    min_examples: usize,
}

impl MinExamplesTerminator {
    pub fn new(min_examples: usize) -> Self {
        Self { min_examples }
    }
}

impl Terminator for MinExamplesTerminator {
    fn name(&self) -> &'static str {
        "min-examples"
    }

    fn terminate(&self, instances: &Instances, _depth: usize) -> bool {
        instances.len() < self.min_examples
    }
}

/// Stops when the label entropy (bits) falls below the configured minimum.
#[derive(Debug, Clone, Copy)]
pub struct MinEntropyTerminator {
    min_entropy: f64,
}

impl MinEntropyTerminator {
    pub fn new(min_entropy: f64) -> Self {
        Self { min_entropy }
    }
}

impl Terminator for MinEntropyTerminator {
    fn name(&self) -> &'static str {
        "min-entropy"
    }

    fn terminate(&self, instances: &Instances, _depth: usize) -> bool {
        instances.label_entropy() < self.min_entropy
    }
}
