/// The outcome of a `Trainer::train` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainReport {
    errors: Vec<f32>,
    converged: bool,
}

impl TrainReport {
    pub(super) fn new(errors: Vec<f32>, converged: bool) -> Self {
        Self { errors, converged }
    }

    /// Returns the amount of epochs that were run.
    pub fn epochs(&self) -> usize {
        self.errors.len()
    }

    /// Returns the error of every epoch, in order.
    pub fn errors(&self) -> &[f32] {
        &self.errors
    }

    /// Returns the error of the last epoch, `None` if no epoch was run.
    pub fn last_error(&self) -> Option<f32> {
        self.errors.last().copied()
    }

    /// Whether the error reached the target before running out of epochs.
    pub fn converged(&self) -> bool {
        self.converged
    }
}
