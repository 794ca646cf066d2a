mod delta_rule;
mod perceptron;
mod supervised;

pub use delta_rule::DeltaRuleLearning;
pub use perceptron::PerceptronLearning;
pub use supervised::{LearningRate, SupervisedLearning};

use crate::{MlErr, Result};

/// The learning rate every rule starts with.
pub const DEFAULT_LEARNING_RATE: f32 = 0.1;

/// Validates a single training sample against a neuron with `inputs` inputs.
///
/// # Arguments
/// * `inputs` - The amount of inputs of the taught neuron.
/// * `sample` - The position of the sample in its batch, for error reporting.
/// * `input` - The input vector.
/// * `output` - The desired output vector, only its first element is ever used.
pub(crate) fn check_sample(
    inputs: usize,
    sample: usize,
    input: &[f32],
    output: &[f32],
) -> Result<()> {
    if input.len() != inputs {
        return Err(MlErr::SizeMismatch {
            a: "input",
            b: "neuron inputs",
            got: input.len(),
            expected: inputs,
        });
    }

    if output.is_empty() {
        return Err(MlErr::EmptyOutput { sample });
    }

    Ok(())
}

/// Validates a whole batch so no sample gets applied when a later one is malformed.
pub(crate) fn check_epoch(inputs: usize, xs: &[Vec<f32>], ys: &[Vec<f32>]) -> Result<()> {
    if xs.len() != ys.len() {
        return Err(MlErr::SizeMismatch {
            a: "inputs",
            b: "outputs",
            got: ys.len(),
            expected: xs.len(),
        });
    }

    xs.iter()
        .zip(ys)
        .enumerate()
        .try_for_each(|(i, (x, y))| check_sample(inputs, i, x, y))
}

pub(crate) fn check_learning_rate(learning_rate: f32) -> Result<()> {
    if !learning_rate.is_finite() || learning_rate < 0. {
        return Err(MlErr::InvalidLearningRate(learning_rate));
    }

    Ok(())
}
