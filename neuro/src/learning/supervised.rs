use super::check_epoch;
use crate::Result;

/// A supervised learning algorithm for a single neuron.
///
/// Training drivers only depend on this trait, never on a concrete rule. Rules don't decide
/// when to stop: that's up to whoever calls `run_epoch` and inspects the returned error.
pub trait SupervisedLearning {
    /// Returns the amount of inputs of the neuron being taught.
    fn inputs(&self) -> usize;

    /// Runs one learning iteration over a single sample.
    ///
    /// # Arguments
    /// * `input` - The input vector, one value per neuron input.
    /// * `output` - The desired output vector, only its first element is used.
    ///
    /// # Returns
    /// The error of the neuron for this sample, or a shape error if the sample is malformed
    /// (in which case the neuron is not modified).
    fn run(&mut self, input: &[f32], output: &[f32]) -> Result<f32>;

    /// Runs one learning epoch: a `run` for every sample, in the given order.
    ///
    /// The whole batch is validated before the first update.
    ///
    /// # Arguments
    /// * `inputs` - The input vectors.
    /// * `outputs` - The desired output vectors, one per input vector.
    ///
    /// # Returns
    /// The sum of the errors of every sample.
    fn run_epoch(&mut self, inputs: &[Vec<f32>], outputs: &[Vec<f32>]) -> Result<f32> {
        check_epoch(self.inputs(), inputs, outputs)?;

        let mut error = 0.;
        for (input, output) in inputs.iter().zip(outputs) {
            error += self.run(input, output)?;
        }

        Ok(error)
    }
}

/// A learning algorithm whose steps are scaled by a learning rate.
pub trait LearningRate {
    fn learning_rate(&self) -> f32;

    /// Sets the learning rate.
    ///
    /// # Returns
    /// An error if `learning_rate` is negative, infinite or Nan.
    fn set_learning_rate(&mut self, learning_rate: f32) -> Result<()>;
}
