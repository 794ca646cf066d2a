use log::trace;

use super::{
    DEFAULT_LEARNING_RATE, LearningRate, SupervisedLearning, check_learning_rate, check_sample,
};
use crate::{Result, neuron::Neuron};

/// The perceptron learning rule.
///
/// Teaches a single neuron, usually one with a threshold activation, by moving every weight
/// `learning_rate * error * input` and the threshold `learning_rate * error` after each
/// sample it gets wrong.
#[derive(Debug)]
pub struct PerceptronLearning<'a> {
    perceptron: &'a mut Neuron,
    learning_rate: f32,
}

impl<'a> PerceptronLearning<'a> {
    /// Creates a new `PerceptronLearning` with the default learning rate.
    ///
    /// # Arguments
    /// * `perceptron` - The neuron to teach.
    pub fn new(perceptron: &'a mut Neuron) -> Self {
        Self {
            perceptron,
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }

    /// Returns the neuron being taught.
    pub fn neuron(&self) -> &Neuron {
        self.perceptron
    }
}

impl SupervisedLearning for PerceptronLearning<'_> {
    fn inputs(&self) -> usize {
        self.perceptron.inputs()
    }

    /// Returns the absolute error of the perceptron for the given sample.
    ///
    /// A sample that is already classified exactly right (`error == 0.0`, no tolerance)
    /// leaves the neuron untouched.
    fn run(&mut self, input: &[f32], output: &[f32]) -> Result<f32> {
        check_sample(self.perceptron.inputs(), 0, input, output)?;

        let actual = self.perceptron.compute(input)?;
        let error = output[0] - actual;

        if error != 0. {
            trace!(error = error, actual = actual; "updating perceptron");
            self.perceptron.nudge(self.learning_rate * error, input);
        }

        Ok(error.abs())
    }
}

impl LearningRate for PerceptronLearning<'_> {
    fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, learning_rate: f32) -> Result<()> {
        check_learning_rate(learning_rate)?;
        self.learning_rate = learning_rate;
        Ok(())
    }
}
