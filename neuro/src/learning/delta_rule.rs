use log::trace;

use super::{
    DEFAULT_LEARNING_RATE, LearningRate, SupervisedLearning, check_learning_rate, check_sample,
};
use crate::{Result, neuron::Neuron};

/// The delta rule (Widrow-Hoff) for a single neuron with a differentiable activation.
///
/// Steps along the gradient of the squared error: every weight moves
/// `learning_rate * error * f'(z) * input` and the threshold `learning_rate * error * f'(z)`,
/// where `z` is the neuron's weighted sum.
#[derive(Debug)]
pub struct DeltaRuleLearning<'a> {
    neuron: &'a mut Neuron,
    learning_rate: f32,
}

impl<'a> DeltaRuleLearning<'a> {
    /// Creates a new `DeltaRuleLearning` with the default learning rate.
    ///
    /// # Arguments
    /// * `neuron` - The neuron to teach.
    pub fn new(neuron: &'a mut Neuron) -> Self {
        Self {
            neuron,
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }

    pub fn neuron(&self) -> &Neuron {
        self.neuron
    }
}

impl SupervisedLearning for DeltaRuleLearning<'_> {
    fn inputs(&self) -> usize {
        self.neuron.inputs()
    }

    /// Returns half the squared error of the neuron for the given sample.
    fn run(&mut self, input: &[f32], output: &[f32]) -> Result<f32> {
        check_sample(self.neuron.inputs(), 0, input, output)?;

        let z = self.neuron.weighted_sum(input)?;
        let act_fn = *self.neuron.act_fn();
        let error = output[0] - act_fn.f(z);

        if error != 0. {
            let delta = error * act_fn.df(z);
            trace!(error = error, delta = delta; "updating neuron");
            self.neuron.nudge(self.learning_rate * delta, input);
        }

        Ok(error * error / 2.)
    }
}

impl LearningRate for DeltaRuleLearning<'_> {
    fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, learning_rate: f32) -> Result<()> {
        check_learning_rate(learning_rate)?;
        self.learning_rate = learning_rate;
        Ok(())
    }
}
