use rand::Rng;

use crate::{MlErr, Result, learning::check_sample};

/// An in-memory set of labeled samples.
///
/// Every input has the same width and every desired output has at least one value.
#[derive(Clone, Debug)]
pub struct Dataset {
    inputs: Vec<Vec<f32>>,
    outputs: Vec<Vec<f32>>,
}

impl Dataset {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `inputs` - The input vectors.
    /// * `outputs` - The desired output vectors, one per input vector.
    ///
    /// # Returns
    /// A new `Dataset` or an error if the samples are not well shaped.
    pub fn new(inputs: Vec<Vec<f32>>, outputs: Vec<Vec<f32>>) -> Result<Self> {
        if inputs.len() != outputs.len() {
            return Err(MlErr::SizeMismatch {
                a: "inputs",
                b: "outputs",
                got: outputs.len(),
                expected: inputs.len(),
            });
        }

        let width = inputs.first().map(Vec::len).unwrap_or_default();
        for (i, (x, y)) in inputs.iter().zip(&outputs).enumerate() {
            check_sample(width, i, x, y)?;
        }

        Ok(Self { inputs, outputs })
    }

    /// Returns the amount of samples.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Returns the width of the input vectors, `None` if there are no samples.
    pub fn input_width(&self) -> Option<usize> {
        self.inputs.first().map(Vec::len)
    }

    pub fn inputs(&self) -> &[Vec<f32>] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Vec<f32>] {
        &self.outputs
    }

    /// Shuffles the samples in place, keeping every input paired with its output.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        for i in (1..self.len()).rev() {
            let j = rng.random_range(0..=i);
            self.inputs.swap(i, j);
            self.outputs.swap(i, j);
        }
    }
}
