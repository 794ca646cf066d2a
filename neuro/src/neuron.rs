use std::ops::{Index, IndexMut};

use ndarray::{Array1, ArrayView1};

use crate::{MlErr, Result, activations::ActFn, initialization::ParamGen};

/// A single activation neuron: one weight per input, a threshold (bias) and a fixed
/// activation function.
///
/// The amount of inputs is fixed at construction, learning rules only ever mutate the
/// weights and the threshold in place.
#[derive(Clone, Debug)]
pub struct Neuron {
    weights: Array1<f32>,
    threshold: f32,
    act_fn: ActFn,
}

impl Neuron {
    /// Creates a new `Neuron` with every weight and the threshold set to zero.
    ///
    /// # Arguments
    /// * `inputs` - The amount of inputs the neuron has.
    /// * `act_fn` - The activation function applied to the weighted sum.
    pub fn new(inputs: usize, act_fn: ActFn) -> Self {
        Self {
            weights: Array1::zeros(inputs),
            threshold: 0.,
            act_fn,
        }
    }

    /// Creates a new `Neuron` with the given weights and threshold.
    pub fn with_params(weights: Vec<f32>, threshold: f32, act_fn: ActFn) -> Self {
        Self {
            weights: Array1::from_vec(weights),
            threshold,
            act_fn,
        }
    }

    /// Initializes the weights and then the threshold with values taken from `param_gen`.
    ///
    /// # Arguments
    /// * `param_gen` - The generator to sample the `inputs + 1` parameters from.
    ///
    /// # Returns
    /// An error if the generator got exhausted, in which case the neuron is left untouched.
    pub fn init(&mut self, param_gen: &mut dyn ParamGen) -> Result<()> {
        let expected = self.inputs() + 1;
        let mut params = Vec::with_capacity(expected);

        while params.len() < expected {
            let Some(sample) = param_gen.sample(expected - params.len()) else {
                break;
            };

            if sample.is_empty() {
                break;
            }

            params.extend(sample);
        }

        if params.len() != expected {
            return Err(MlErr::ParamGenExhausted {
                got: params.len(),
                expected,
            });
        }

        self.threshold = params.pop().unwrap_or_default();
        self.weights = Array1::from_vec(params);
        Ok(())
    }

    /// Returns the amount of inputs of this neuron.
    pub fn inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }

    pub fn act_fn(&self) -> &ActFn {
        &self.act_fn
    }

    pub fn weights(&self) -> &[f32] {
        // An `Array1` built by this type is always contiguous.
        self.weights.as_slice().unwrap_or_default()
    }

    /// Reads the weight of the `i`-th input.
    ///
    /// # Returns
    /// The weight or an error if `i` is out of bounds.
    pub fn weight(&self, i: usize) -> Result<f32> {
        self.weights
            .get(i)
            .copied()
            .ok_or(MlErr::IndexOutOfBounds {
                index: i,
                len: self.inputs(),
            })
    }

    /// Overwrites the weight of the `i`-th input.
    ///
    /// # Returns
    /// An error if `i` is out of bounds.
    pub fn set_weight(&mut self, i: usize, weight: f32) -> Result<()> {
        let len = self.inputs();
        let w = self
            .weights
            .get_mut(i)
            .ok_or(MlErr::IndexOutOfBounds { index: i, len })?;

        *w = weight;
        Ok(())
    }

    /// Computes the weighted sum of the input plus the threshold, before applying the
    /// activation function.
    ///
    /// # Arguments
    /// * `input` - A slice with one value per input of the neuron.
    ///
    /// # Returns
    /// The weighted sum or a size mismatch error.
    pub fn weighted_sum(&self, input: &[f32]) -> Result<f32> {
        self.check_input(input)?;

        let x = ArrayView1::from(input);
        Ok(self.weights.dot(&x) + self.threshold)
    }

    /// Computes the output of the neuron for the given input.
    ///
    /// # Arguments
    /// * `input` - A slice with one value per input of the neuron.
    ///
    /// # Returns
    /// The activation of the weighted sum or a size mismatch error.
    pub fn compute(&self, input: &[f32]) -> Result<f32> {
        let z = self.weighted_sum(input)?;
        Ok(self.act_fn.f(z))
    }

    /// Adds `rate * input[i]` to every weight and `rate` to the threshold, as if the
    /// threshold was the weight of an input that's always `1`.
    ///
    /// Callers are expected to have validated `input` already.
    pub(crate) fn nudge(&mut self, rate: f32, input: &[f32]) {
        for (w, &x) in self.weights.iter_mut().zip(input) {
            *w += rate * x;
        }

        self.threshold += rate;
    }

    pub(crate) fn check_input(&self, input: &[f32]) -> Result<()> {
        if input.len() != self.inputs() {
            return Err(MlErr::SizeMismatch {
                a: "input",
                b: "neuron inputs",
                got: input.len(),
                expected: self.inputs(),
            });
        }

        Ok(())
    }
}

impl Index<usize> for Neuron {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        &self.weights[i]
    }
}

impl IndexMut<usize> for Neuron {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.weights[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initialization::ConstParamGen;

    #[test]
    fn compute_applies_weighted_sum_then_act_fn() {
        let neuron = Neuron::with_params(vec![0.5, -1.], 0.25, ActFn::linear());
        assert_eq!(neuron.compute(&[2., 1.]).unwrap(), 0.25);

        let neuron = Neuron::with_params(vec![0.5, -1.], 0.25, ActFn::threshold());
        assert_eq!(neuron.compute(&[2., 1.]).unwrap(), 1.);
        assert_eq!(neuron.compute(&[0., 1.]).unwrap(), 0.);
    }

    #[test]
    fn compute_rejects_wrong_input_width() {
        let neuron = Neuron::new(3, ActFn::linear());

        assert!(matches!(
            neuron.compute(&[1., 2.]),
            Err(MlErr::SizeMismatch {
                got: 2,
                expected: 3,
                ..
            })
        ));
        assert!(neuron.compute(&[1., 2., 3., 4.]).is_err());
    }

    #[test]
    fn weight_access_is_bounds_checked() {
        let mut neuron = Neuron::new(2, ActFn::linear());

        neuron.set_weight(1, 3.).unwrap();
        assert_eq!(neuron.weight(1).unwrap(), 3.);
        assert_eq!(neuron[1], 3.);

        neuron[0] = -1.;
        assert_eq!(neuron.weights(), [-1., 3.]);

        assert!(matches!(
            neuron.weight(2),
            Err(MlErr::IndexOutOfBounds { index: 2, len: 2 })
        ));
        assert!(neuron.set_weight(5, 1.).is_err());
        assert_eq!(neuron.weights(), [-1., 3.]);
    }

    #[test]
    #[should_panic]
    fn indexing_out_of_bounds_panics() {
        let neuron = Neuron::new(2, ActFn::linear());
        let _ = neuron[2];
    }

    #[test]
    fn init_fills_weights_then_threshold() {
        let mut neuron = Neuron::new(3, ActFn::linear());
        let mut param_gen = ConstParamGen::new(0.1, 4);

        neuron.init(&mut param_gen).unwrap();

        assert_eq!(neuron.weights(), [0.1; 3]);
        assert_eq!(neuron.threshold(), 0.1);
    }

    /// Hands out the values of a list one at a time.
    struct OneByOne(std::vec::IntoIter<f32>);

    impl ParamGen for OneByOne {
        fn sample(&mut self, n: usize) -> Option<Vec<f32>> {
            assert!(n > 0);
            self.0.next().map(|x| vec![x])
        }
    }

    #[test]
    fn init_asks_until_it_has_inputs_plus_one_values() {
        let mut neuron = Neuron::new(3, ActFn::threshold());
        let mut param_gen = OneByOne(vec![0.1, 0.2, 0.3, 0.4, 0.5].into_iter());

        neuron.init(&mut param_gen).unwrap();

        assert_eq!(neuron.weights(), [0.1, 0.2, 0.3]);
        assert_eq!(neuron.threshold(), 0.4);
        assert_eq!(param_gen.0.as_slice(), [0.5]);
    }

    #[test]
    fn init_with_an_exhausted_generator_leaves_the_neuron_untouched() {
        let mut neuron = Neuron::with_params(vec![1., 2.], 3., ActFn::linear());
        let mut param_gen = ConstParamGen::new(0., 2);

        assert!(matches!(
            neuron.init(&mut param_gen),
            Err(MlErr::ParamGenExhausted {
                got: 2,
                expected: 3
            })
        ));
        assert_eq!(neuron.weights(), [1., 2.]);
        assert_eq!(neuron.threshold(), 3.);
    }
}
