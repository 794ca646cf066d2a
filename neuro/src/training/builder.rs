use rand::{SeedableRng, rngs::StdRng};

use super::Trainer;
use crate::{
    Result,
    activations::ActFn,
    dataset::Dataset,
    initialization::{ConstParamGen, ParamGen, RandParamGen},
    learning::{DeltaRuleLearning, LearningRate, PerceptronLearning, SupervisedLearning},
    neuron::Neuron,
    specs::{ActFnSpec, AlgorithmSpec, NeuronSpec, ParamGenSpec, TrainerSpec},
};

/// Builds the pieces of a training session given a specification.
#[derive(Default)]
pub struct TrainerBuilder;

impl TrainerBuilder {
    /// Creates a new `TrainerBuilder`.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new `Neuron` following a spec, initializing its parameters.
    ///
    /// # Arguments
    /// * `spec` - The specification for the neuron.
    /// * `rng` - The random number generator used by random parameter generators.
    pub fn build_neuron(&self, spec: &NeuronSpec, rng: &mut StdRng) -> Result<Neuron> {
        let act_fn = self.resolve_act_fn(spec.act_fn);
        let mut neuron = Neuron::new(spec.inputs, act_fn);

        let mut param_gen = self.resolve_param_gen(spec.init, spec.inputs + 1, rng)?;
        neuron.init(param_gen.as_mut())?;
        Ok(neuron)
    }

    /// Builds the learning algorithm of a spec, bound to `neuron`.
    ///
    /// # Arguments
    /// * `spec` - The specification for the algorithm.
    /// * `neuron` - The neuron to teach.
    pub fn build_learning<'a>(
        &self,
        spec: &AlgorithmSpec,
        neuron: &'a mut Neuron,
    ) -> Result<Box<dyn SupervisedLearning + 'a>> {
        let learning: Box<dyn SupervisedLearning + 'a> = match *spec {
            AlgorithmSpec::Perceptron { learning_rate } => {
                let mut learning = PerceptronLearning::new(neuron);
                learning.set_learning_rate(learning_rate)?;
                Box::new(learning)
            }
            AlgorithmSpec::DeltaRule { learning_rate } => {
                let mut learning = DeltaRuleLearning::new(neuron);
                learning.set_learning_rate(learning_rate)?;
                Box::new(learning)
            }
        };

        Ok(learning)
    }

    /// Builds the dataset of a spec.
    pub fn build_dataset(&self, spec: &TrainerSpec) -> Result<Dataset> {
        let dataset = &spec.dataset;
        Dataset::new(dataset.inputs.clone(), dataset.outputs.clone())
    }

    /// Builds the training driver of a spec.
    ///
    /// # Arguments
    /// * `spec` - The specification for the training session.
    /// * `rng` - The random number generator used for shuffling the dataset.
    pub fn build_trainer(&self, spec: &TrainerSpec, rng: StdRng) -> Result<Trainer<StdRng>> {
        Trainer::new(spec.max_epochs, spec.target_error, spec.shuffle, rng)
    }

    /// Creates the random number generator for a session, seeded if a seed is given.
    pub fn generate_rng(&self, seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    fn resolve_act_fn(&self, spec: ActFnSpec) -> ActFn {
        match spec {
            ActFnSpec::Linear => ActFn::linear(),
            ActFnSpec::Threshold => ActFn::threshold(),
            ActFnSpec::Sigmoid { alpha } => ActFn::sigmoid(alpha),
            ActFnSpec::BipolarSigmoid { alpha } => ActFn::bipolar_sigmoid(alpha),
        }
    }

    fn resolve_param_gen<'r>(
        &self,
        spec: ParamGenSpec,
        limit: usize,
        rng: &'r mut StdRng,
    ) -> Result<Box<dyn ParamGen + 'r>> {
        let param_gen: Box<dyn ParamGen + 'r> = match spec {
            ParamGenSpec::Const { value } => Box::new(ConstParamGen::new(value, limit)),
            ParamGenSpec::Uniform { low, high } => {
                Box::new(RandParamGen::uniform(rng, limit, low, high)?)
            }
            ParamGenSpec::Normal { mean, std_dev } => {
                Box::new(RandParamGen::normal(rng, limit, mean, std_dev)?)
            }
        };

        Ok(param_gen)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::{MlErr, specs::DatasetSpec};

    fn spec(algorithm: AlgorithmSpec, init: ParamGenSpec) -> TrainerSpec {
        TrainerSpec {
            neuron: NeuronSpec {
                inputs: 2,
                act_fn: ActFnSpec::Threshold,
                init,
            },
            algorithm,
            dataset: DatasetSpec {
                inputs: vec![vec![0., 0.], vec![0., 1.], vec![1., 0.], vec![1., 1.]],
                outputs: vec![vec![0.], vec![0.], vec![0.], vec![1.]],
            },
            max_epochs: NonZeroUsize::new(100).unwrap(),
            target_error: 0.,
            shuffle: false,
            seed: Some(11),
        }
    }

    #[test]
    fn builds_a_neuron_with_small_random_weights() {
        let builder = TrainerBuilder::new();
        let spec = spec(
            AlgorithmSpec::Perceptron { learning_rate: 0.1 },
            ParamGenSpec::Uniform {
                low: -0.1,
                high: 0.1,
            },
        );
        let mut rng = builder.generate_rng(spec.seed);

        let neuron = builder.build_neuron(&spec.neuron, &mut rng).unwrap();

        assert_eq!(neuron.inputs(), 2);
        assert!(neuron.weights().iter().all(|w| (-0.1..0.1).contains(w)));
        assert!((-0.1..0.1).contains(&neuron.threshold()));
    }

    #[test]
    fn builds_and_runs_a_whole_session() {
        let builder = TrainerBuilder::new();
        let spec = spec(
            AlgorithmSpec::Perceptron { learning_rate: 0.1 },
            ParamGenSpec::Const { value: 0. },
        );
        let mut rng = builder.generate_rng(spec.seed);

        let mut neuron = builder.build_neuron(&spec.neuron, &mut rng).unwrap();
        let mut dataset = builder.build_dataset(&spec).unwrap();
        let mut trainer = builder.build_trainer(&spec, rng).unwrap();
        let mut learning = builder.build_learning(&spec.algorithm, &mut neuron).unwrap();

        let report = trainer.train(learning.as_mut(), &mut dataset).unwrap();
        assert!(report.converged());
    }

    #[test]
    fn invalid_specs_fail_to_build() {
        let builder = TrainerBuilder::new();
        let mut rng = builder.generate_rng(Some(0));

        let bad_init = spec(
            AlgorithmSpec::DeltaRule { learning_rate: 0.1 },
            ParamGenSpec::Uniform { low: 1., high: 0. },
        );
        assert!(matches!(
            builder.build_neuron(&bad_init.neuron, &mut rng),
            Err(MlErr::Rand(_))
        ));

        let bad_rate = spec(
            AlgorithmSpec::DeltaRule {
                learning_rate: -1.,
            },
            ParamGenSpec::Const { value: 0. },
        );
        let mut neuron = builder.build_neuron(&bad_rate.neuron, &mut rng).unwrap();
        assert!(matches!(
            builder.build_learning(&bad_rate.algorithm, &mut neuron),
            Err(MlErr::InvalidLearningRate(_))
        ));

        let mut bad_target = spec(
            AlgorithmSpec::Perceptron { learning_rate: 0.1 },
            ParamGenSpec::Const { value: 0. },
        );
        bad_target.target_error = f32::NAN;
        assert!(matches!(
            builder.build_trainer(&bad_target, rng),
            Err(MlErr::InvalidTargetError(_))
        ));
    }
}
