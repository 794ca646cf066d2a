use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// The specification for the `ActFn` enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActFnSpec {
    Linear,
    Threshold,
    Sigmoid { alpha: f32 },
    BipolarSigmoid { alpha: f32 },
}

/// The specification for the initial parameters of a neuron.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamGenSpec {
    Const { value: f32 },
    Uniform { low: f32, high: f32 },
    Normal { mean: f32, std_dev: f32 },
}

/// The specification for the `Neuron` struct.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NeuronSpec {
    pub inputs: usize,
    pub act_fn: ActFnSpec,
    pub init: ParamGenSpec,
}

/// The specification for the `SupervisedLearning` trait.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmSpec {
    Perceptron { learning_rate: f32 },
    DeltaRule { learning_rate: f32 },
}

/// The specification for the `Dataset` struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSpec {
    pub inputs: Vec<Vec<f32>>,
    pub outputs: Vec<Vec<f32>>,
}

/// The specification for a whole training session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerSpec {
    pub neuron: NeuronSpec,
    pub algorithm: AlgorithmSpec,
    pub dataset: DatasetSpec,
    pub max_epochs: NonZeroUsize,
    #[serde(default)]
    pub target_error: f32,
    #[serde(default)]
    pub shuffle: bool,
    pub seed: Option<u64>,
}
