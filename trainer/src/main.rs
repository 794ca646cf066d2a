use std::{env, fs, io, num::NonZeroUsize};

use log::{info, warn};
use neuro::{
    specs::{ActFnSpec, AlgorithmSpec, DatasetSpec, NeuronSpec, ParamGenSpec, TrainerSpec},
    training::TrainerBuilder,
};

const SPEC_VAR: &str = "TRAINER_SPEC";
const DEMO_EPOCHS: NonZeroUsize = NonZeroUsize::new(100).unwrap();

fn main() -> io::Result<()> {
    env_logger::init();

    let spec: TrainerSpec = match env::args().nth(1).or_else(|| env::var(SPEC_VAR).ok()) {
        Some(path) => {
            info!("loading training spec from {path}");
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw).map_err(io::Error::other)?
        }
        None => {
            warn!("no spec given (pass a path or set {SPEC_VAR}), training the AND gate demo");
            and2_spec()
        }
    };

    let builder = TrainerBuilder::new();
    let mut rng = builder.generate_rng(spec.seed);

    let mut neuron = builder
        .build_neuron(&spec.neuron, &mut rng)
        .map_err(io::Error::other)?;
    let mut dataset = builder.build_dataset(&spec).map_err(io::Error::other)?;
    let mut trainer = builder
        .build_trainer(&spec, rng)
        .map_err(io::Error::other)?;

    let report = {
        let mut learning = builder
            .build_learning(&spec.algorithm, &mut neuron)
            .map_err(io::Error::other)?;

        trainer
            .train(learning.as_mut(), &mut dataset)
            .map_err(io::Error::other)?
    };

    info!(
        "{} after {} epochs, last error {:?}",
        if report.converged() { "converged" } else { "not converged" },
        report.epochs(),
        report.last_error()
    );
    info!("weights: {:?}", neuron.weights());
    info!("threshold: {}", neuron.threshold());

    for (x, y) in dataset.inputs().iter().zip(dataset.outputs()) {
        let out = neuron.compute(x).map_err(io::Error::other)?;
        println!("{x:?} -> {out} (expected {})", y[0]);
    }

    Ok(())
}

/// Logical AND on a threshold neuron.
fn and2_spec() -> TrainerSpec {
    TrainerSpec {
        neuron: NeuronSpec {
            inputs: 2,
            act_fn: ActFnSpec::Threshold,
            init: ParamGenSpec::Uniform {
                low: -0.1,
                high: 0.1,
            },
        },
        algorithm: AlgorithmSpec::Perceptron { learning_rate: 0.1 },
        dataset: DatasetSpec {
            inputs: vec![vec![0., 0.], vec![0., 1.], vec![1., 0.], vec![1., 1.]],
            outputs: vec![vec![0.], vec![0.], vec![0.], vec![1.]],
        },
        max_epochs: DEMO_EPOCHS,
        target_error: 0.,
        shuffle: false,
        seed: None,
    }
}
