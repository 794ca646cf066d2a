use std::num::NonZeroUsize;

use log::{debug, info, warn};
use rand::Rng;

use super::TrainReport;
use crate::{MlErr, Result, dataset::Dataset, learning::SupervisedLearning};

/// Drives a learning algorithm epoch after epoch until the error is low enough.
///
/// The learning rules only know how to run a single epoch, deciding when to stop is the
/// responsibility of this type.
pub struct Trainer<R: Rng> {
    max_epochs: NonZeroUsize,
    target_error: f32,
    shuffle: bool,
    rng: R,
}

impl<R: Rng> Trainer<R> {
    /// Creates a new `Trainer`.
    ///
    /// # Arguments
    /// * `max_epochs` - The maximum amount of epochs to run.
    /// * `target_error` - Training stops as soon as an epoch's error is at most this value.
    /// * `shuffle` - Whether to shuffle the dataset before every epoch.
    /// * `rng` - A random number generator, used for shuffling.
    ///
    /// # Returns
    /// An error if `target_error` is negative or NaN, no epoch could ever reach it.
    pub fn new(
        max_epochs: NonZeroUsize,
        target_error: f32,
        shuffle: bool,
        rng: R,
    ) -> Result<Self> {
        if target_error.is_nan() || target_error < 0. {
            return Err(MlErr::InvalidTargetError(target_error));
        }

        Ok(Self {
            max_epochs,
            target_error,
            shuffle,
            rng,
        })
    }

    /// Trains until the epoch error reaches the target or the epochs run out.
    ///
    /// # Arguments
    /// * `learning` - The learning algorithm, already bound to the neuron it teaches.
    /// * `dataset` - The samples to train with.
    ///
    /// # Returns
    /// A report with the error of every epoch, or the first error raised by `learning`.
    pub fn train(
        &mut self,
        learning: &mut dyn SupervisedLearning,
        dataset: &mut Dataset,
    ) -> Result<TrainReport> {
        if let Some(width) = dataset.input_width() {
            if width != learning.inputs() {
                return Err(MlErr::SizeMismatch {
                    a: "dataset inputs",
                    b: "neuron inputs",
                    got: width,
                    expected: learning.inputs(),
                });
            }
        }

        let max_epochs = self.max_epochs.get();
        let mut errors = Vec::with_capacity(max_epochs);

        for epoch in 0..max_epochs {
            if self.shuffle {
                dataset.shuffle(&mut self.rng);
            }

            let error = learning.run_epoch(dataset.inputs(), dataset.outputs())?;
            debug!(epoch = epoch, error = error; "finished epoch");
            errors.push(error);

            if error <= self.target_error {
                info!("converged after {} epochs, error {error}", epoch + 1);
                return Ok(TrainReport::new(errors, true));
            }
        }

        warn!(
            "stopped after {max_epochs} epochs without reaching the target error {}",
            self.target_error
        );
        Ok(TrainReport::new(errors, false))
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{activations::ActFn, learning::PerceptronLearning, neuron::Neuron};

    fn dataset(outputs: [f32; 4]) -> Dataset {
        Dataset::new(
            vec![vec![0., 0.], vec![0., 1.], vec![1., 0.], vec![1., 1.]],
            outputs.iter().map(|&y| vec![y]).collect(),
        )
        .unwrap()
    }

    fn trainer(max_epochs: usize, shuffle: bool) -> Trainer<StdRng> {
        let max_epochs = NonZeroUsize::new(max_epochs).unwrap();
        Trainer::new(max_epochs, 0., shuffle, StdRng::seed_from_u64(3)).unwrap()
    }

    #[test]
    fn stops_as_soon_as_it_converges() {
        let mut neuron = Neuron::new(2, ActFn::threshold());
        let mut learning = PerceptronLearning::new(&mut neuron);
        let mut or2 = dataset([0., 1., 1., 1.]);

        let report = trainer(100, false).train(&mut learning, &mut or2).unwrap();

        assert!(report.converged());
        assert!(report.epochs() < 100);
        assert_eq!(report.last_error(), Some(0.));
        assert!(report.errors()[..report.epochs() - 1].iter().all(|&e| e > 0.));
    }

    #[test]
    fn gives_up_after_max_epochs() {
        let mut neuron = Neuron::new(2, ActFn::threshold());
        let mut learning = PerceptronLearning::new(&mut neuron);
        let mut xor2 = dataset([0., 1., 1., 0.]);

        let report = trainer(50, true).train(&mut learning, &mut xor2).unwrap();

        assert!(!report.converged());
        assert_eq!(report.epochs(), 50);
        assert!(report.errors().iter().all(|&e| e > 0.));
    }

    #[test]
    fn unreachable_target_errors_are_rejected() {
        let max_epochs = NonZeroUsize::new(10).unwrap();
        let rng = || StdRng::seed_from_u64(0);

        assert!(matches!(
            Trainer::new(max_epochs, f32::NAN, false, rng()),
            Err(MlErr::InvalidTargetError(e)) if e.is_nan()
        ));
        assert!(matches!(
            Trainer::new(max_epochs, -0.5, false, rng()),
            Err(MlErr::InvalidTargetError(e)) if e == -0.5
        ));
        assert!(Trainer::new(max_epochs, f32::INFINITY, false, rng()).is_ok());
    }

    #[test]
    fn rejects_datasets_of_another_width() {
        let mut neuron = Neuron::new(3, ActFn::threshold());
        let mut learning = PerceptronLearning::new(&mut neuron);
        let mut or2 = dataset([0., 1., 1., 1.]);

        assert!(matches!(
            trainer(10, false).train(&mut learning, &mut or2),
            Err(MlErr::SizeMismatch { got: 2, expected: 3, .. })
        ));
    }
}
