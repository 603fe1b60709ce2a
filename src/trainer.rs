//! Per-sample training loop driving a [`Network`] through
//! `activate -> back_activate -> gradient_descent`.

use log::{debug, info};
use ndarray::{arr1, Array1, ArrayView1};

use crate::data::Dataset;
use crate::error::Result;
use crate::loss::mean_squared_error;
use crate::network::Network;

/// How the error handed to [`Network::back_activate`] is formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSign {
    /// `target - output`. Paired with the additive update this descends the
    /// squared error.
    #[default]
    TargetMinusOutput,
    /// `output - target`. With the same additive update the network climbs
    /// the loss instead; kept to demonstrate the coupling.
    OutputMinusTarget,
}

impl ErrorSign {
    pub fn error(&self, target: ArrayView1<f64>, output: ArrayView1<f64>) -> Array1<f64> {
        match self {
            Self::TargetMinusOutput => &target - &output,
            Self::OutputMinusTarget => &output - &target,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Trainer {
    learning_rate: f64,
    epochs: usize,
    error_sign: ErrorSign,
}

impl Trainer {
    pub fn new(learning_rate: f64, epochs: usize) -> Self {
        Self {
            learning_rate,
            epochs,
            error_sign: ErrorSign::default(),
        }
    }

    pub fn error_sign(self, error_sign: ErrorSign) -> Self {
        Self { error_sign, ..self }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }

    /// Train on every sample of `dataset`, in order, for each epoch and return
    /// the mean squared error of each epoch.
    ///
    /// The error of a sample is measured on the output produced before that
    /// sample's weight update.
    pub fn train(&self, network: &mut Network, dataset: &Dataset) -> Result<Vec<f64>> {
        let mut history = Vec::with_capacity(self.epochs);
        for epoch in 0..self.epochs {
            let mut sum_errors = 0.0;
            for sample in dataset {
                let output = network.activate(sample.input.view())?.to_owned();
                sum_errors += mean_squared_error(sample.target.view(), output.view())?;

                let error = self.error_sign.error(sample.target.view(), output.view());
                network.back_activate(error.view())?;
                network.gradient_descent(self.learning_rate)?;
            }

            let epoch_error = if dataset.is_empty() {
                0.0
            } else {
                sum_errors / dataset.len() as f64
            };
            info!("Epoch: {}\tError: {:.4}", epoch, epoch_error);
            history.push(epoch_error);
        }
        debug!(
            "trained {} epochs at learning rate {}",
            self.epochs, self.learning_rate
        );
        Ok(history)
    }
}

/// Feed each scalar in `inputs` to a single-input network and pair it with
/// the resulting output vector.
pub fn probe(network: &mut Network, inputs: &[f64]) -> Result<Vec<(f64, Array1<f64>)>> {
    inputs
        .iter()
        .map(|&x| {
            let output = network.activate(arr1(&[x]).view())?.to_owned();
            Ok((x, output))
        })
        .collect()
}
