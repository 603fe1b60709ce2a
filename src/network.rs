use std::fmt;

use log::{debug, trace};
use ndarray::linalg::{general_mat_mul, general_mat_vec_mul};
use ndarray::{Array, Array1, Array2, ArrayView1, Axis, Zip};
use ndarray_rand::rand::Rng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

use crate::activation::{sigmoid, sigmoid_prime};
use crate::error::{check_len, NetworkError, Result};

/// Learning rate used when the caller has no better idea.
pub const DEFAULT_LEARNING_RATE: f64 = 1.0;

/// Where a network is in the `activate -> back_activate -> gradient_descent` cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Activated,
    BackPropagated,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Ready => "ready",
            Phase::Activated => "activated",
            Phase::BackPropagated => "back-propagated",
        };
        f.write_str(name)
    }
}

/// Multilayer perceptron with sigmoid units and no biases.
///
/// Every cache is allocated once at construction and overwritten in place by
/// later calls. The backward pass expects the error as `target - output`,
/// which is why `gradient_descent` adds the derivatives instead of
/// subtracting them.
#[derive(Debug, Clone)]
pub struct Network {
    layer_sizes: Vec<usize>,
    // weights[i]: (layer_sizes[i], layer_sizes[i + 1])
    weights: Vec<Array2<f64>>,
    activations: Vec<Array1<f64>>,
    errors: Vec<Array1<f64>>,
    derivatives: Vec<Array2<f64>>,
    phase: Phase,
    strict: bool,
}

impl Network {
    /// Create a network of `num_inputs -> hidden_layers... -> num_outputs` whose
    /// weights are drawn from Uniform[0, 1) using `rng`.
    pub fn new<R: Rng + ?Sized>(
        num_inputs: usize,
        hidden_layers: &[usize],
        num_outputs: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if num_inputs < 1 {
            return Err(NetworkError::invalid_topology("at least one input is required"));
        }
        if num_outputs < 1 {
            return Err(NetworkError::invalid_topology("at least one output is required"));
        }
        if hidden_layers.is_empty() {
            return Err(NetworkError::invalid_topology(
                "at least one hidden layer is required",
            ));
        }
        if let Some(index) = hidden_layers.iter().position(|&size| size < 1) {
            return Err(NetworkError::invalid_topology(format!(
                "hidden layer {} has no units",
                index
            )));
        }

        let mut layer_sizes = Vec::with_capacity(hidden_layers.len() + 2);
        layer_sizes.push(num_inputs);
        layer_sizes.extend_from_slice(hidden_layers);
        layer_sizes.push(num_outputs);

        let between = Uniform::new(0.0, 1.0);
        let weights = layer_sizes
            .windows(2)
            .map(|pair| Array::random_using((pair[0], pair[1]), between, rng))
            .collect();

        Ok(Self::allocate(layer_sizes, weights))
    }

    /// Create a network from explicit weight matrices.
    /// `weights[i]` must have as many rows as `weights[i - 1]` has columns.
    pub fn with_weights(weights: Vec<Array2<f64>>) -> Result<Self> {
        let first = weights
            .first()
            .ok_or_else(|| NetworkError::invalid_topology("no weight matrices given"))?;

        let mut layer_sizes = Vec::with_capacity(weights.len() + 1);
        layer_sizes.push(first.nrows());
        for (i, w) in weights.iter().enumerate() {
            let expected_rows = layer_sizes[i];
            if w.nrows() != expected_rows {
                return Err(NetworkError::invalid_topology(format!(
                    "weight matrix {} has {} rows but the previous layer has {} units",
                    i,
                    w.nrows(),
                    expected_rows
                )));
            }
            layer_sizes.push(w.ncols());
        }
        if layer_sizes.contains(&0) {
            return Err(NetworkError::invalid_topology("every layer needs at least one unit"));
        }

        Ok(Self::allocate(layer_sizes, weights))
    }

    fn allocate(layer_sizes: Vec<usize>, weights: Vec<Array2<f64>>) -> Self {
        let activations = layer_sizes.iter().map(|&n| Array1::zeros(n)).collect();
        let errors = layer_sizes.iter().map(|&n| Array1::zeros(n)).collect();
        let derivatives = weights.iter().map(|w| Array2::zeros(w.raw_dim())).collect();
        debug!("allocated network with layer sizes {:?}", layer_sizes);

        Self {
            layer_sizes,
            weights,
            activations,
            errors,
            derivatives,
            phase: Phase::Ready,
            strict: false,
        }
    }

    /// Reject calls made out of the `activate -> back_activate -> gradient_descent`
    /// order instead of computing on stale caches.
    pub fn strict(self) -> Self {
        Self {
            strict: true,
            ..self
        }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    pub fn num_inputs(&self) -> usize {
        self.layer_sizes[0]
    }

    pub fn num_outputs(&self) -> usize {
        self.layer_sizes[self.layer_sizes.len() - 1]
    }

    pub fn weights(&self) -> &[Array2<f64>] {
        &self.weights
    }

    pub fn activations(&self) -> &[Array1<f64>] {
        &self.activations
    }

    pub fn errors(&self) -> &[Array1<f64>] {
        &self.errors
    }

    pub fn derivatives(&self) -> &[Array2<f64>] {
        &self.derivatives
    }

    /// Run the forward pass and return the output layer's activation.
    ///
    /// The returned view borrows the network's own buffer, which the next
    /// call overwrites. On a shape mismatch no cache is touched.
    pub fn activate(&mut self, input: ArrayView1<f64>) -> Result<ArrayView1<'_, f64>> {
        check_len(self.num_inputs(), input.len())?;

        self.activations[0].assign(&input);
        for (i, weights) in self.weights.iter().enumerate() {
            let (previous, next) = self.activations.split_at_mut(i + 1);
            let output = &mut next[0];
            general_mat_vec_mul(1.0, &weights.t(), &previous[i], 0.0, output);
            output.mapv_inplace(sigmoid);
            trace!("layer {} activation: {}", i + 1, output);
        }

        self.phase = Phase::Activated;
        Ok(self.activations[self.weights.len()].view())
    }

    /// Propagate `output_error` (`target - output`) back through the cached
    /// activations and return the error at the input layer.
    pub fn back_activate(&mut self, output_error: ArrayView1<f64>) -> Result<ArrayView1<'_, f64>> {
        check_len(self.num_outputs(), output_error.len())?;
        self.check_phase("back_activate", Phase::Activated)?;

        let last = self.weights.len();
        self.errors[last].assign(&output_error);
        for i in (0..last).rev() {
            let (lower, upper) = self.errors.split_at_mut(i + 1);
            let delta = Zip::from(&upper[0])
                .and(&self.activations[i + 1])
                .map_collect(|&error, &activation| error * sigmoid_prime(activation));

            let inputs = self.activations[i].view().insert_axis(Axis(1));
            general_mat_mul(
                1.0,
                &inputs,
                &delta.view().insert_axis(Axis(0)),
                0.0,
                &mut self.derivatives[i],
            );
            general_mat_vec_mul(1.0, &self.weights[i], &delta, 0.0, &mut lower[i]);
            trace!("layer {} delta: {}", i + 1, delta);
        }

        self.phase = Phase::BackPropagated;
        Ok(self.errors[0].view())
    }

    /// Add `derivatives * learning_rate` to every weight matrix.
    ///
    /// Only fails in strict mode, when no backward pass preceded the call.
    pub fn gradient_descent(&mut self, learning_rate: f64) -> Result<()> {
        self.check_phase("gradient_descent", Phase::BackPropagated)?;

        for (weights, derivatives) in self.weights.iter_mut().zip(&self.derivatives) {
            weights.scaled_add(learning_rate, derivatives);
        }

        self.phase = Phase::Ready;
        Ok(())
    }

    fn check_phase(&self, operation: &'static str, required: Phase) -> Result<()> {
        if self.phase == required {
            return Ok(());
        }
        if self.strict {
            return Err(NetworkError::OutOfOrder {
                operation,
                phase: self.phase,
            });
        }
        debug!(
            "`{}` called while {}; computing on cached state",
            operation, self.phase
        );
        Ok(())
    }
}
