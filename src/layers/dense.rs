use rand::Rng;

use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};
use crate::network::spec::LayerSpec;

#[derive(Debug)]
pub struct Layer{
    pub size: usize,
    pub neurons: Matrix,
    pre_neurons: Matrix,  // pre-activation values (z = Wx + b) needed for correct derivative
    pub weights: Matrix,
    pub biases: Matrix,
    pub use_bias: bool,
    pub activator: ActivationFunction
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(spec: &LayerSpec, rng: &mut R) -> Layer {
        Layer {
            size: spec.units,
            neurons: Matrix::zeros(1, spec.units),
            pre_neurons: Matrix::zeros(1, spec.units),
            weights: spec.init.weights(spec.input_size, spec.units, rng),
            biases: Matrix::zeros(1, spec.units),
            use_bias: spec.use_bias,
            activator: spec.activation,
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows
    }

    pub fn feed_from(&mut self, input: Vec<f64>) -> Vec<f64> {
        let mut z = &Matrix::row_vector(input) * &self.weights;
        if self.use_bias {
            z.add_assign(&self.biases);
        }
        let a = z.map(|x| self.activator.function(x));
        self.pre_neurons = z;
        self.neurons = a.clone();
        a.data.into_iter().next().unwrap_or_default()
    }

    /// Computes gradient adjustments. Returns (weights_grad, biases_grad).
    /// `next_layer_delta` is ∂L/∂a for this layer (error in activation space).
    /// The bias gradient doubles as δ = ∂L/∂z, which the caller propagates
    /// to the previous layer.
    pub fn compute_gradients(
        &self,
        next_layer_delta: &Matrix,
        inputs: &Matrix,
    ) -> (Matrix, Matrix) {
        let act_derivative = self.pre_neurons.map(|x| self.activator.derivative(x));
        // δ = error ⊙ σ'(z)
        let layer_delta = next_layer_delta.hadamard(&act_derivative);

        let weights_adjustment = &inputs.transpose() * &layer_delta;

        (weights_adjustment, layer_delta)
    }

    /// Subtracts already-scaled updates from the parameters.
    pub fn apply_update(&mut self, weights_step: &Matrix, biases_step: &Matrix) {
        self.weights = self.weights.zip_map(weights_step, |w, s| w - s);
        if self.use_bias {
            self.biases = self.biases.zip_map(biases_step, |b, s| b - s);
        }
    }
}
