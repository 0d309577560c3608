use serde::{Serialize, Deserialize};

use crate::{math::matrix::Matrix, network::network::Network};

/// Adam hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdamConfig {
    pub learning_rate: f64,
    pub beta1: f64,
    pub beta2: f64,
    pub epsilon: f64,
}

impl Default for AdamConfig {
    fn default() -> Self {
        AdamConfig {
            learning_rate: 0.001,
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-7,
        }
    }
}

/// First/second moment estimates for one layer's (weights, biases).
#[derive(Debug, Clone)]
struct Moments {
    m: (Matrix, Matrix),
    v: (Matrix, Matrix),
}

/// Adam optimizer. Moment buffers are created lazily on the first step so
/// the optimizer does not need to know the topology up front.
#[derive(Debug, Clone)]
pub struct Adam {
    pub config: AdamConfig,
    moments: Vec<Moments>,
    t: u32,
}

impl Adam {
    pub fn new(config: AdamConfig) -> Adam {
        Adam { config, moments: Vec::new(), t: 0 }
    }

    /// Number of steps taken so far.
    pub fn iterations(&self) -> u32 {
        self.t
    }

    /// Applies one update to every layer. `grads[i]` holds the averaged
    /// (weights_grad, biases_grad) for `network.layers[i]`.
    pub fn step(&mut self, network: &mut Network, grads: &[(Matrix, Matrix)]) {
        debug_assert_eq!(grads.len(), network.layers.len(), "one gradient pair per layer");

        if self.moments.is_empty() {
            self.moments = grads.iter()
                .map(|(w, b)| {
                    let zeros = (Matrix::zeros(w.rows, w.cols), Matrix::zeros(b.rows, b.cols));
                    Moments { m: zeros.clone(), v: zeros }
                })
                .collect();
        }

        self.t += 1;
        let AdamConfig { learning_rate, beta1, beta2, epsilon } = self.config;
        let t = self.t as i32;
        let correction1 = 1.0 - beta1.powi(t);
        let correction2 = 1.0 - beta2.powi(t);

        let update = |m: &mut Matrix, v: &mut Matrix, g: &Matrix| -> Matrix {
            *m = m.zip_map(g, |m, g| beta1 * m + (1.0 - beta1) * g);
            *v = v.zip_map(g, |v, g| beta2 * v + (1.0 - beta2) * g * g);
            m.zip_map(v, |m, v| {
                let m_hat = m / correction1;
                let v_hat = v / correction2;
                learning_rate * m_hat / (v_hat.sqrt() + epsilon)
            })
        };

        for ((layer, moments), (w_grad, b_grad)) in network.layers.iter_mut()
            .zip(self.moments.iter_mut())
            .zip(grads.iter())
        {
            let w_step = update(&mut moments.m.0, &mut moments.v.0, w_grad);
            let b_step = update(&mut moments.m.1, &mut moments.v.1, b_grad);
            layer.apply_update(&w_step, &b_step);
        }
    }
}
