use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

/// Half-width of the `uniform` initializer's sampling interval.
pub const DEFAULT_UNIFORM_LIMIT: f64 = 0.05;

/// How a layer's weight matrix is filled before training.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WeightInit {
    /// U(-limit, limit).
    Uniform { limit: f64 },
}

impl WeightInit {
    pub fn uniform() -> WeightInit {
        WeightInit::Uniform { limit: DEFAULT_UNIFORM_LIMIT }
    }

    /// Weight matrix of shape `(fan_in, units)`.
    pub fn weights<R: Rng + ?Sized>(&self, fan_in: usize, units: usize, rng: &mut R) -> Matrix {
        match *self {
            WeightInit::Uniform { limit } => Matrix::uniform(fan_in, units, limit, rng),
        }
    }
}

impl Default for WeightInit {
    fn default() -> Self {
        WeightInit::uniform()
    }
}
