use serde::{Serialize, Deserialize};
use crate::activation::activation::ActivationFunction;
use crate::layers::init::WeightInit;

/// Number of clinical measurements fed to the first layer.
pub const HEART_FEATURES: usize = 13;

/// Describes one layer in a network specification.
///
/// Fields:
/// - `units`      — number of neurons in this layer
/// - `input_size` — number of neurons feeding into this layer (i.e. the output
///                  size of the previous layer, or the raw input dimension for
///                  the first layer)
/// - `activation` — activation function applied after the linear transform
/// - `init`       — how the weight matrix is seeded
/// - `use_bias`   — whether the layer adds a trainable bias vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub units: usize,
    pub input_size: usize,
    pub activation: ActivationFunction,
    #[serde(default)]
    pub init: WeightInit,
    #[serde(default = "default_use_bias")]
    pub use_bias: bool,
}

fn default_use_bias() -> bool {
    true
}

impl LayerSpec {
    /// A uniformly-initialised layer with a bias vector.
    pub fn dense(units: usize, input_size: usize, activation: ActivationFunction) -> LayerSpec {
        LayerSpec {
            units,
            input_size,
            activation,
            init: WeightInit::uniform(),
            use_bias: true,
        }
    }
}

/// A serializable description of a network architecture, kept apart from the
/// trained weights so the topology can live in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub name: String,
    /// Ordered list of layer descriptions (input → output).
    pub layers: Vec<LayerSpec>,
}

impl NetworkSpec {
    /// The 13 → 12 → 12 → 10 → 8 → 8 → 1 classifier: a ReLU entry layer
    /// followed by sigmoid layers down to a single probability output.
    pub fn heart_disease() -> NetworkSpec {
        use ActivationFunction::{ReLU, Sigmoid};

        NetworkSpec {
            name: "heart-disease".to_string(),
            layers: vec![
                LayerSpec::dense(12, HEART_FEATURES, ReLU),
                LayerSpec::dense(12, 12, Sigmoid),
                LayerSpec::dense(10, 12, Sigmoid),
                LayerSpec::dense(8, 10, Sigmoid),
                LayerSpec::dense(8, 8, Sigmoid),
                LayerSpec::dense(1, 8, Sigmoid),
            ],
        }
    }

    pub fn input_size(&self) -> Option<usize> {
        self.layers.first().map(|l| l.input_size)
    }

    pub fn output_size(&self) -> Option<usize> {
        self.layers.last().map(|l| l.units)
    }
}

impl Default for NetworkSpec {
    fn default() -> Self {
        NetworkSpec::heart_disease()
    }
}
