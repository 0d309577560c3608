use rand::Rng;

use crate::error::{CardioError, Result};
use crate::layers::dense::Layer;
use crate::network::spec::NetworkSpec;

#[derive(Debug)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds a network from its spec, checking that consecutive layers line up.
    pub fn from_spec<R: Rng + ?Sized>(spec: &NetworkSpec, rng: &mut R) -> Result<Network> {
        if spec.layers.is_empty() {
            return Err(CardioError::Topology(format!("network '{}' has no layers", spec.name)));
        }

        for (i, pair) in spec.layers.windows(2).enumerate() {
            if pair[1].input_size != pair[0].units {
                return Err(CardioError::Topology(format!(
                    "layer {} expects {} inputs but layer {} has {} units",
                    i + 2, pair[1].input_size, i + 1, pair[0].units
                )));
            }
        }

        if let Some((i, _)) = spec.layers.iter().enumerate().find(|(_, l)| l.units == 0 || l.input_size == 0) {
            return Err(CardioError::Topology(format!("layer {} has a zero dimension", i + 1)));
        }

        let layers = spec.layers.iter()
            .map(|layer_spec| Layer::new(layer_spec, rng))
            .collect();
        Ok(Network { layers })
    }

    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, Layer::input_size)
    }

    /// Forward pass; stores activations in each layer for backprop.
    pub fn forward(&mut self, input: Vec<f64>) -> Vec<f64> {
        let mut current = input;
        for layer in &mut self.layers {
            current = layer.feed_from(current);
        }
        current
    }

    pub fn parameter_count(&self) -> usize {
        self.layers.iter()
            .map(|l| l.weights.rows * l.weights.cols + if l.use_bias { l.size } else { 0 })
            .sum()
    }
}
