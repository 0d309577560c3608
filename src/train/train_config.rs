use serde::{Serialize, Deserialize};

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`     — total number of full passes over the training data
/// - `batch_size` — samples per mini-batch; gradients are averaged per batch
/// - `shuffle`    — reshuffle the sample order at the start of every epoch
/// - `seed`       — seeds weight initialisation and shuffling; `None` draws
///                  from OS entropy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub batch_size: usize,
    pub shuffle: bool,
    pub seed: Option<u64>,
}

impl TrainConfig {
    pub fn new(epochs: usize, batch_size: usize) -> Self {
        TrainConfig {
            epochs,
            batch_size,
            shuffle: true,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(1500, 32)
    }
}
