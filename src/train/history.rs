use serde::{Serialize, Deserialize};

use crate::train::epoch_stats::EpochStats;

/// Per-epoch metric sequences, one entry appended per completed epoch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    pub accuracy: Vec<f64>,
    pub loss: Vec<f64>,
    pub val_accuracy: Vec<f64>,
    pub val_loss: Vec<f64>,
}

impl History {
    pub fn record(&mut self, stats: &EpochStats) {
        self.accuracy.push(stats.train_accuracy);
        self.loss.push(stats.train_loss);
        if let Some(va) = stats.val_accuracy {
            self.val_accuracy.push(va);
        }
        if let Some(vl) = stats.val_loss {
            self.val_loss.push(vl);
        }
    }

    /// Number of completed epochs.
    pub fn epochs(&self) -> usize {
        self.loss.len()
    }
}
