use serde::{Serialize, Deserialize};

/// Per-epoch training statistics produced by `train_loop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    pub total_epochs: usize,
    /// Mean binary cross-entropy over the epoch's batches, weighted by batch size.
    pub train_loss: f64,
    /// Fraction of training samples classified correctly, in [0, 1].
    pub train_accuracy: f64,
    pub val_loss: Option<f64>,
    pub val_accuracy: Option<f64>,
    pub elapsed_ms: u64,
}

impl EpochStats {
    /// One-line summary in the usual `loss: … - accuracy: …` shape.
    pub fn summary(&self) -> String {
        let mut line = format!(
            "epoch {}/{} - {}ms - loss: {:.4} - accuracy: {:.4}",
            self.epoch, self.total_epochs, self.elapsed_ms, self.train_loss, self.train_accuracy
        );
        if let (Some(vl), Some(va)) = (self.val_loss, self.val_accuracy) {
            line.push_str(&format!(" - val_loss: {vl:.4} - val_accuracy: {va:.4}"));
        }
        line
    }
}
