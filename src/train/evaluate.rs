use serde::{Serialize, Deserialize};

use crate::data::Dataset;
use crate::loss::bce::BceLoss;
use crate::network::network::Network;

/// Name under which the tracked metric is reported.
pub const METRIC_NAME: &str = "accuracy";

/// Loss and accuracy of a network over a whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub loss: f64,
    pub accuracy: f64,
}

/// Forward-only pass over `data`; weights are not touched.
pub fn evaluate(network: &mut Network, data: &Dataset) -> Evaluation {
    let n = data.len();
    if n == 0 {
        return Evaluation { loss: 0.0, accuracy: 0.0 };
    }

    let mut total_loss = 0.0;
    let mut correct = 0usize;
    for (input, &label) in data.features.iter().zip(data.labels.iter()) {
        let output = network.forward(input.clone());
        total_loss += BceLoss::loss(&output, &[label]);
        if BceLoss::is_correct(output[0], label) {
            correct += 1;
        }
    }

    Evaluation {
        loss: total_loss / n as f64,
        accuracy: correct as f64 / n as f64,
    }
}
