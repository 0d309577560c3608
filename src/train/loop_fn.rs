use std::time::Instant;

use log::info;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::Dataset;
use crate::error::{CardioError, Result};
use crate::loss::bce::BceLoss;
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::optim::adam::Adam;
use crate::train::epoch_stats::EpochStats;
use crate::train::evaluate::evaluate;
use crate::train::history::History;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for exactly `config.epochs` epochs and returns the
/// per-epoch history.
///
/// # Arguments
/// - `network`   — mutable reference to the network; modified in place
/// - `train`     — training samples with one 0/1 label each
/// - `val`       — optional validation set, evaluated after every epoch
/// - `optimizer` — Adam state; carries its moments across epochs
/// - `config`    — epochs, batch size, shuffle flag
/// - `rng`       — source of per-epoch shuffles
///
/// Training accuracy/loss for an epoch are measured on each batch's outputs
/// *before* that batch's update, then averaged over all samples. There is no
/// early stopping: NaN losses are recorded like any other value.
///
/// # Errors
/// Fails before the first epoch if the training set is empty, if
/// `batch_size == 0`, or if either split's feature width differs from the
/// network's input size.
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut Network,
    train: &Dataset,
    val: Option<&Dataset>,
    optimizer: &mut Adam,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<History> {
    if train.is_empty() {
        return Err(CardioError::ShapeMismatch("training set is empty".into()));
    }
    if config.batch_size == 0 {
        return Err(CardioError::ShapeMismatch("batch_size must be at least 1".into()));
    }
    train.check_width(network.input_size())?;
    if let Some(v) = val {
        v.check_width(network.input_size())?;
    }

    let mut history = History::default();

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        // ── One full pass over the training data ───────────────────────────
        let (train_loss, train_accuracy) = run_one_epoch(network, train, optimizer, config, rng);

        // ── Validation ────────────────────────────────────────────────────
        let (val_loss, val_accuracy) = match val {
            Some(v) => {
                let eval = evaluate(network, v);
                (Some(eval.loss), Some(eval.accuracy))
            }
            None => (None, None),
        };

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_loss,
            train_accuracy,
            val_loss,
            val_accuracy,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };
        info!("{}", stats.summary());
        history.record(&stats);
    }

    Ok(history)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Runs one epoch of mini-batch Adam over the training data.
/// Returns (mean loss, accuracy) over all samples.
fn run_one_epoch<R: Rng + ?Sized>(
    network: &mut Network,
    data: &Dataset,
    optimizer: &mut Adam,
    config: &TrainConfig,
    rng: &mut R,
) -> (f64, f64) {
    let n = data.len();
    let mut total_loss = 0.0;
    let mut correct = 0usize;

    let mut indices: Vec<usize> = (0..n).collect();
    if config.shuffle {
        indices.shuffle(rng);
    }

    for batch in indices.chunks(config.batch_size) {
        // Zero-initialize accumulated gradient storage.
        let mut acc_grads: Vec<(Matrix, Matrix)> = network.layers.iter()
            .map(|layer| (
                Matrix::zeros(layer.weights.rows, layer.weights.cols),
                Matrix::zeros(layer.biases.rows, layer.biases.cols),
            ))
            .collect();

        for &idx in batch {
            let label = data.labels[idx];
            let (output, grads) = sample_gradients(network, &data.features[idx], label);

            total_loss += BceLoss::loss(&output, &[label]);
            if BceLoss::is_correct(output[0], label) {
                correct += 1;
            }

            for (acc, (w_grad, b_grad)) in acc_grads.iter_mut().zip(grads.iter()) {
                acc.0.add_assign(w_grad);
                acc.1.add_assign(b_grad);
            }
        }

        // Average and apply.
        let inv_batch = 1.0 / batch.len() as f64;
        let averaged: Vec<(Matrix, Matrix)> = acc_grads.into_iter()
            .map(|(w, b)| (w.map(|x| x * inv_batch), b.map(|x| x * inv_batch)))
            .collect();
        optimizer.step(network, &averaged);
    }

    (total_loss / n as f64, correct as f64 / n as f64)
}

/// Forward and backward pass for one sample. Returns the network output and
/// the per-layer (weights_grad, biases_grad) of the BCE loss.
fn sample_gradients(
    network: &mut Network,
    input: &[f64],
    label: f64,
) -> (Vec<f64>, Vec<(Matrix, Matrix)>) {
    let expected = [label];
    let output = network.forward(input.to_vec());

    let mut delta = Matrix::row_vector(BceLoss::derivative(&output, &expected));
    let mut grads = Vec::with_capacity(network.layers.len());

    for i in (0..network.layers.len()).rev() {
        let input_for_layer = if i == 0 {
            Matrix::row_vector(input.to_vec())
        } else {
            network.layers[i - 1].neurons.clone()
        };

        let (w_grad, b_grad) = network.layers[i].compute_gradients(&delta, &input_for_layer);

        if i > 0 {
            // ∂L/∂a_{i-1} = δ_i · W_iᵀ
            delta = &b_grad * &network.layers[i].weights.transpose();
        }

        grads.push((w_grad, b_grad));
    }

    grads.reverse();
    (output, grads)
}
