//! The whole batch job: load, split, build, train, evaluate, report.

use std::io::Write;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::RunConfig;
use crate::data::{load_table, split_train_test, Dataset};
use crate::error::{CardioError, Result};
use crate::network::network::Network;
use crate::optim::adam::Adam;
use crate::report::chart::ChartSpec;
use crate::report::console::accuracy_line;
use crate::report::history_log::append_values;
use crate::report::window::ChartDisplay;
use crate::train::evaluate::{evaluate, Evaluation, METRIC_NAME};
use crate::train::history::History;
use crate::train::loop_fn::train_loop;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub history: History,
    pub evaluation: Evaluation,
    /// The line printed to the console.
    pub console_line: String,
}

/// Loads both splits from the configured paths, then runs [`run_with_data`].
pub fn run<W: Write, D: ChartDisplay + ?Sized>(
    config: &RunConfig,
    out: &mut W,
    display: &mut D,
) -> Result<RunSummary> {
    match serde_json::to_string(config) {
        Ok(json) => debug!("run config: {json}"),
        Err(e) => debug!("run config not serializable: {e}"),
    }

    let train_rows = load_table(&config.train_path)?;
    let test_rows = load_table(&config.test_path)?;
    let (train, test) = split_train_test(
        &train_rows,
        &test_rows,
        config.feature_columns,
        config.label_column,
    )?;

    run_with_data(config, &train, &test, out, display)
}

/// Trains on `train`, validates/evaluates on `test`, prints the accuracy
/// line to `out`, appends both histories and shows the two curves.
///
/// The history files are written before any chart is shown, so closing a
/// window early never loses them.
pub fn run_with_data<W: Write, D: ChartDisplay + ?Sized>(
    config: &RunConfig,
    train: &Dataset,
    test: &Dataset,
    out: &mut W,
    display: &mut D,
) -> Result<RunSummary> {
    info!(
        "train: {} x {}, test: {} x {}",
        train.len(),
        train.feature_count(),
        test.len(),
        test.feature_count()
    );

    let mut rng = match config.train.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut network = Network::from_spec(&config.network, &mut rng)?;
    info!(
        "built network '{}' with {} layers, {} parameters",
        config.network.name,
        network.layers.len(),
        network.parameter_count()
    );

    let mut optimizer = Adam::new(config.optimizer);
    let history = train_loop(
        &mut network,
        train,
        Some(test),
        &mut optimizer,
        &config.train,
        &mut rng,
    )?;

    let evaluation = evaluate(&mut network, test);
    info!("final evaluation: loss {:.4}, {} {:.4}", evaluation.loss, METRIC_NAME, evaluation.accuracy);

    let console_line = accuracy_line(METRIC_NAME, evaluation.accuracy);
    writeln!(out, "{console_line}").map_err(|e| CardioError::io("<stdout>", e))?;

    append_values(&config.accuracy_log_path(), &history.accuracy)?;
    append_values(&config.loss_log_path(), &history.loss)?;

    for chart in ChartSpec::training_curves(&history) {
        display.show(&chart)?;
    }

    Ok(RunSummary { history, evaluation, console_line })
}
