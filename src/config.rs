use std::path::PathBuf;

use serde::{Serialize, Deserialize};

use crate::network::spec::{NetworkSpec, HEART_FEATURES};
use crate::optim::adam::AdamConfig;
use crate::train::train_config::TrainConfig;

pub const DEFAULT_DATA_PATH: &str = "~/HeartDisease/heart.csv";

/// Every parameter of a run. `RunConfig::default()` is the fixed
/// configuration the binary uses; tests override fields as needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub train_path: String,
    /// Points at the same file as `train_path` unless overridden.
    pub test_path: String,
    /// Leading columns used as features.
    pub feature_columns: usize,
    pub label_column: usize,
    pub network: NetworkSpec,
    pub train: TrainConfig,
    pub optimizer: AdamConfig,
    /// Directory the two history files are appended in.
    pub output_dir: PathBuf,
    pub accuracy_log: String,
    pub loss_log: String,
}

impl RunConfig {
    pub fn accuracy_log_path(&self) -> PathBuf {
        self.output_dir.join(&self.accuracy_log)
    }

    pub fn loss_log_path(&self) -> PathBuf {
        self.output_dir.join(&self.loss_log)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            train_path: DEFAULT_DATA_PATH.to_string(),
            test_path: DEFAULT_DATA_PATH.to_string(),
            feature_columns: HEART_FEATURES,
            label_column: HEART_FEATURES,
            network: NetworkSpec::heart_disease(),
            train: TrainConfig::default(),
            optimizer: AdamConfig::default(),
            output_dir: PathBuf::from("."),
            accuracy_log: "Accuracy.txt".to_string(),
            loss_log: "MSE.txt".to_string(),
        }
    }
}
