pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;
pub mod report;
pub mod config;
pub mod error;
pub mod pipeline;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::network::Network;
pub use network::spec::{LayerSpec, NetworkSpec};
pub use loss::bce::BceLoss;
pub use optim::adam::{Adam, AdamConfig};
pub use train::{train_loop, evaluate, TrainConfig, History, Evaluation};
pub use data::Dataset;
pub use report::{ChartDisplay, ChartSpec, EguiDisplay};
pub use config::RunConfig;
pub use error::{CardioError, Result};
pub use pipeline::{run, run_with_data, RunSummary};
