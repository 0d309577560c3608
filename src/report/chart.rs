use serde::{Serialize, Deserialize};

use crate::train::history::History;

/// Where a chart's legend box sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendCorner {
    UpperLeft,
    UpperRight,
}

/// Everything needed to draw one training curve, independent of the backend
/// that eventually renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series_name: String,
    pub legend: LegendCorner,
    /// `(epoch index, value)`, epoch counted from 0.
    pub points: Vec<[f64; 2]>,
}

impl ChartSpec {
    fn curve(title: &str, y_label: &str, legend: LegendCorner, values: &[f64]) -> ChartSpec {
        ChartSpec {
            title: title.to_string(),
            x_label: "Iteration".to_string(),
            y_label: y_label.to_string(),
            series_name: "Train".to_string(),
            legend,
            points: values.iter().enumerate().map(|(i, &v)| [i as f64, v]).collect(),
        }
    }

    pub fn accuracy(history: &History) -> ChartSpec {
        ChartSpec::curve("Model accuracy", "Accuracy", LegendCorner::UpperLeft, &history.accuracy)
    }

    /// The loss curve keeps its historical "Mean square error" labels even
    /// though the plotted values are binary cross-entropy.
    pub fn loss(history: &History) -> ChartSpec {
        ChartSpec::curve("Mean square error", "Mean square error", LegendCorner::UpperRight, &history.loss)
    }

    /// Accuracy chart first, then loss, in display order.
    pub fn training_curves(history: &History) -> [ChartSpec; 2] {
        [ChartSpec::accuracy(history), ChartSpec::loss(history)]
    }
}
