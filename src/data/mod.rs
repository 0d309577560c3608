pub mod loader;
pub mod split;

pub use loader::{expand_home, load_table, read_table};
pub use split::{split_columns, split_train_test};

use crate::error::{CardioError, Result};

/// Feature rows and their binary labels, aligned by index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub features: Vec<Vec<f64>>,
    pub labels: Vec<f64>,
}

impl Dataset {
    pub fn new(features: Vec<Vec<f64>>, labels: Vec<f64>) -> Result<Dataset> {
        if features.len() != labels.len() {
            return Err(CardioError::ShapeMismatch(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }
        Ok(Dataset { features, labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Width of the feature rows (0 for an empty dataset).
    pub fn feature_count(&self) -> usize {
        self.features.first().map_or(0, Vec::len)
    }

    /// Checks that every row has `expected` features.
    pub fn check_width(&self, expected: usize) -> Result<()> {
        match self.features.iter().position(|r| r.len() != expected) {
            Some(i) => Err(CardioError::ShapeMismatch(format!(
                "row {} has {} features, network expects {}",
                i + 1,
                self.features[i].len(),
                expected
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_misaligned_labels() {
        let err = Dataset::new(vec![vec![1.0], vec![2.0]], vec![0.0]).unwrap_err();
        assert!(matches!(err, CardioError::ShapeMismatch(_)));
    }

    #[test]
    fn test_check_width() {
        let data = Dataset::new(vec![vec![1.0, 2.0], vec![3.0]], vec![0.0, 1.0]).unwrap();
        assert_eq!(data.feature_count(), 2);
        assert!(data.check_width(2).is_err());
        assert!(Dataset::default().check_width(13).is_ok());
    }
}
