use crate::data::Dataset;
use crate::error::{CardioError, Result};

/// Columns `[0, feature_columns)` become features, `label_column` the label.
pub fn split_columns(
    rows: &[Vec<f64>],
    feature_columns: usize,
    label_column: usize,
) -> Result<Dataset> {
    let needed = feature_columns.max(label_column + 1);

    let mut features = Vec::with_capacity(rows.len());
    let mut labels = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        if row.len() < needed {
            return Err(CardioError::ShortRow {
                row: i + 1,
                expected: needed,
                found: row.len(),
            });
        }
        features.push(row[..feature_columns].to_vec());
        labels.push(row[label_column]);
    }

    Dataset::new(features, labels)
}

/// Splits the nominal train and test tables. Both splits are produced the
/// same way and are not checked against each other.
pub fn split_train_test(
    train_rows: &[Vec<f64>],
    test_rows: &[Vec<f64>],
    feature_columns: usize,
    label_column: usize,
) -> Result<(Dataset, Dataset)> {
    Ok((
        split_columns(train_rows, feature_columns, label_column)?,
        split_columns(test_rows, feature_columns, label_column)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<Vec<f64>> {
        (0..n)
            .map(|i| (0..14).map(|c| if c == 13 { (i % 2) as f64 } else { (i * 14 + c) as f64 }).collect())
            .collect()
    }

    #[test]
    fn test_split_shapes() {
        let data = split_columns(&rows(5), 13, 13).unwrap();
        assert_eq!(data.len(), 5);
        assert!(data.features.iter().all(|r| r.len() == 13));
        assert_eq!(data.labels, vec![0.0, 1.0, 0.0, 1.0, 0.0]);
        assert_eq!(data.features[1][0], 14.0);
        assert_eq!(data.features[1][12], 26.0);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let mut table = rows(2);
        for r in &mut table {
            r.push(99.0);
        }
        let data = split_columns(&table, 13, 13).unwrap();
        assert_eq!(data.features[0].len(), 13);
        assert_eq!(data.labels[0], 0.0);
    }

    #[test]
    fn test_short_row_is_rejected() {
        let mut table = rows(3);
        table[2].truncate(13);
        match split_columns(&table, 13, 13) {
            Err(CardioError::ShortRow { row, expected, found }) => {
                assert_eq!((row, expected, found), (3, 14, 13));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_train_and_test_split_identically() {
        let table = rows(4);
        let (train, test) = split_train_test(&table, &table, 13, 13).unwrap();
        assert_eq!(train, test);
    }
}
