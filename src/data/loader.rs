use std::io::Read;
use std::path::PathBuf;

use csv::ReaderBuilder;
use log::info;

use crate::error::{CardioError, Result};

/// Expands a leading `~` to the user's home directory. Paths without one,
/// or environments without `HOME`/`USERPROFILE`, are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => rest,
        _ => return PathBuf::from(path),
    };

    let home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"));
    match home {
        Some(home) => PathBuf::from(home).join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(path),
    }
}

/// Reads a headered, all-numeric CSV file into rows of `f64`.
pub fn load_table(path: &str) -> Result<Vec<Vec<f64>>> {
    let resolved = expand_home(path);
    let file = std::fs::File::open(&resolved).map_err(|e| CardioError::io(&resolved, e))?;
    let rows = read_table(file)?;
    info!(
        "loaded {} rows x {} columns from {}",
        rows.len(),
        rows.first().map_or(0, Vec::len),
        resolved.display()
    );
    Ok(rows)
}

/// Same as [`load_table`] for any reader; the first record is the header.
pub fn read_table<R: Read>(reader: R) -> Result<Vec<Vec<f64>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = record.iter()
            .enumerate()
            .map(|(column, cell)| {
                cell.parse::<f64>().map_err(|_| CardioError::NonNumeric {
                    row: row_idx + 1,
                    column,
                    value: cell.to_string(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    Ok(rows)
}
