use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::{CardioError, Result};

/// Appends each value on its own line, creating the file if needed.
/// Existing contents are never truncated, so repeated runs accumulate.
pub fn append_values(path: &Path, values: &[f64]) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CardioError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    for value in values {
        writeln!(writer, "{value:?}").map_err(|e| CardioError::io(path, e))?;
    }
    writer.flush().map_err(|e| CardioError::io(path, e))?;

    debug!("appended {} values to {}", values.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cardio-nn-log-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("values.txt");
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn test_values_round_trip_through_text() {
        let path = scratch("round-trip");
        append_values(&path, &[1.0, 0.123456789012345, 1e-9]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<f64> = text.lines().map(|l| l.parse().unwrap()).collect();
        assert_eq!(parsed, vec![1.0, 0.123456789012345, 1e-9]);
        assert_eq!(text.lines().next(), Some("1.0"));
    }

    #[test]
    fn test_second_call_appends() {
        let path = scratch("append");
        append_values(&path, &[0.5, 0.25]).unwrap();
        append_values(&path, &[0.125]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "0.5\n0.25\n0.125\n");
    }

    #[test]
    fn test_nan_is_written_not_rejected() {
        let path = scratch("nan");
        append_values(&path, &[f64::NAN]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.trim().parse::<f64>().unwrap().is_nan());
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let err = append_values(Path::new("/definitely/not/here/MSE.txt"), &[1.0]).unwrap_err();
        assert!(matches!(err, CardioError::Io { .. }));
    }
}
