/// `<metric>: <value * 100 to two decimals>%`, e.g. `accuracy: 85.48%`.
pub fn accuracy_line(metric_name: &str, accuracy: f64) -> String {
    format!("{}: {:.2}%", metric_name, accuracy * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_percentage_with_two_decimals() {
        assert_eq!(accuracy_line("accuracy", 0.8548), "accuracy: 85.48%");
        assert_eq!(accuracy_line("accuracy", 1.0), "accuracy: 100.00%");
        assert_eq!(accuracy_line("accuracy", 0.0), "accuracy: 0.00%");
        assert_eq!(accuracy_line("acc", 0.5), "acc: 50.00%");
    }

    #[test]
    fn test_rounds_rather_than_truncates() {
        assert_eq!(accuracy_line("accuracy", 0.33339), "accuracy: 33.34%");
    }
}
