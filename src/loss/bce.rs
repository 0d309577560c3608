pub struct BceLoss;

/// Predictions are clipped to [EPS, 1 - EPS] before taking logs.
pub const EPS: f64 = 1e-7;

fn clip(p: f64) -> f64 {
    p.clamp(EPS, 1.0 - EPS)
}

impl BceLoss {
    /// Scalar BCE: -mean(y·log(p) + (1-y)·log(1-p)), p clipped.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(&p, y)| {
                let p = clip(p);
                -(y * p.ln() + (1.0 - y) * (1.0 - p).ln())
            })
            .sum::<f64>() / n
    }

    /// Per-output gradient ∂L/∂p: (p - y) / (p · (1 - p)) / n, p clipped.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(&p, y)| {
                let p = clip(p);
                (p - y) / (p * (1.0 - p)) / n
            })
            .collect()
    }

    /// 1 when the thresholded prediction matches the label, else 0.
    pub fn is_correct(predicted: f64, expected: f64) -> bool {
        let class = if predicted > 0.5 { 1.0 } else { 0.0 };
        class == expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loss_of_confident_correct_prediction_is_small() {
        assert!(BceLoss::loss(&[0.99], &[1.0]) < 0.011);
        assert!(BceLoss::loss(&[0.01], &[0.0]) < 0.011);
    }

    #[test]
    fn test_loss_at_half_is_ln2() {
        let l = BceLoss::loss(&[0.5], &[1.0]);
        assert!((l - std::f64::consts::LN_2).abs() < 1e-12);
    }

    #[test]
    fn test_loss_is_finite_at_saturation() {
        let l = BceLoss::loss(&[1.0], &[0.0]);
        assert!(l.is_finite());
        assert!((l - -(EPS.ln())).abs() < 1e-6);
    }

    #[test]
    fn test_derivative_chained_through_sigmoid_is_p_minus_y() {
        let p: f64 = 0.8;
        let d = BceLoss::derivative(&[p], &[1.0])[0] * p * (1.0 - p);
        assert!((d - (p - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_is_correct_thresholds_at_half() {
        assert!(BceLoss::is_correct(0.51, 1.0));
        assert!(BceLoss::is_correct(0.5, 0.0));
        assert!(!BceLoss::is_correct(0.2, 1.0));
    }
}
