use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Sigmoid,
    #[serde(rename = "relu")]
    ReLU,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            // Split on sign so exp() never overflows.
            ActivationFunction::Sigmoid => {
                if x >= 0.0 {
                    1.0 / (1.0 + (-x).exp())
                } else {
                    let e = x.exp();
                    e / (1.0 + e)
                }
            }
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
        }
    }

    /// Derivative with respect to the pre-activation `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            },
            ActivationFunction::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_is_bounded_and_symmetric() {
        let s = ActivationFunction::Sigmoid;
        assert_eq!(s.function(0.0), 0.5);
        assert!((s.function(2.0) + s.function(-2.0) - 1.0).abs() < 1e-12);
        assert!(s.function(-800.0) >= 0.0);
        assert!(s.function(800.0) <= 1.0);
        assert!(s.function(-800.0).is_finite());
    }

    #[test]
    fn test_sigmoid_derivative_peaks_at_zero() {
        let s = ActivationFunction::Sigmoid;
        assert_eq!(s.derivative(0.0), 0.25);
        assert!(s.derivative(3.0) < 0.25);
    }

    #[test]
    fn test_relu() {
        let r = ActivationFunction::ReLU;
        assert_eq!(r.function(-1.5), 0.0);
        assert_eq!(r.function(2.5), 2.5);
        assert_eq!(r.derivative(-1.0), 0.0);
        assert_eq!(r.derivative(1.0), 1.0);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ActivationFunction::ReLU).unwrap();
        assert_eq!(json, "\"relu\"");
        let back: ActivationFunction = serde_json::from_str("\"sigmoid\"").unwrap();
        assert_eq!(back, ActivationFunction::Sigmoid);
    }
}
