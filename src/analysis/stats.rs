//! Numeric core of the statistics engine.
//!
//! All functions are total over their documented domain and fail with
//! [`AnalysisError::DivisionByZero`] outside it (empty input, a single sample, zero variance).

use crate::error::{AnalysisError, AnalysisResult};
use crate::processing::reduce;

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> AnalysisResult<f64> {
    if values.is_empty() {
        return Err(AnalysisError::DivisionByZero { operation: "mean" });
    }
    Ok(reduce(|acc, x: &f64| acc + x, values, 0.0) / values.len() as f64)
}

/// `Σ (x - mean)²`.
pub fn sum_of_squared_deviations(values: &[f64]) -> AnalysisResult<f64> {
    let m = mean(values)?;
    Ok(reduce(|acc, x: &f64| acc + (x - m).powi(2), values, 0.0))
}

/// Sample variance with Bessel's correction (divides by `n - 1`).
pub fn sample_variance(values: &[f64]) -> AnalysisResult<f64> {
    let ss = sum_of_squared_deviations(values)?;
    if values.len() < 2 {
        return Err(AnalysisError::DivisionByZero {
            operation: "sample variance",
        });
    }
    Ok(ss / (values.len() - 1) as f64)
}

/// Sample standard deviation, `sqrt(sample_variance)`.
pub fn std_dev(values: &[f64]) -> AnalysisResult<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Pearson product-moment correlation of two equally long samples.
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> AnalysisResult<f64> {
    if xs.len() != ys.len() {
        return Err(AnalysisError::DimensionMismatch {
            expected: xs.len(),
            found: ys.len(),
        });
    }
    let mx = mean(xs)?;
    let my = mean(ys)?;
    let covariance: f64 = xs.iter().zip(ys).map(|(x, y)| (x - mx) * (y - my)).sum();
    let denominator = (sum_of_squared_deviations(xs)? * sum_of_squared_deviations(ys)?).sqrt();
    if denominator == 0.0 {
        return Err(AnalysisError::DivisionByZero {
            operation: "correlation",
        });
    }
    Ok(covariance / denominator)
}

#[cfg(test)]
mod tests {
    use super::{mean, pearson_correlation, sample_variance, std_dev, sum_of_squared_deviations};
    use crate::error::AnalysisError;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn mean_of_populations() {
        assert_eq!(mean(&[100.0, 400.0]).unwrap(), 250.0);
    }

    #[test]
    fn mean_lies_between_min_and_max() {
        let samples: [&[f64]; 4] = [
            &[1.0],
            &[3.0, -7.5, 12.25],
            &[1e9, 2.0, 3e-4, 42.0],
            &[5.0, 5.0, 5.0],
        ];
        for values in samples {
            let m = mean(values).unwrap();
            let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            assert!(lo <= m && m <= hi, "{m} not in [{lo}, {hi}]");
        }
    }

    #[test]
    fn mean_of_empty_is_division_by_zero() {
        let err = mean(&[]).unwrap_err();
        assert!(matches!(err, AnalysisError::DivisionByZero { operation: "mean" }));
    }

    #[test]
    fn std_dev_uses_n_minus_one() {
        // sqrt((150² + 150²) / 1)
        assert!(approx(std_dev(&[100.0, 400.0]).unwrap(), 212.132_034_355_964_27));
        assert!(approx(sample_variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap(), 32.0 / 7.0));
        assert_eq!(sum_of_squared_deviations(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
    }

    #[test]
    fn std_dev_is_zero_iff_values_are_equal() {
        assert_eq!(std_dev(&[3.0, 3.0, 3.0]).unwrap(), 0.0);
        assert!(std_dev(&[3.0, 3.0, 3.5]).unwrap() > 0.0);
        assert!(std_dev(&[-10.0, 4.0]).unwrap() >= 0.0);
    }

    #[test]
    fn variance_of_single_sample_is_division_by_zero() {
        let err = sample_variance(&[1.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::DivisionByZero { operation: "sample variance" }));
    }

    #[test]
    fn correlation_of_linear_samples_is_one() {
        assert!(approx(pearson_correlation(&[100.0, 400.0], &[10.0, 20.0]).unwrap(), 1.0));
        assert!(approx(pearson_correlation(&[1.0, 2.0, 3.0], &[9.0, 6.0, 3.0]).unwrap(), -1.0));
    }

    #[test]
    fn correlation_stays_within_unit_interval() {
        let xs = [1.0, 7.0, 3.0, 9.0, 4.0, 12.0];
        let ys = [2.0, 1.0, 8.0, 5.0, 5.5, 3.0];
        let r = pearson_correlation(&xs, &ys).unwrap();
        assert!((-1.0 - 1e-12..=1.0 + 1e-12).contains(&r));
    }

    #[test]
    fn correlation_with_constant_column_is_division_by_zero() {
        let err = pearson_correlation(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::DivisionByZero { operation: "correlation" }));
    }

    #[test]
    fn correlation_requires_equal_lengths() {
        let err = pearson_correlation(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::DimensionMismatch { expected: 2, found: 1 }));
    }
}
