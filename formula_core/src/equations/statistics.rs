//! # Least-Squares Linear Regression
//!
//! Ordinary least squares fit of `y = m·x + b` through paired samples.
//!
//! ## Notation
//!
//! - `x̄`, `ȳ` = Sample means
//! - `Sxx` = Σ(x − x̄)²
//! - `Syy` = Σ(y − ȳ)²
//! - `Sxy` = Σ(x − x̄)(y − ȳ)
//!
//! ## Formulas
//!
//! ```text
//! m  = Sxy / Sxx
//! b  = ȳ − m·x̄
//! r  = Sxy / √(Sxx·Syy)
//! R² = r²
//! ```

use serde::{Deserialize, Serialize};

/// Centered sums of a paired data set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionSums {
    pub n: usize,
    pub mean_x: f64,
    pub mean_y: f64,
    pub sxx: f64,
    pub syy: f64,
    pub sxy: f64,
}

/// Compute means and centered sums.
///
/// Centering before summing keeps precision for data far from the origin.
/// Callers guarantee `xs.len() == ys.len() >= 1`.
pub fn regression_sums(xs: &[f64], ys: &[f64]) -> RegressionSums {
    let n = xs.len();
    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    RegressionSums {
        n,
        mean_x,
        mean_y,
        sxx,
        syy,
        sxy,
    }
}

/// m = Sxy / Sxx
#[inline]
pub fn slope(sums: &RegressionSums) -> f64 {
    sums.sxy / sums.sxx
}

/// b = ȳ − m·x̄
#[inline]
pub fn intercept(sums: &RegressionSums, slope: f64) -> f64 {
    sums.mean_y - slope * sums.mean_x
}

/// Pearson correlation r = Sxy / √(Sxx·Syy)
///
/// Undefined (NaN) when either variance is zero; callers check first.
#[inline]
pub fn correlation(sums: &RegressionSums) -> f64 {
    sums.sxy / (sums.sxx * sums.syy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_collinear_fit() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys: Vec<f64> = xs.iter().map(|x| 2.5 * x - 1.0).collect();
        let sums = regression_sums(&xs, &ys);
        let m = slope(&sums);
        assert_relative_eq!(m, 2.5, max_relative = 1e-12);
        assert_relative_eq!(intercept(&sums, m), -1.0, max_relative = 1e-12);
        assert_relative_eq!(correlation(&sums), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_noisy_fit() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [2.0, 3.0, 5.0, 4.0];
        let sums = regression_sums(&xs, &ys);
        assert_relative_eq!(sums.mean_x, 2.5);
        assert_relative_eq!(sums.sxx, 5.0);
        assert_relative_eq!(sums.sxy, 4.0);
        assert_relative_eq!(slope(&sums), 0.8);
        assert_relative_eq!(intercept(&sums, 0.8), 1.5, max_relative = 1e-12);
        assert_relative_eq!(correlation(&sums), 0.8, max_relative = 1e-12);
    }
}
