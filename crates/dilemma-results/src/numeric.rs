//! Pluggable numeric backend for the reducers.
//!
//! The engine only ever needs three numeric capabilities: the mean and
//! population standard deviation of a repetition sequence, and the dominant
//! eigenvector of a rating matrix. They sit behind [`StatisticsProvider`] so
//! the reduction logic stays independent of which backend computes them.

use dilemma_stats::{descriptive::DescriptiveStats, eigen};

/// Numeric routines the reducers are parameterized over.
pub trait StatisticsProvider {
    /// Arithmetic mean of `values`. Empty input is backend-defined (the
    /// default provider yields NaN); the engine only passes sequences of at
    /// least one repetition.
    fn mean(&self, values: &[f64]) -> f64;

    /// Population standard deviation of `values` (divide by `n`).
    fn population_std_dev(&self, values: &[f64]) -> f64;

    /// Dominant eigenvector of a square `matrix`, unit L2 norm. The input
    /// may carry negative entries.
    fn dominant_eigenvector(&self, matrix: &[Vec<f64>]) -> Vec<f64>;
}

/// Default provider backed by `dilemma-stats`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNumerics;

impl StatisticsProvider for DefaultNumerics {
    fn mean(&self, values: &[f64]) -> f64 {
        DescriptiveStats::from_slice(values).map_or(f64::NAN, |stats| stats.mean)
    }

    fn population_std_dev(&self, values: &[f64]) -> f64 {
        DescriptiveStats::from_slice(values).map_or(f64::NAN, |stats| stats.std_dev)
    }

    fn dominant_eigenvector(&self, matrix: &[Vec<f64>]) -> Vec<f64> {
        eigen::dominant_eigenvector(matrix).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_numerics_mean_and_std_dev() {
        let provider = DefaultNumerics;
        assert_eq!(provider.mean(&[1.0, 2.0, 3.0]), 2.0);
        let std_dev = provider.population_std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((std_dev - 2.0_f64.sqrt()).abs() < 1e-12);
        assert!(provider.mean(&[]).is_nan());
    }

    #[test]
    fn test_default_numerics_eigenvector() {
        let provider = DefaultNumerics;
        let vector = provider.dominant_eigenvector(&[vec![2.0, 0.0], vec![0.0, 1.0]]);
        assert!((vector[0] - 1.0).abs() < 1e-6);
    }
}
