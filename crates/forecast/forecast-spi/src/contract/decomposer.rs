//! Trait for time series decomposition

use crate::model::DecompositionResult;

/// Trait for time series decomposition
pub trait Decomposer: Send + Sync {
    /// Decompose a time series into trend, seasonal, and residual components
    fn decompose(&self, data: &[f64], period: usize) -> DecompositionResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock implementation: flat trend at the series mean
    struct MeanDecomposer;

    impl Decomposer for MeanDecomposer {
        fn decompose(&self, data: &[f64], period: usize) -> DecompositionResult {
            let n = data.len();
            let mean = if n == 0 {
                0.0
            } else {
                data.iter().sum::<f64>() / n as f64
            };

            let mut sums = vec![0.0; period];
            let mut counts = vec![0usize; period];
            for (i, &v) in data.iter().enumerate() {
                sums[i % period] += v - mean;
                counts[i % period] += 1;
            }
            let seasonal: Vec<f64> = sums
                .iter()
                .zip(&counts)
                .map(|(s, &c)| if c > 0 { s / c as f64 } else { 0.0 })
                .collect();

            let residual = data
                .iter()
                .enumerate()
                .map(|(i, &v)| v - mean - seasonal[i % period])
                .collect();

            DecompositionResult {
                trend: vec![mean; n],
                seasonal,
                residual,
            }
        }
    }

    #[test]
    fn test_trait_object_usage() {
        let decomposer: Box<dyn Decomposer> = Box::new(MeanDecomposer);
        let data = vec![10.0, 20.0, 10.0, 20.0];
        let result = decomposer.decompose(&data, 2);

        assert_eq!(result.period(), 2);
        assert_eq!(result.trend, vec![15.0; 4]);
        assert_eq!(result.seasonal, vec![-5.0, 5.0]);
        for (i, &v) in data.iter().enumerate() {
            let rebuilt = result.trend[i] + result.seasonal_at(i) + result.residual[i];
            assert!((rebuilt - v).abs() < 1e-12);
        }
    }

    #[test]
    fn test_decomposer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeanDecomposer>();
    }
}
