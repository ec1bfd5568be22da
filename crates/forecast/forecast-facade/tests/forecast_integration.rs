//! Integration tests for the forecast stack
//!
//! Exercises decomposition, trend extrapolation, seasonal re-application and
//! smoothing together through the facade.

use forecast_facade::seasonality::apply_seasonality;
use forecast_facade::stats::mean;
use forecast_facade::{
    decompose_additive, forecast_trend, holt_linear, AdditiveDecomposer, Decomposer,
    FallbackForecaster, HoltSmoother, TrendEstimator, WeightedTrendEstimator,
};

fn monthly_energy() -> Vec<f64> {
    // Heating-driven winter peaks on a slowly rising base
    let season = [
        80.0, 60.0, 30.0, 0.0, -30.0, -50.0, -60.0, -50.0, -30.0, 0.0, 50.0, 80.0,
    ];
    (0..48)
        .map(|i| 1200.0 + 2.5 * i as f64 + season[i % 12] + ((i * 7) % 5) as f64)
        .collect()
}

#[test]
fn test_decomposition_identity() {
    let data = monthly_energy();
    let result = decompose_additive(&data, 12);

    for (i, &v) in data.iter().enumerate() {
        let rebuilt = result.trend[i] + result.seasonal[i % 12] + result.residual[i];
        assert!(
            (rebuilt - v).abs() <= 1e-9 * v.abs(),
            "identity broken at {}",
            i
        );
    }
}

#[test]
fn test_seasonal_component_is_centred() {
    for data in [monthly_energy(), vec![3.0; 20], vec![0.0, 9.0, 1.0, 7.0, 2.0]] {
        let result = AdditiveDecomposer::new().decompose(&data, 12);
        assert_eq!(result.seasonal.len(), 12);
        assert!(mean(&result.seasonal).abs() < 1e-9);
    }
}

#[test]
fn test_pipeline_by_hand() {
    let data = monthly_energy();
    let decomposition = decompose_additive(&data, 12);
    let trend = forecast_trend(&decomposition.trend, 12, 12, 0.9);
    let forecast = apply_seasonality(&trend.forecast, &decomposition.seasonal, data.len());

    assert_eq!(forecast.len(), 12);
    assert!((trend.slope - 2.5).abs() < 0.5, "slope {}", trend.slope);

    // Next January (step 0, since 48 % 12 == 0) should sit near the winter peak
    let january = forecast[0];
    let june = forecast[5];
    assert!(january > june + 80.0, "january {} june {}", january, june);
}

#[test]
fn test_estimator_trait_objects() {
    let estimator: Box<dyn TrendEstimator> = Box::new(WeightedTrendEstimator::new(6, 0.8));
    let fit = estimator.fit_trend(&[10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0], 2);
    assert!((fit.forecast[0] - 24.0).abs() < 1e-9);

    let smoother: Box<dyn FallbackForecaster> = Box::new(HoltSmoother::new(0.3, 0.1).unwrap());
    let smoothed = smoother.smooth(&[10.0, 12.0, 14.0, 16.0], 2);
    assert!((smoothed.forecast[1] - 20.0).abs() < 1e-9);
}

#[test]
fn test_holt_tracks_recent_trend() {
    let data = [50.0, 55.0, 52.0, 58.0, 60.0];
    let result = holt_linear(&data, 2, 0.3, 0.1);

    let average_delta = (data[4] - data[0]) / 4.0;
    assert!(result.trend > 0.0);
    assert!((result.trend - average_delta).abs() < 2.5);
    assert!(result.forecast[1] > result.forecast[0]);
}
