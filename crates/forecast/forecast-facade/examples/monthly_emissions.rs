//! Forecast a year of monthly emissions from dated records
//!
//! Run with: cargo run --example monthly_emissions -p forecast-facade

use forecast_facade::prelude::*;

fn main() -> Result<()> {
    println!("=== Monthly emissions forecast ===\n");

    // Three years of invoices, two per month
    let mut records = Vec::new();
    for i in 0..36 {
        let angle = i as f64 * std::f64::consts::PI / 6.0;
        let tonnes = 420.0 - 1.5 * i as f64 + 55.0 * angle.cos();
        let (year, month) = (2022 + i / 12, i % 12 + 1);
        records.push(DatedValue::new(format!("{year:04}-{month:02}-05"), tonnes * 0.5));
        records.push(DatedValue::new(format!("{year:04}-{month:02}-20"), tonnes * 0.5));
    }

    let series = aggregate_monthly(&records)?;
    println!("Aggregated {} records into {} months", records.len(), series.len());

    let engine = EngineBuilder::new().build()?;
    let result = engine.forecast(&series, 12)?;
    let labels = horizon_labels(&series, 12)?;

    println!("Method: {}\n", result.method);
    for (i, month) in labels.iter().enumerate() {
        println!(
            "   {}  {:>8.1}  [{:>8.1}, {:>8.1}]",
            month, result.forecasted[i], result.confidence.lower[i], result.confidence.upper[i]
        );
    }

    let meta = &result.metadata;
    println!("\nTrend slope:        {:.2} t/month", meta.trend_slope);
    println!("Seasonal strength:  {:.2}", meta.seasonal_strength);
    println!("Volatility:         {:.2}", meta.volatility);
    if let Some(r2) = meta.r2 {
        println!("R²:                 {:.3}", r2);
    }

    // Short history falls back to Holt's method
    let short = engine.forecast(&series[..8], 3)?;
    println!("\nWith 8 months of history: {} -> {:?}", short.method, short.forecasted);

    println!("\n=== Example Complete ===");
    Ok(())
}
