//! Monthly observation model

use serde::{Deserialize, Serialize};

/// One month of an aggregated metric
///
/// `month` is a `YYYY-MM` key. Series handed to the engine must be sorted
/// ascending by month; the engine never reorders its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyObservation {
    /// Period key in `YYYY-MM` form
    pub month: String,
    /// Aggregated quantity for the month
    pub value: f64,
}

impl MonthlyObservation {
    pub fn new(month: impl Into<String>, value: f64) -> Self {
        Self {
            month: month.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let obs = MonthlyObservation::new("2024-03", 120.5);
        let json = serde_json::to_string(&obs).unwrap();
        assert_eq!(json, r#"{"month":"2024-03","value":120.5}"#);

        let back: MonthlyObservation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, obs);
    }
}
