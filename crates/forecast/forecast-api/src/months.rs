//! Month keys and monthly aggregation
//!
//! The engine itself only sees ordered values. These helpers turn dated
//! records into the sorted `YYYY-MM` series it expects, and label forecast
//! steps with the months they cover.

use chrono::{DateTime, Datelike, NaiveDate};
use forecast_spi::{ForecastError, MonthlyObservation, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || !(0..=9999).contains(&year) {
            return Err(ForecastError::InvalidPeriodKey(format!(
                "{:04}-{:02}",
                year, month
            )));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following calendar month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Month containing a calendar date (`YYYY-MM-DD`), an RFC 3339
    /// timestamp, or a bare `YYYY-MM` key
    ///
    /// Timestamps are bucketed by the date in their own offset.
    pub fn from_date(date: &str) -> Result<Self> {
        let invalid = || ForecastError::InvalidPeriodKey(date.to_string());
        if date.len() == 7 {
            return date.parse().map_err(|_| invalid());
        }

        let day = match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(day) => day,
            Err(_) => DateTime::parse_from_rfc3339(date)
                .map_err(|_| invalid())?
                .date_naive(),
        };
        Self::new(day.year(), day.month()).map_err(|_| invalid())
    }
}

impl FromStr for MonthKey {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ForecastError::InvalidPeriodKey(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A dated measurement before monthly grouping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedValue {
    /// ISO date (`YYYY-MM-DD`) or month key (`YYYY-MM`)
    pub date: String,
    pub value: f64,
}

impl DatedValue {
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// Sum dated records per month, sorted ascending
///
/// Months with no records are absent rather than zero-filled.
pub fn aggregate_monthly(records: &[DatedValue]) -> Result<Vec<MonthlyObservation>> {
    let mut totals: BTreeMap<MonthKey, f64> = BTreeMap::new();
    for record in records {
        let key = MonthKey::from_date(&record.date)?;
        *totals.entry(key).or_insert(0.0) += record.value;
    }

    tracing::debug!(
        records = records.len(),
        months = totals.len(),
        "aggregated monthly series"
    );

    Ok(totals
        .into_iter()
        .map(|(key, value)| MonthlyObservation::new(key.to_string(), value))
        .collect())
}

/// Month keys for `horizon` steps after the last observation
pub fn horizon_labels(series: &[MonthlyObservation], horizon: usize) -> Result<Vec<String>> {
    let last = series.last().ok_or(ForecastError::InsufficientData {
        required: 1,
        actual: 0,
    })?;
    let mut key: MonthKey = last.month.parse()?;

    let mut labels = Vec::new();
    for _ in 0..horizon {
        key = key.next();
        labels.push(key.to_string());
    }
    Ok(labels)
}
