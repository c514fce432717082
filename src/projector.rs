//! One-week-ahead projection for every forecast method

use crate::data::DemandSeries;
use crate::error::{ForecastError, Result};
use crate::models::{
    ExponentialSmoothing, ForecastMethod, Method, Naive, ThreeWeekMovingAverage,
};
use serde::Serialize;
use std::fmt;

/// Projected demand for the week after the last recorded one, one value per
/// method.
///
/// Derived read-only from the series; never written back into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NextWeekForecast {
    /// `last recorded week + 1`
    pub week: u32,
    /// Naive projection
    pub naive: f64,
    /// Three-week moving average projection
    pub three_weeks_ma: f64,
    /// Exponential smoothing projection
    pub exponential_smoothing: f64,
}

impl NextWeekForecast {
    /// Projected value for a method
    pub fn value(&self, method: Method) -> f64 {
        match method {
            Method::Naive => self.naive,
            Method::ThreeWeeksMA => self.three_weeks_ma,
            Method::ExponentialSmoothing => self.exponential_smoothing,
        }
    }
}

impl fmt::Display for NextWeekForecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Week {}: ", self.week)?;
        write!(
            f,
            "Naive {:.4}, ThreeWeeksMA {:.4}, ExponentialSmoothing {:.4}",
            self.naive, self.three_weeks_ma, self.exponential_smoothing
        )
    }
}

/// Project every method one week past the end of the series.
///
/// The exponential smoothing projection continues the recurrence from the
/// last value of its forecast column, so the engine must have run over the
/// full series first; invoking this before that pass fails with
/// [`ForecastError::MissingPriorForecast`].
pub fn forecast_next_week(series: &DemandSeries, alpha: f64) -> Result<NextWeekForecast> {
    let last_week = series
        .last_week()
        .ok_or_else(|| ForecastError::DataError("Empty demand series".to_string()))?;

    Ok(NextWeekForecast {
        week: last_week + 1,
        naive: Naive::new().project(series)?,
        three_weeks_ma: ThreeWeekMovingAverage::new().project(series)?,
        exponential_smoothing: ExponentialSmoothing::new(alpha)?.project(series)?,
    })
}
