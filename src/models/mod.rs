//! Forecasting methods for weekly demand series

use crate::data::DemandSeries;
use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Debug;
use std::str::FromStr;

pub mod exponential_smoothing;
pub mod moving_average;
pub mod naive;

pub use exponential_smoothing::ExponentialSmoothing;
pub use moving_average::ThreeWeekMovingAverage;
pub use naive::Naive;

/// The closed set of forecasting methods.
///
/// Declaration order is load-bearing: it fixes the column order of every
/// exported table and breaks ties when ranking methods by error metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Previous week's actual value
    Naive,
    /// Mean of the trailing three weeks
    ThreeWeeksMA,
    /// Recursive exponentially weighted average
    ExponentialSmoothing,
}

impl Method {
    /// Every method, in declaration order
    pub const ALL: [Method; 3] = [
        Method::Naive,
        Method::ThreeWeeksMA,
        Method::ExponentialSmoothing,
    ];

    /// Stable column name used in tables and exports
    pub fn column_name(&self) -> &'static str {
        match self {
            Method::Naive => "Naive",
            Method::ThreeWeeksMA => "ThreeWeeksMA",
            Method::ExponentialSmoothing => "ExponentialSmoothing",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Method {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Naive" => Ok(Method::Naive),
            "ThreeWeeksMA" => Ok(Method::ThreeWeeksMA),
            "ExponentialSmoothing" => Ok(Method::ExponentialSmoothing),
            other => Err(ForecastError::InvalidParameter(format!(
                "Unknown forecast method: {}",
                other
            ))),
        }
    }
}

/// A forecasting method that can fit a whole series and project one period
/// ahead
pub trait ForecastMethod: Debug {
    /// Which member of the closed method set this is
    fn method(&self) -> Method;

    /// One-step-ahead in-sample forecasts, aligned by index with `demand`.
    ///
    /// Entries are `None` where the method has insufficient history; they are
    /// kept in the column (never dropped, never zeroed) so downstream tables
    /// show the gaps explicitly.
    fn fitted(&self, demand: &[f64]) -> Vec<Option<f64>>;

    /// Forecast for the period immediately after the last recorded week
    fn project(&self, series: &DemandSeries) -> Result<f64>;
}
