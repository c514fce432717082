//! Naive (one-period lag) forecast

use crate::data::DemandSeries;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastMethod, Method};

/// Naive forecast: each week's forecast is the previous week's actual demand.
///
/// The simplest unbiased baseline; it has no parameters and leaves the first
/// week without a forecast.
#[derive(Debug, Clone, Copy, Default)]
pub struct Naive;

impl Naive {
    /// Create a new naive forecaster
    pub fn new() -> Self {
        Self
    }
}

impl ForecastMethod for Naive {
    fn method(&self) -> Method {
        Method::Naive
    }

    fn fitted(&self, demand: &[f64]) -> Vec<Option<f64>> {
        let mut column = Vec::with_capacity(demand.len());
        if !demand.is_empty() {
            column.push(None);
            column.extend(demand[..demand.len() - 1].iter().map(|&d| Some(d)));
        }
        column
    }

    fn project(&self, series: &DemandSeries) -> Result<f64> {
        series
            .demand()
            .last()
            .copied()
            .ok_or_else(|| ForecastError::DataError("Empty demand series".to_string()))
    }
}
