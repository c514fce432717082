//! Simple exponential smoothing forecast

use crate::data::DemandSeries;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastMethod, Method};

/// Simple exponential smoothing with smoothing constant `alpha`.
///
/// The forecast for the first week is seeded with the first actual
/// observation, which avoids an external seed at the cost of a perfect
/// first-period "forecast". From there each forecast is
/// `alpha * demand[i-1] + (1 - alpha) * forecast[i-1]`.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialSmoothing {
    /// Smoothing parameter
    alpha: f64,
}

impl ExponentialSmoothing {
    /// Create a new exponential smoothing forecaster.
    ///
    /// `alpha` must lie in `(0, 1]`.
    pub fn new(alpha: f64) -> Result<Self> {
        if alpha <= 0.0 || alpha > 1.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "Alpha must be in (0, 1], got {}",
                alpha
            )));
        }
        Ok(Self { alpha })
    }

    /// The smoothing parameter
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl ForecastMethod for ExponentialSmoothing {
    fn method(&self) -> Method {
        Method::ExponentialSmoothing
    }

    fn fitted(&self, demand: &[f64]) -> Vec<Option<f64>> {
        // Strictly sequential recurrence: each value depends on the previous
        // one, so this is a fold over the demand sequence.
        let mut column = Vec::with_capacity(demand.len());
        let mut level = match demand.first() {
            Some(&first) => first,
            None => return column,
        };
        column.push(Some(level));

        for &observed in &demand[..demand.len() - 1] {
            level = self.alpha * observed + (1.0 - self.alpha) * level;
            column.push(Some(level));
        }
        column
    }

    fn project(&self, series: &DemandSeries) -> Result<f64> {
        let last_demand = series
            .demand()
            .last()
            .copied()
            .ok_or_else(|| ForecastError::DataError("Empty demand series".to_string()))?;

        // The projection continues the recurrence from the column's final
        // value, so the full-series pass must have run first.
        let last_forecast = series
            .forecast(Method::ExponentialSmoothing)
            .and_then(|column| column.last().copied())
            .flatten()
            .ok_or(ForecastError::MissingPriorForecast(
                Method::ExponentialSmoothing,
            ))?;

        Ok(self.alpha * last_demand + (1.0 - self.alpha) * last_forecast)
    }
}
