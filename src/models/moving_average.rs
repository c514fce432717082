//! Three-week trailing moving average forecast

use crate::data::DemandSeries;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastMethod, Method};

/// Width of the trailing window
const WINDOW: usize = 3;

/// Three-week moving average: each week's forecast is the mean of the three
/// weeks strictly before it.
///
/// Only fully populated windows are used, so the first three weeks carry no
/// forecast. The trailing (non-centered) window avoids look-ahead bias.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreeWeekMovingAverage;

impl ThreeWeekMovingAverage {
    /// Create a new three-week moving average forecaster
    pub fn new() -> Self {
        Self
    }
}

impl ForecastMethod for ThreeWeekMovingAverage {
    fn method(&self) -> Method {
        Method::ThreeWeeksMA
    }

    fn fitted(&self, demand: &[f64]) -> Vec<Option<f64>> {
        (0..demand.len())
            .map(|i| {
                if i < WINDOW {
                    None
                } else {
                    Some(demand[i - WINDOW..i].iter().sum::<f64>() / WINDOW as f64)
                }
            })
            .collect()
    }

    fn project(&self, series: &DemandSeries) -> Result<f64> {
        let demand = series.demand();
        if demand.is_empty() {
            return Err(ForecastError::DataError("Empty demand series".to_string()));
        }

        // Short series fall back to the mean of everything recorded so far;
        // at exactly three observations the trailing window applies.
        let window = if demand.len() >= WINDOW {
            &demand[demand.len() - WINDOW..]
        } else {
            demand
        };
        Ok(window.iter().sum::<f64>() / window.len() as f64)
    }
}
