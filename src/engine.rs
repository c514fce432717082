//! Forecast engine: runs every method over a demand series

use crate::data::DemandSeries;
use crate::error::{ForecastError, Result};
use crate::models::{
    ExponentialSmoothing, ForecastMethod, Naive, ThreeWeekMovingAverage,
};

/// Smoothing constant used when the caller does not pick one
pub const DEFAULT_ALPHA: f64 = 0.1;

/// Computes the forecast column of every method in the fixed set and installs
/// the columns into a [`DemandSeries`].
///
/// Columns are derived data: re-running the engine (for example with a
/// different smoothing constant) replaces them wholesale rather than patching
/// them.
#[derive(Debug)]
pub struct ForecastEngine {
    naive: Naive,
    moving_average: ThreeWeekMovingAverage,
    smoothing: ExponentialSmoothing,
}

impl ForecastEngine {
    /// Create an engine with the given exponential smoothing constant
    pub fn new(alpha: f64) -> Result<Self> {
        Ok(Self {
            naive: Naive::new(),
            moving_average: ThreeWeekMovingAverage::new(),
            smoothing: ExponentialSmoothing::new(alpha)?,
        })
    }

    /// Create an engine with [`DEFAULT_ALPHA`]
    pub fn with_default_alpha() -> Self {
        match Self::new(DEFAULT_ALPHA) {
            Ok(engine) => engine,
            Err(_) => unreachable!("default alpha is in range"),
        }
    }

    /// The smoothing constant the engine was built with
    pub fn alpha(&self) -> f64 {
        self.smoothing.alpha()
    }

    /// The engine's methods in declaration order
    fn methods(&self) -> [&dyn ForecastMethod; 3] {
        [&self.naive, &self.moving_average, &self.smoothing]
    }

    /// Compute and install every forecast column
    pub fn run(&self, series: &mut DemandSeries) -> Result<()> {
        if series.is_empty() {
            return Err(ForecastError::DataError(
                "Cannot forecast an empty demand series".to_string(),
            ));
        }

        for model in self.methods() {
            let column = model.fitted(series.demand());
            series.set_forecast(model.method(), column)?;
        }
        Ok(())
    }
}
