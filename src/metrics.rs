//! Error metrics for scoring forecast methods against realized demand

use crate::data::DemandSeries;
use crate::error::{ForecastError, Result};
use crate::models::Method;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Error criterion used to rank forecast methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Criterion {
    /// Mean Absolute Deviation
    Mad,
    /// Mean Squared Error
    Mse,
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Mad => f.write_str("MAD"),
            Criterion::Mse => f.write_str("MSE"),
        }
    }
}

impl FromStr for Criterion {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "MAD" => Ok(Criterion::Mad),
            "MSE" => Ok(Criterion::Mse),
            other => Err(ForecastError::UnknownCriterion(other.to_string())),
        }
    }
}

/// Error metrics for one forecast method
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MethodErrors {
    /// The method being scored
    pub method: Method,
    /// Mean Absolute Deviation
    pub mad: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Cumulative bias normalized by MAD; `None` when MAD is zero
    pub tracking_signal: Option<f64>,
}

impl fmt::Display for MethodErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: MAD {:.4}, MSE {:.4}, TS ", self.method, self.mad, self.mse)?;
        match self.tracking_signal {
            Some(ts) => write!(f, "{:.4}", ts),
            None => f.write_str("undefined"),
        }
    }
}

/// The best method under each criterion, reported independently.
///
/// No single combined winner exists: MAD and MSE weigh large errors
/// differently and can disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BestMethods {
    /// Winner and metric value under MAD
    pub by_mad: (Method, f64),
    /// Winner and metric value under MSE
    pub by_mse: (Method, f64),
}

impl fmt::Display for BestMethods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Best by MAD: {} ({:.4})", self.by_mad.0, self.by_mad.1)?;
        write!(f, "Best by MSE: {} ({:.4})", self.by_mse.0, self.by_mse.1)
    }
}

/// Per-week errors over the indices where the method's forecast is defined.
///
/// The leading weeks without a forecast are skipped, not scored as zero.
fn defined_errors(series: &DemandSeries, method: Method) -> Result<Vec<f64>> {
    let column = series
        .forecast(method)
        .ok_or(ForecastError::MissingForecastColumn(method))?;

    let errors: Vec<f64> = series
        .demand()
        .iter()
        .zip(column.iter())
        .filter_map(|(&actual, forecast)| forecast.map(|f| actual - f))
        .collect();

    if errors.is_empty() {
        return Err(ForecastError::DataError(format!(
            "Method {} has no defined forecasts to score",
            method
        )));
    }
    Ok(errors)
}

/// Mean Absolute Deviation of a method's forecast
pub fn mean_absolute_deviation(series: &DemandSeries, method: Method) -> Result<f64> {
    let errors = defined_errors(series, method)?;
    Ok(errors.iter().map(|e| e.abs()).sum::<f64>() / errors.len() as f64)
}

/// Mean Squared Error of a method's forecast
pub fn mean_squared_error(series: &DemandSeries, method: Method) -> Result<f64> {
    let errors = defined_errors(series, method)?;
    Ok(errors.iter().map(|e| e.powi(2)).sum::<f64>() / errors.len() as f64)
}

/// Tracking signal of a method's forecast.
///
/// Undefined (and reported as `None`, not an error) when MAD is zero, which
/// happens exactly when every defined forecast matched demand.
pub fn tracking_signal(series: &DemandSeries, method: Method) -> Result<Option<f64>> {
    let errors = defined_errors(series, method)?;
    let mad = errors.iter().map(|e| e.abs()).sum::<f64>() / errors.len() as f64;
    if mad == 0.0 {
        return Ok(None);
    }
    Ok(Some(errors.iter().sum::<f64>() / mad))
}

/// Score one method on all three metrics
pub fn evaluate_method(series: &DemandSeries, method: Method) -> Result<MethodErrors> {
    let errors = defined_errors(series, method)?;
    let n = errors.len() as f64;

    let mad = errors.iter().map(|e| e.abs()).sum::<f64>() / n;
    let mse = errors.iter().map(|e| e.powi(2)).sum::<f64>() / n;
    let tracking_signal = if mad == 0.0 {
        None
    } else {
        Some(errors.iter().sum::<f64>() / mad)
    };

    Ok(MethodErrors {
        method,
        mad,
        mse,
        tracking_signal,
    })
}

/// Score every method, in the fixed method order
pub fn error_table(series: &DemandSeries) -> Result<Vec<MethodErrors>> {
    Method::ALL
        .iter()
        .map(|&method| evaluate_method(series, method))
        .collect()
}

/// Pick the method with the lowest value of the given criterion.
///
/// Ties go to the method declared first in [`Method::ALL`], so repeated calls
/// on an unchanged series always return the same winner.
pub fn rank_methods(series: &DemandSeries, criterion: Criterion) -> Result<(Method, f64)> {
    let mut best: Option<(Method, f64)> = None;
    for &method in &Method::ALL {
        let value = match criterion {
            Criterion::Mad => mean_absolute_deviation(series, method)?,
            Criterion::Mse => mean_squared_error(series, method)?,
        };
        match best {
            Some((_, current)) if value >= current => {}
            _ => best = Some((method, value)),
        }
    }
    // Method::ALL is non-empty, so a winner always exists.
    best.ok_or_else(|| ForecastError::DataError("No methods to rank".to_string()))
}

/// Rank under both criteria
pub fn best_methods(series: &DemandSeries) -> Result<BestMethods> {
    Ok(BestMethods {
        by_mad: rank_methods(series, Criterion::Mad)?,
        by_mse: rank_methods(series, Criterion::Mse)?,
    })
}
