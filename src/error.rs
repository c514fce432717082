//! Error types for the demand_forecast crate

use crate::models::Method;
use thiserror::Error;

/// Custom error types for the demand_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// A forecast column does not line up with the series it belongs to
    #[error("Length mismatch: forecast column has {actual} rows, series has {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Ranking was requested with a criterion outside the supported set
    #[error("Unknown criterion: {0} (expected 'MAD' or 'MSE')")]
    UnknownCriterion(String),

    /// Scoring was requested for a method whose column was never computed
    #[error("Missing forecast column for method {0}")]
    MissingForecastColumn(Method),

    /// The projector was invoked before the full-series pass populated the
    /// forecast it depends on
    #[error("Missing prior forecast for method {0}: run the forecast engine over the full series first")]
    MissingPriorForecast(Method),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV operations
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
