//! # Demand Forecast
//!
//! A Rust library for weekly demand forecasting and forecast error scoring.
//!
//! ## Features
//!
//! - Weekly demand history handling (`Week`, `Demand` tables, CSV in/out)
//! - Forecasting methods (Naive, Three-Week Moving Average, Exponential Smoothing)
//! - Error metrics per method (MAD, MSE, Tracking Signal) with best-method ranking
//! - One-week-ahead projection for every method
//! - Fixed-shape table views for dashboards, charting, and export
//!
//! ## Quick Start
//!
//! ```no_run
//! use demand_forecast::data::DataLoader;
//! use demand_forecast::engine::ForecastEngine;
//! use demand_forecast::metrics::best_methods;
//! use demand_forecast::projector::forecast_next_week;
//! use demand_forecast::views::AllForecastsView;
//!
//! # fn main() -> demand_forecast::Result<()> {
//! // Load the weekly history
//! let mut series = DataLoader::from_csv("demand_history.csv")?;
//!
//! // Compute every forecast column
//! let engine = ForecastEngine::new(0.1)?;
//! engine.run(&mut series)?;
//!
//! // Score the methods and rank them by MAD and MSE
//! let best = best_methods(&series)?;
//! println!("{}", best);
//!
//! // Project one week past the end of the history
//! let next_week = forecast_next_week(&series, 0.1)?;
//! println!("{}", next_week);
//!
//! // Export the full forecast table
//! AllForecastsView::from_series(&series)?.to_csv_file("all_forecasts.csv")?;
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod models;
pub mod projector;
pub mod views;

// Re-export commonly used types
pub use crate::data::{DataLoader, DemandSeries, ForecastRow, WeekRecord};
pub use crate::engine::{ForecastEngine, DEFAULT_ALPHA};
pub use crate::error::{ForecastError, Result};
pub use crate::metrics::{BestMethods, Criterion, MethodErrors};
pub use crate::models::Method;
pub use crate::projector::{forecast_next_week, NextWeekForecast};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
