//! Weekly demand series handling and CSV loading

use crate::error::{ForecastError, Result};
use crate::models::Method;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One row of the source history table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekRecord {
    /// Week number
    #[serde(rename = "Week")]
    pub week: u32,
    /// Realized demand for that week
    #[serde(rename = "Demand")]
    pub demand: f64,
}

/// One row of the all-forecasts table: a week's demand plus every method's
/// forecast, `None` where the method had insufficient history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    #[serde(rename = "Week")]
    pub week: u32,
    #[serde(rename = "Demand")]
    pub demand: f64,
    #[serde(rename = "Naive")]
    pub naive: Option<f64>,
    #[serde(rename = "ThreeWeeksMA")]
    pub three_weeks_ma: Option<f64>,
    #[serde(rename = "ExponentialSmoothing")]
    pub exponential_smoothing: Option<f64>,
}

/// Ordered weekly demand series plus its derived forecast columns.
///
/// The series is the single source of truth for the pipeline: the forecast
/// engine writes one column per method into it, and every derived table
/// (error report, next-week projection, display views) is recomputed from it
/// on demand rather than cached here.
#[derive(Debug, Clone)]
pub struct DemandSeries {
    weeks: Vec<u32>,
    demand: Vec<f64>,
    forecasts: HashMap<Method, Vec<Option<f64>>>,
}

/// Data loader for weekly demand history
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a demand history from a CSV file with `Week,Demand` headers
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<DemandSeries> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a demand history from any reader producing `Week,Demand` CSV
    pub fn from_reader<R: Read>(reader: R) -> Result<DemandSeries> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut records = Vec::new();
        for row in rdr.deserialize() {
            let record: WeekRecord = row?;
            records.push(record);
        }
        DemandSeries::new(records)
    }

    /// Re-load a previously exported all-forecasts table, forecast columns
    /// included
    pub fn forecasts_from_csv<P: AsRef<Path>>(path: P) -> Result<DemandSeries> {
        let file = File::open(path)?;
        Self::forecasts_from_reader(file)
    }

    /// Reader-based variant of [`DataLoader::forecasts_from_csv`]
    pub fn forecasts_from_reader<R: Read>(reader: R) -> Result<DemandSeries> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut records = Vec::new();
        let mut naive = Vec::new();
        let mut three_weeks_ma = Vec::new();
        let mut exponential_smoothing = Vec::new();
        for row in rdr.deserialize() {
            let row: ForecastRow = row?;
            records.push(WeekRecord {
                week: row.week,
                demand: row.demand,
            });
            naive.push(row.naive);
            three_weeks_ma.push(row.three_weeks_ma);
            exponential_smoothing.push(row.exponential_smoothing);
        }

        let mut series = DemandSeries::new(records)?;
        series.set_forecast(Method::Naive, naive)?;
        series.set_forecast(Method::ThreeWeeksMA, three_weeks_ma)?;
        series.set_forecast(Method::ExponentialSmoothing, exponential_smoothing)?;
        Ok(series)
    }
}

impl DemandSeries {
    /// Create a series from history records.
    ///
    /// Weeks must be strictly increasing; duplicates or out-of-order rows are
    /// rejected rather than silently reordered.
    pub fn new(records: Vec<WeekRecord>) -> Result<Self> {
        for pair in records.windows(2) {
            if pair[1].week <= pair[0].week {
                return Err(ForecastError::DataError(format!(
                    "Weeks must be strictly increasing: week {} follows week {}",
                    pair[1].week, pair[0].week
                )));
            }
        }

        let weeks = records.iter().map(|r| r.week).collect();
        let demand = records.iter().map(|r| r.demand).collect();
        Ok(Self {
            weeks,
            demand,
            forecasts: HashMap::new(),
        })
    }

    /// Create a series from parallel week and demand columns
    pub fn from_columns(weeks: Vec<u32>, demand: Vec<f64>) -> Result<Self> {
        if weeks.len() != demand.len() {
            return Err(ForecastError::LengthMismatch {
                expected: weeks.len(),
                actual: demand.len(),
            });
        }

        let records = weeks
            .into_iter()
            .zip(demand)
            .map(|(week, demand)| WeekRecord { week, demand })
            .collect();
        Self::new(records)
    }

    /// Number of weeks in the series
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Whether the series holds no weeks
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Week numbers, ascending
    pub fn weeks(&self) -> &[u32] {
        &self.weeks
    }

    /// Realized demand values, aligned with [`DemandSeries::weeks`]
    pub fn demand(&self) -> &[f64] {
        &self.demand
    }

    /// Record at a positional index
    pub fn record(&self, index: usize) -> Option<WeekRecord> {
        Some(WeekRecord {
            week: *self.weeks.get(index)?,
            demand: *self.demand.get(index)?,
        })
    }

    /// Demand for a specific week number, if recorded
    pub fn demand_for_week(&self, week: u32) -> Option<f64> {
        let index = self.weeks.binary_search(&week).ok()?;
        Some(self.demand[index])
    }

    /// Last recorded week number
    pub fn last_week(&self) -> Option<u32> {
        self.weeks.last().copied()
    }

    /// Install a forecast column for a method, replacing any previous one.
    ///
    /// The column must cover every week of the series; `None` entries mark
    /// periods where the method has insufficient history.
    pub fn set_forecast(&mut self, method: Method, column: Vec<Option<f64>>) -> Result<()> {
        if column.len() != self.len() {
            return Err(ForecastError::LengthMismatch {
                expected: self.len(),
                actual: column.len(),
            });
        }
        self.forecasts.insert(method, column);
        Ok(())
    }

    /// Forecast column for a method, if the engine has produced one
    pub fn forecast(&self, method: Method) -> Option<&[Option<f64>]> {
        self.forecasts.get(&method).map(|c| c.as_slice())
    }
}
