//! Fixed-shape views of a demand series for display and export
//!
//! Every consumer (dashboard tables, chart renderers, file export) goes
//! through these projections, so column names and order stay identical no
//! matter how the series is stored internally.

use crate::data::{DemandSeries, ForecastRow, WeekRecord};
use crate::error::{ForecastError, Result};
use crate::metrics::{error_table, MethodErrors};
use crate::models::Method;
use crate::projector::NextWeekForecast;
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// `Week, Demand` — the history table with no derived columns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActualDemandView {
    rows: Vec<WeekRecord>,
}

/// `Week, Demand, Naive, ThreeWeeksMA, ExponentialSmoothing`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllForecastsView {
    rows: Vec<ForecastRow>,
}

/// `Method, MAD, MSE, TS` — one row per method, fixed method order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorTableView {
    rows: Vec<MethodErrors>,
}

/// `Week, Naive, ThreeWeeksMA, ExponentialSmoothing` — a single-row table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NextWeekView {
    row: NextWeekForecast,
}

/// Aligned sequences for charting one method against actual demand.
///
/// Chart rendering itself is external; this only supplies the data, with
/// forecast gaps kept as `None` so the renderer can break the line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// The method whose forecast is plotted
    pub method: Method,
    /// Week numbers, ascending
    pub week: Vec<u32>,
    /// Actual demand, aligned with `week`
    pub actual: Vec<f64>,
    /// The method's forecast, aligned with `week`
    pub forecast: Vec<Option<f64>>,
}

impl ActualDemandView {
    /// Extract the actual-demand view from a series
    pub fn from_series(series: &DemandSeries) -> Self {
        let rows = series
            .weeks()
            .iter()
            .zip(series.demand())
            .map(|(&week, &demand)| WeekRecord { week, demand })
            .collect();
        Self { rows }
    }

    /// Column names, in order
    pub fn headers() -> &'static [&'static str] {
        &["Week", "Demand"]
    }

    /// The view's rows
    pub fn rows(&self) -> &[WeekRecord] {
        &self.rows
    }

    /// Serialize the view as CSV
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Write the view to a CSV file
    pub fn to_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.write_csv(File::create(path)?)
    }
}

impl AllForecastsView {
    /// Extract the all-forecasts view from a series.
    ///
    /// Every method's column must be present, so the forecast engine has to
    /// run before this view exists.
    pub fn from_series(series: &DemandSeries) -> Result<Self> {
        let naive = series
            .forecast(Method::Naive)
            .ok_or(ForecastError::MissingForecastColumn(Method::Naive))?;
        let three_weeks_ma = series
            .forecast(Method::ThreeWeeksMA)
            .ok_or(ForecastError::MissingForecastColumn(Method::ThreeWeeksMA))?;
        let exponential_smoothing = series
            .forecast(Method::ExponentialSmoothing)
            .ok_or(ForecastError::MissingForecastColumn(
                Method::ExponentialSmoothing,
            ))?;

        let rows = (0..series.len())
            .map(|i| ForecastRow {
                week: series.weeks()[i],
                demand: series.demand()[i],
                naive: naive[i],
                three_weeks_ma: three_weeks_ma[i],
                exponential_smoothing: exponential_smoothing[i],
            })
            .collect();
        Ok(Self { rows })
    }

    /// Column names, in order
    pub fn headers() -> &'static [&'static str] {
        &["Week", "Demand", "Naive", "ThreeWeeksMA", "ExponentialSmoothing"]
    }

    /// The view's rows
    pub fn rows(&self) -> &[ForecastRow] {
        &self.rows
    }

    /// Serialize the view as CSV; undefined forecasts become empty cells
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Write the view to a CSV file
    pub fn to_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.write_csv(File::create(path)?)
    }
}

impl ErrorTableView {
    /// Score every method and lay the results out as a table
    pub fn from_series(series: &DemandSeries) -> Result<Self> {
        Ok(Self {
            rows: error_table(series)?,
        })
    }

    /// Column names, in order
    pub fn headers() -> &'static [&'static str] {
        &["Method", "MAD", "MSE", "TS"]
    }

    /// The view's rows
    pub fn rows(&self) -> &[MethodErrors] {
        &self.rows
    }

    /// Serialize the view as CSV; an undefined tracking signal becomes an
    /// empty cell
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(Self::headers())?;
        for row in &self.rows {
            let ts = match row.tracking_signal {
                Some(ts) => ts.to_string(),
                None => String::new(),
            };
            wtr.write_record(&[
                row.method.to_string(),
                row.mad.to_string(),
                row.mse.to_string(),
                ts,
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Write the view to a CSV file
    pub fn to_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.write_csv(File::create(path)?)
    }
}

impl NextWeekView {
    /// Wrap a projection as a single-row table
    pub fn new(forecast: NextWeekForecast) -> Self {
        Self { row: forecast }
    }

    /// Column names, in order
    pub fn headers() -> &'static [&'static str] {
        &["Week", "Naive", "ThreeWeeksMA", "ExponentialSmoothing"]
    }

    /// The view's single row
    pub fn row(&self) -> &NextWeekForecast {
        &self.row
    }

    /// Serialize the view as CSV
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(Self::headers())?;
        wtr.write_record(&[
            self.row.week.to_string(),
            self.row.naive.to_string(),
            self.row.three_weeks_ma.to_string(),
            self.row.exponential_smoothing.to_string(),
        ])?;
        wtr.flush()?;
        Ok(())
    }

    /// Write the view to a CSV file
    pub fn to_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.write_csv(File::create(path)?)
    }
}

/// Extract the aligned `(week, actual, forecast)` sequences for one method
pub fn chart_series(series: &DemandSeries, method: Method) -> Result<ChartSeries> {
    let forecast = series
        .forecast(method)
        .ok_or(ForecastError::MissingForecastColumn(method))?;
    Ok(ChartSeries {
        method,
        week: series.weeks().to_vec(),
        actual: series.demand().to_vec(),
        forecast: forecast.to_vec(),
    })
}

fn fmt_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => "-".to_string(),
    }
}

impl fmt::Display for ActualDemandView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>6} {:>12}", "Week", "Demand")?;
        for row in &self.rows {
            writeln!(f, "{:>6} {:>12.4}", row.week, row.demand)?;
        }
        Ok(())
    }
}

impl fmt::Display for AllForecastsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>6} {:>12} {:>12} {:>14} {:>22}",
            "Week", "Demand", "Naive", "ThreeWeeksMA", "ExponentialSmoothing"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:>6} {:>12.4} {:>12} {:>14} {:>22}",
                row.week,
                row.demand,
                fmt_cell(row.naive),
                fmt_cell(row.three_weeks_ma),
                fmt_cell(row.exponential_smoothing)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for ErrorTableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<22} {:>12} {:>14} {:>10}",
            "Method", "MAD", "MSE", "TS"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<22} {:>12.4} {:>14.4} {:>10}",
                row.method.to_string(),
                row.mad,
                row.mse,
                fmt_cell(row.tracking_signal)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for NextWeekView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>6} {:>12} {:>14} {:>22}",
            "Week", "Naive", "ThreeWeeksMA", "ExponentialSmoothing"
        )?;
        writeln!(
            f,
            "{:>6} {:>12.4} {:>14.4} {:>22.4}",
            self.row.week, self.row.naive, self.row.three_weeks_ma, self.row.exponential_smoothing
        )
    }
}
