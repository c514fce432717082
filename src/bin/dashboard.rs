//! Command-line shell around the forecasting pipeline.
//!
//! Loads a weekly demand history, runs every forecast method, and prints the
//! same four tables the interactive dashboard shows. Optionally exports the
//! tables as CSV files or emits them as one JSON document for an external UI.

use demand_forecast::data::DataLoader;
use demand_forecast::engine::{ForecastEngine, DEFAULT_ALPHA};
use demand_forecast::error::{ForecastError, Result};
use demand_forecast::metrics::best_methods;
use demand_forecast::projector::forecast_next_week;
use demand_forecast::views::{
    ActualDemandView, AllForecastsView, ErrorTableView, NextWeekView,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process;

struct Args {
    history: PathBuf,
    alpha: f64,
    export_dir: Option<PathBuf>,
    json: bool,
}

const USAGE: &str = "Usage: dashboard <history.csv> [--alpha A] [--export DIR] [--json]";

fn parse_args() -> std::result::Result<Args, String> {
    let mut history = None;
    let mut alpha = DEFAULT_ALPHA;
    let mut export_dir = None;
    let mut json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--alpha" => {
                let value = args.next().ok_or("--alpha requires a value")?;
                alpha = value
                    .parse()
                    .map_err(|_| format!("Invalid alpha: {}", value))?;
            }
            "--export" => {
                let dir = args.next().ok_or("--export requires a directory")?;
                export_dir = Some(PathBuf::from(dir));
            }
            "--json" => json = true,
            other if history.is_none() && !other.starts_with("--") => {
                history = Some(PathBuf::from(other));
            }
            other => return Err(format!("Unexpected argument: {}", other)),
        }
    }

    Ok(Args {
        history: history.ok_or(USAGE)?,
        alpha,
        export_dir,
        json,
    })
}

fn export_views(
    dir: &Path,
    actual: &ActualDemandView,
    all: &AllForecastsView,
    errors: &ErrorTableView,
    next_week: &NextWeekView,
) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    actual.to_csv_file(dir.join("actual_demand.csv"))?;
    all.to_csv_file(dir.join("all_forecasts.csv"))?;
    errors.to_csv_file(dir.join("error_metrics.csv"))?;
    next_week.to_csv_file(dir.join("next_week_forecast.csv"))?;
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let mut series = DataLoader::from_csv(&args.history)?;
    let engine = ForecastEngine::new(args.alpha)?;
    engine.run(&mut series)?;

    let actual = ActualDemandView::from_series(&series);
    let all = AllForecastsView::from_series(&series)?;
    let errors = ErrorTableView::from_series(&series)?;
    let best = best_methods(&series)?;
    let next_week = NextWeekView::new(forecast_next_week(&series, args.alpha)?);

    if args.json {
        let document = json!({
            "actual_demand": &actual,
            "all_forecasts": &all,
            "error_metrics": &errors,
            "best_methods": &best,
            "next_week_forecast": &next_week,
        });
        println!("{}", serde_json::to_string_pretty(&document).map_err(|e| {
            ForecastError::DataError(format!("JSON serialization failed: {}", e))
        })?);
    } else {
        println!("Actual Demand");
        println!("{}", actual);
        println!("All Forecasts (alpha = {})", args.alpha);
        println!("{}", all);
        println!("Error Metrics (MAD, MSE, TS)");
        println!("{}", errors);
        println!("Best Forecast Methods");
        println!("{}", best);
        println!();
        println!("Forecast for Next Week");
        println!("{}", next_week);
    }

    if let Some(dir) = &args.export_dir {
        export_views(dir, &actual, &all, &errors, &next_week)?;
        println!("Tables exported to {}", dir.display());
    }

    Ok(())
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    if let Err(err) = run(&args) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
