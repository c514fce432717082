use assert_approx_eq::assert_approx_eq;
use demand_forecast::data::DataLoader;
use demand_forecast::engine::ForecastEngine;
use demand_forecast::metrics::{best_methods, rank_methods, Criterion};
use demand_forecast::models::Method;
use demand_forecast::projector::forecast_next_week;
use demand_forecast::views::{
    chart_series, ActualDemandView, AllForecastsView, ErrorTableView, NextWeekView,
};
use std::io::Write;
use tempfile::NamedTempFile;

// Helper function to create a simple weekly history file
fn create_sample_history() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();

    writeln!(file, "Week,Demand").unwrap();
    writeln!(file, "1,120.0").unwrap();
    writeln!(file, "2,132.0").unwrap();
    writeln!(file, "3,125.0").unwrap();
    writeln!(file, "4,141.0").unwrap();
    writeln!(file, "5,138.0").unwrap();
    writeln!(file, "6,129.0").unwrap();
    writeln!(file, "7,144.0").unwrap();
    writeln!(file, "8,150.0").unwrap();
    writeln!(file, "9,147.0").unwrap();
    writeln!(file, "10,153.0").unwrap();

    file
}

#[test]
fn test_full_forecast_workflow() {
    // 1. Load the weekly history
    let history = create_sample_history();
    let mut series = DataLoader::from_csv(history.path()).unwrap();
    assert_eq!(series.len(), 10);

    // 2. Run every forecast method over the series
    let engine = ForecastEngine::new(0.1).unwrap();
    engine.run(&mut series).unwrap();

    for &method in &Method::ALL {
        assert_eq!(series.forecast(method).unwrap().len(), 10);
    }
    // Gap structure: one missing week for naive, three for the moving average
    let naive = series.forecast(Method::Naive).unwrap();
    assert_eq!(naive.iter().filter(|f| f.is_some()).count(), 9);
    let ma = series.forecast(Method::ThreeWeeksMA).unwrap();
    assert_eq!(ma.iter().filter(|f| f.is_some()).count(), 7);

    // 3. Score the methods and rank them
    let best = best_methods(&series).unwrap();
    assert!(Method::ALL.contains(&best.by_mad.0));
    assert!(Method::ALL.contains(&best.by_mse.0));
    assert!(best.by_mad.1 >= 0.0);
    assert!(best.by_mse.1 >= 0.0);

    // Repeated ranking on an unchanged series returns identical results
    assert_eq!(
        rank_methods(&series, Criterion::Mad).unwrap(),
        best.by_mad
    );
    assert_eq!(
        rank_methods(&series, Criterion::Mse).unwrap(),
        best.by_mse
    );

    // 4. Project one week ahead
    let next = forecast_next_week(&series, 0.1).unwrap();
    assert_eq!(next.week, 11);
    assert_eq!(next.naive, 153.0);
    assert_approx_eq!(next.three_weeks_ma, (150.0 + 147.0 + 153.0) / 3.0);

    // 5. Every view is available and keeps its shape
    let actual = ActualDemandView::from_series(&series);
    assert_eq!(actual.rows().len(), 10);

    let all = AllForecastsView::from_series(&series).unwrap();
    assert_eq!(all.rows().len(), 10);

    let errors = ErrorTableView::from_series(&series).unwrap();
    assert_eq!(errors.rows().len(), 3);

    let next_view = NextWeekView::new(next);
    assert_eq!(next_view.row().week, 11);

    let chart = chart_series(&series, Method::ExponentialSmoothing).unwrap();
    assert_eq!(chart.week.len(), chart.actual.len());
    assert_eq!(chart.week.len(), chart.forecast.len());
}

#[test]
fn test_recomputation_from_scratch_matches() {
    // Two independent snapshots of the same source produce identical results
    let history = create_sample_history();

    let mut first = DataLoader::from_csv(history.path()).unwrap();
    let mut second = DataLoader::from_csv(history.path()).unwrap();

    let engine = ForecastEngine::new(0.2).unwrap();
    engine.run(&mut first).unwrap();
    engine.run(&mut second).unwrap();

    for &method in &Method::ALL {
        assert_eq!(
            first.forecast(method).unwrap(),
            second.forecast(method).unwrap()
        );
    }
    assert_eq!(
        best_methods(&first).unwrap(),
        best_methods(&second).unwrap()
    );
}

#[test]
fn test_rerunning_with_different_alpha_replaces_columns() {
    let history = create_sample_history();
    let mut series = DataLoader::from_csv(history.path()).unwrap();

    ForecastEngine::new(0.1).unwrap().run(&mut series).unwrap();
    let low_alpha = series
        .forecast(Method::ExponentialSmoothing)
        .unwrap()
        .to_vec();

    ForecastEngine::new(0.9).unwrap().run(&mut series).unwrap();
    let high_alpha = series.forecast(Method::ExponentialSmoothing).unwrap();

    assert_ne!(low_alpha.as_slice(), high_alpha);
    // The parameter-free columns are unchanged by the re-run
    let naive = series.forecast(Method::Naive).unwrap();
    assert_eq!(naive.iter().filter(|f| f.is_some()).count(), 9);
}

#[test]
fn test_export_and_reload_all_views() {
    let history = create_sample_history();
    let mut series = DataLoader::from_csv(history.path()).unwrap();
    ForecastEngine::new(0.1).unwrap().run(&mut series).unwrap();

    let dir = tempfile::tempdir().unwrap();

    ActualDemandView::from_series(&series)
        .to_csv_file(dir.path().join("actual.csv"))
        .unwrap();
    AllForecastsView::from_series(&series)
        .unwrap()
        .to_csv_file(dir.path().join("all.csv"))
        .unwrap();
    ErrorTableView::from_series(&series)
        .unwrap()
        .to_csv_file(dir.path().join("errors.csv"))
        .unwrap();
    NextWeekView::new(forecast_next_week(&series, 0.1).unwrap())
        .to_csv_file(dir.path().join("next.csv"))
        .unwrap();

    // The actual-demand export is itself a loadable history
    let reloaded = DataLoader::from_csv(dir.path().join("actual.csv")).unwrap();
    assert_eq!(reloaded.weeks(), series.weeks());
    assert_eq!(reloaded.demand(), series.demand());

    // The all-forecasts export reproduces every column exactly
    let reloaded = DataLoader::forecasts_from_csv(dir.path().join("all.csv")).unwrap();
    for &method in &Method::ALL {
        assert_eq!(
            reloaded.forecast(method).unwrap(),
            series.forecast(method).unwrap()
        );
    }
}
