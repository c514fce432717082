use demand_forecast::data::{DataLoader, DemandSeries, WeekRecord};
use demand_forecast::error::ForecastError;
use demand_forecast::models::Method;
use std::io::Write;
use tempfile::NamedTempFile;

fn sample_records() -> Vec<WeekRecord> {
    vec![
        WeekRecord { week: 1, demand: 10.0 },
        WeekRecord { week: 2, demand: 12.0 },
        WeekRecord { week: 3, demand: 11.0 },
        WeekRecord { week: 4, demand: 13.0 },
    ]
}

#[test]
fn test_series_construction() {
    let series = DemandSeries::new(sample_records()).unwrap();

    assert_eq!(series.len(), 4);
    assert!(!series.is_empty());
    assert_eq!(series.weeks(), &[1, 2, 3, 4]);
    assert_eq!(series.demand(), &[10.0, 12.0, 11.0, 13.0]);
    assert_eq!(series.last_week(), Some(4));
}

#[test]
fn test_series_rejects_unsorted_weeks() {
    let records = vec![
        WeekRecord { week: 2, demand: 10.0 },
        WeekRecord { week: 1, demand: 12.0 },
    ];

    match DemandSeries::new(records) {
        Err(ForecastError::DataError(_)) => {}
        other => panic!("Expected DataError, got {:?}", other),
    }
}

#[test]
fn test_series_rejects_duplicate_weeks() {
    let records = vec![
        WeekRecord { week: 1, demand: 10.0 },
        WeekRecord { week: 1, demand: 12.0 },
    ];

    assert!(DemandSeries::new(records).is_err());
}

#[test]
fn test_from_columns_length_mismatch() {
    match DemandSeries::from_columns(vec![1, 2, 3], vec![10.0, 12.0]) {
        Err(ForecastError::LengthMismatch { expected, actual }) => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("Expected LengthMismatch, got {:?}", other),
    }
}

#[test]
fn test_access_by_index_and_week() {
    let series = DemandSeries::new(sample_records()).unwrap();

    let record = series.record(2).unwrap();
    assert_eq!(record.week, 3);
    assert_eq!(record.demand, 11.0);
    assert!(series.record(4).is_none());

    assert_eq!(series.demand_for_week(2), Some(12.0));
    assert_eq!(series.demand_for_week(9), None);
}

#[test]
fn test_set_forecast_length_check() {
    let mut series = DemandSeries::new(sample_records()).unwrap();

    // Too short for the series
    let err = series
        .set_forecast(Method::Naive, vec![None, Some(10.0)])
        .unwrap_err();
    match err {
        ForecastError::LengthMismatch { expected, actual } => {
            assert_eq!(expected, 4);
            assert_eq!(actual, 2);
        }
        other => panic!("Expected LengthMismatch, got {:?}", other),
    }
    assert!(series.forecast(Method::Naive).is_none());

    // Exact length installs the column, gaps included
    let column = vec![None, Some(10.0), Some(12.0), Some(11.0)];
    series.set_forecast(Method::Naive, column.clone()).unwrap();
    assert_eq!(series.forecast(Method::Naive).unwrap(), column.as_slice());
}

#[test]
fn test_set_forecast_replaces_previous_column() {
    let mut series = DemandSeries::new(sample_records()).unwrap();

    series
        .set_forecast(Method::Naive, vec![None, Some(1.0), Some(2.0), Some(3.0)])
        .unwrap();
    series
        .set_forecast(Method::Naive, vec![None, Some(10.0), Some(12.0), Some(11.0)])
        .unwrap();

    assert_eq!(
        series.forecast(Method::Naive).unwrap()[3],
        Some(11.0),
        "re-running a method must replace its column wholesale"
    );
}

#[test]
fn test_load_from_csv() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Week,Demand").unwrap();
    writeln!(file, "1,100").unwrap();
    writeln!(file, "2,110.5").unwrap();
    writeln!(file, "3,95").unwrap();

    let series = DataLoader::from_csv(file.path()).unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series.weeks(), &[1, 2, 3]);
    assert_eq!(series.demand(), &[100.0, 110.5, 95.0]);
}

#[test]
fn test_load_from_csv_rejects_bad_weeks() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Week,Demand").unwrap();
    writeln!(file, "3,100").unwrap();
    writeln!(file, "1,110").unwrap();

    assert!(DataLoader::from_csv(file.path()).is_err());
}

#[test]
fn test_forecasts_from_reader() {
    let csv = "\
Week,Demand,Naive,ThreeWeeksMA,ExponentialSmoothing
1,10,,,10
2,12,10,,10
3,11,12,,10.2
4,13,11,11,10.28
";

    let series = DataLoader::forecasts_from_reader(csv.as_bytes()).unwrap();
    assert_eq!(series.len(), 4);
    assert_eq!(
        series.forecast(Method::Naive).unwrap(),
        &[None, Some(10.0), Some(12.0), Some(11.0)]
    );
    assert_eq!(
        series.forecast(Method::ThreeWeeksMA).unwrap(),
        &[None, None, None, Some(11.0)]
    );
    assert_eq!(
        series.forecast(Method::ExponentialSmoothing).unwrap(),
        &[Some(10.0), Some(10.0), Some(10.2), Some(10.28)]
    );
}
