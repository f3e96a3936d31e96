//! Integration tests for the request/response boundary.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use sirocco_calendar::ObsDate;
use sirocco_forecast::{
    Engine, EngineConfig, ForecastError, ForecastRequest, handle_request,
};
use sirocco_io::{FileSource, IoError, ObservationSeries, SeriesQuery, SeriesSource};

/// Serves a fixed series and counts loads.
struct Fixed {
    series: Result<ObservationSeries, String>,
    loads: AtomicUsize,
}

impl Fixed {
    fn new(series: Result<ObservationSeries, String>) -> Self {
        Self {
            series,
            loads: AtomicUsize::new(0),
        }
    }
}

impl SeriesSource for Fixed {
    fn load(&self, query: &SeriesQuery) -> Result<ObservationSeries, IoError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.series.clone().map_err(|reason| IoError::DataUnavailable {
            parameter: query.parameter().to_string(),
            reason,
        })
    }
}

fn request(date: &str) -> ForecastRequest {
    ForecastRequest {
        latitude: 41.9,
        longitude: 12.5,
        parameter: "RH2M".to_string(),
        forecast_date: date.to_string(),
    }
}

fn recent_series() -> ObservationSeries {
    let mut rng = rand::rngs::StdRng::seed_from_u64(21);
    let normal = Normal::new(0.0, 2.0).unwrap();
    let values: Vec<f64> = (0..400).map(|_| 65.0 + normal.sample(&mut rng)).collect();
    // ends on 2025-01-01
    let start = ObsDate::new(2025, 1, 1).unwrap().checked_add_days(-399).unwrap();
    ObservationSeries::from_daily("RH2M", start, values).unwrap()
}

#[test]
fn successful_request() {
    let engine = Engine::new(EngineConfig::default()).unwrap();
    let source = Fixed::new(Ok(recent_series()));
    let response = handle_request(&engine, &source, &request("20250501")).unwrap();
    assert!(response.predicted_value.is_finite());
    assert!(response.aic.is_finite());
    assert!(response.arima_order.d <= 1);

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["arima_order"].as_array().unwrap().len(), 3);
}

#[test]
fn bad_date_rejected_before_loading() {
    let engine = Engine::new(EngineConfig::default()).unwrap();
    let source = Fixed::new(Ok(recent_series()));
    for date in ["20241231", "20250101", "not-a-date"] {
        let err = handle_request(&engine, &source, &request(date)).unwrap_err();
        assert!(err.is_caller_error(), "{date}: {err}");
    }
    assert_eq!(source.loads.load(Ordering::SeqCst), 0);
}

#[test]
fn loader_failure_is_data_unavailable() {
    let engine = Engine::new(EngineConfig::default()).unwrap();
    let source = Fixed::new(Err("empty payload".to_string()));
    let err = handle_request(&engine, &source, &request("20250501")).unwrap_err();
    assert!(matches!(err, ForecastError::DataUnavailable { .. }));
    assert!(!err.is_caller_error());
}

#[test]
fn invalid_coordinates_are_data_unavailable() {
    let engine = Engine::new(EngineConfig::default()).unwrap();
    let source = Fixed::new(Ok(recent_series()));
    let mut req = request("20250501");
    req.latitude = 123.0;
    let err = handle_request(&engine, &source, &req).unwrap_err();
    assert!(matches!(err, ForecastError::DataUnavailable { .. }));
    assert_eq!(source.loads.load(Ordering::SeqCst), 0);
}

#[test]
fn saved_response_end_to_end() {
    let series = recent_series();
    let mut body = String::from(r#"{"header":{"fill_value":-999.0},"properties":{"parameter":{"RH2M":{"#);
    for (i, (date, value)) in series.dates().iter().zip(series.values()).enumerate() {
        if i > 0 {
            body.push(',');
        }
        body.push_str(&format!("\"{}\":{}", date.to_compact(), value));
    }
    body.push_str(r#","20250102":-999.0}}}}"#);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rh2m.json");
    std::fs::write(&path, body).unwrap();

    let engine = Engine::new(EngineConfig::default()).unwrap();
    let from_file = handle_request(&engine, &FileSource::new(&path), &request("2025-05-01")).unwrap();
    let direct = handle_request(&engine, &Fixed::new(Ok(series)), &request("20250501")).unwrap();
    assert_eq!(from_file.arima_order, direct.arima_order);
    assert!((from_file.predicted_value - direct.predicted_value).abs() < 1e-9);
}
