//! NASA POWER daily point API: request building, transport and response
//! parsing.
//!
//! ```text
//! GET {base_url}?parameters=RH2M&community=SB&longitude=..&latitude=..
//!     &start=YYYYMMDD&end=YYYYMMDD&format=JSON
//! ```
//!
//! The payload nests the series under `properties.parameter.<ID>` as a map
//! from `YYYYMMDD` keys to numbers (or `null`). Missing days are reported
//! with the header's `fill_value` sentinel.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use sirocco_calendar::ObsDate;
use tracing::{debug, info};

use crate::error::IoError;
use crate::query::SeriesQuery;
use crate::series::ObservationSeries;
use crate::source::SeriesSource;
use crate::validate::ValidationCollector;

/// Default endpoint of the daily point API.
pub const DEFAULT_BASE_URL: &str = "https://power.larc.nasa.gov/api/temporal/daily/point";

/// Default user community (`SB` = sustainable buildings).
pub const DEFAULT_COMMUNITY: &str = "SB";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Missing-value sentinel used when the response header omits one.
pub const DEFAULT_FILL_VALUE: f64 = -999.0;

// ---------------------------------------------------------------------------
// PowerConfig
// ---------------------------------------------------------------------------

/// Connection settings for [`PowerClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct PowerConfig {
    base_url: String,
    community: String,
    timeout_secs: u64,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            community: DEFAULT_COMMUNITY.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PowerConfig {
    /// Set the endpoint URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user community.
    pub fn with_community(mut self, community: impl Into<String>) -> Self {
        self.community = community.into();
        self
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Endpoint URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// User community.
    pub fn community(&self) -> &str {
        &self.community
    }

    /// Request timeout in seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the base URL does not parse, the
    /// community is empty, or the timeout is zero.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = ValidationCollector::new();
        if let Err(e) = Url::parse(&self.base_url) {
            c.push(format!("base_url '{}' is not a valid URL: {e}", self.base_url));
        }
        if self.community.trim().is_empty() {
            c.push("community must not be empty");
        }
        if self.timeout_secs == 0 {
            c.push("timeout_secs must be greater than 0");
        }
        c.finish()
    }
}

// ---------------------------------------------------------------------------
// PowerClient
// ---------------------------------------------------------------------------

/// Blocking HTTP client for the POWER daily point API.
#[derive(Debug, Clone)]
pub struct PowerClient {
    config: PowerConfig,
    http: reqwest::blocking::Client,
}

impl PowerClient {
    /// Creates a client after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] for a bad config, or
    /// [`IoError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: PowerConfig) -> Result<Self, IoError> {
        config.validate()?;
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, http })
    }

    /// Returns the connection settings.
    pub fn config(&self) -> &PowerConfig {
        &self.config
    }

    /// Full request URL for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the base URL does not parse.
    pub fn request_url(&self, query: &SeriesQuery) -> Result<Url, IoError> {
        let window = query.window();
        let params = [
            ("parameters", query.parameter().to_string()),
            ("community", self.config.community.clone()),
            ("longitude", query.longitude().to_string()),
            ("latitude", query.latitude().to_string()),
            ("start", window.start().to_compact()),
            ("end", window.end().to_compact()),
            ("format", "JSON".to_string()),
        ];
        Url::parse_with_params(&self.config.base_url, &params).map_err(|e| IoError::Validation {
            count: 1,
            details: format!("base_url '{}': {e}", self.config.base_url),
        })
    }

    /// Fetches the raw JSON body for `query` without parsing it.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Transport`] on connection failure, timeout or a
    /// non-success HTTP status.
    pub fn fetch_raw(&self, query: &SeriesQuery) -> Result<String, IoError> {
        let url = self.request_url(query)?;
        info!(
            parameter = query.parameter(),
            latitude = query.latitude(),
            longitude = query.longitude(),
            start = %query.window().start(),
            end = %query.window().end(),
            "requesting POWER daily series"
        );
        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(IoError::Transport {
                reason: format!("provider answered HTTP {status}"),
            });
        }
        let body = response.text()?;
        debug!(bytes = body.len(), "POWER response received");
        Ok(body)
    }
}

impl SeriesSource for PowerClient {
    fn load(&self, query: &SeriesQuery) -> Result<ObservationSeries, IoError> {
        let body = self.fetch_raw(query)?;
        parse_power_response(&body, query.parameter())
    }
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct PowerResponse {
    #[serde(default)]
    header: Option<PowerHeader>,
    #[serde(default)]
    properties: Option<PowerProperties>,
}

#[derive(Debug, Deserialize)]
struct PowerHeader {
    #[serde(default)]
    fill_value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PowerProperties {
    #[serde(default)]
    parameter: BTreeMap<String, BTreeMap<String, serde_json::Value>>,
}

/// Parses a POWER daily point response into an [`ObservationSeries`] for
/// `parameter`.
///
/// `null` values and values equal to the fill sentinel are dropped.
///
/// # Errors
///
/// Returns [`IoError::DataUnavailable`] if the body is not JSON, the
/// parameter block is missing, a date key does not parse, a value is not
/// numeric, or no usable observation remains.
pub fn parse_power_response(body: &str, parameter: &str) -> Result<ObservationSeries, IoError> {
    let response: PowerResponse = serde_json::from_str(body)
        .map_err(|e| IoError::unavailable(parameter, format!("malformed response: {e}")))?;

    let fill_value = response
        .header
        .and_then(|h| h.fill_value)
        .unwrap_or(DEFAULT_FILL_VALUE);

    let raw = response
        .properties
        .and_then(|mut p| p.parameter.remove(parameter))
        .ok_or_else(|| {
            IoError::unavailable(parameter, "response has no properties.parameter block")
        })?;

    let mut entries = Vec::with_capacity(raw.len());
    for (key, value) in raw {
        let date = ObsDate::parse_compact(&key)
            .map_err(|_| IoError::unavailable(parameter, format!("bad date key '{key}'")))?;
        let value = match value {
            serde_json::Value::Null => None,
            serde_json::Value::Number(n) => n.as_f64().filter(|v| !is_fill(*v, fill_value)),
            other => {
                return Err(IoError::unavailable(
                    parameter,
                    format!("non-numeric value {other} for {key}"),
                ));
            }
        };
        entries.push((date, value));
    }

    let series = ObservationSeries::from_entries(parameter, entries)?;
    debug!(
        parameter,
        n = series.len(),
        first = %series.first_date(),
        last = %series.last_date(),
        "parsed POWER series"
    );
    Ok(series)
}

fn is_fill(value: f64, fill_value: f64) -> bool {
    (value - fill_value).abs() < 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;
    use sirocco_calendar::HistoryWindow;

    const BODY: &str = r#"{
        "header": {"title": "NASA/POWER", "fill_value": -999.0},
        "properties": {"parameter": {"RH2M": {
            "20240103": 70.5,
            "20240101": 80.25,
            "20240102": -999.0,
            "20240104": null
        }}}
    }"#;

    #[test]
    fn parses_sorts_and_drops_fill() {
        let s = parse_power_response(BODY, "RH2M").unwrap();
        assert_eq!(s.values(), &[80.25, 70.5]);
        assert_eq!(s.first_date().to_compact(), "20240101");
        assert_eq!(s.last_date().to_compact(), "20240103");
    }

    #[test]
    fn custom_fill_value_is_honoured() {
        let body = r#"{"header":{"fill_value":-1.0},
            "properties":{"parameter":{"T2M":{"20240101":-1.0,"20240102":-999.0}}}}"#;
        let s = parse_power_response(body, "T2M").unwrap();
        assert_eq!(s.values(), &[-999.0]);
    }

    #[test]
    fn missing_parameter_is_unavailable() {
        let err = parse_power_response(BODY, "T2M").unwrap_err();
        assert!(matches!(err, IoError::DataUnavailable { .. }));
    }

    #[test]
    fn malformed_json_is_unavailable() {
        let err = parse_power_response("{not json", "RH2M").unwrap_err();
        assert!(matches!(err, IoError::DataUnavailable { .. }));
    }

    #[test]
    fn error_payload_is_unavailable() {
        let body = r#"{"messages": ["The POWER API is unavailable"], "errors": []}"#;
        let err = parse_power_response(body, "RH2M").unwrap_err();
        assert!(matches!(err, IoError::DataUnavailable { .. }));
    }

    #[test]
    fn bad_key_and_bad_value_are_unavailable() {
        let body = r#"{"properties":{"parameter":{"RH2M":{"2024-01-01":1.0}}}}"#;
        assert!(parse_power_response(body, "RH2M").is_err());
        let body = r#"{"properties":{"parameter":{"RH2M":{"20240101":"high"}}}}"#;
        assert!(parse_power_response(body, "RH2M").is_err());
    }

    #[test]
    fn all_fill_is_unavailable() {
        let body = r#"{"properties":{"parameter":{"RH2M":{"20240101":-999,"20240102":null}}}}"#;
        let err = parse_power_response(body, "RH2M").unwrap_err();
        assert!(matches!(err, IoError::DataUnavailable { .. }));
    }

    #[test]
    fn request_url_carries_query() {
        let client = PowerClient::new(PowerConfig::default()).unwrap();
        let query = SeriesQuery::new(41.9, 12.5, "RH2M", HistoryWindow::default()).unwrap();
        let url = client.request_url(&query).unwrap();
        let pairs: BTreeMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs["parameters"], "RH2M");
        assert_eq!(pairs["community"], "SB");
        assert_eq!(pairs["latitude"], "41.9");
        assert_eq!(pairs["longitude"], "12.5");
        assert_eq!(pairs["start"], "20000101");
        assert_eq!(pairs["end"], "20250101");
        assert_eq!(pairs["format"], "JSON");
        assert!(url.as_str().starts_with(DEFAULT_BASE_URL));
    }

    #[test]
    fn config_validation() {
        assert!(PowerConfig::default().validate().is_ok());
        let bad = PowerConfig::default()
            .with_base_url("not a url")
            .with_community(" ")
            .with_timeout_secs(0);
        assert!(matches!(
            bad.validate(),
            Err(IoError::Validation { count: 3, .. })
        ));
    }
}
