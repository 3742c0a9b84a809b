//! Provider time-series normalization
//!
//! Flattens an Alpha Vantage style response
//! (`{"Time Series (5min)": {"<timestamp>": {"1. open": ..., ...}}}`)
//! into a chronologically ordered list of candles.

use crate::error::{ProcessingError, Result};
use crate::pipeline::json_kind;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const SERIES_MARKER: &str = "Time Series";

const OPEN_KEY: &str = "1. open";
const HIGH_KEY: &str = "2. high";
const LOW_KEY: &str = "3. low";
const CLOSE_KEY: &str = "4. close";
const VOLUME_KEY: &str = "5. volume";

/// One normalized interval. Values are copied from the provider untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candle {
    pub timestamp: String,
    pub open: Value,
    pub high: Value,
    pub low: Value,
    pub close: Value,
    pub volume: Value,
}

/// `{"processed_data": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessedPayload {
    pub processed_data: Vec<Candle>,
}

/// Parse intraday (`2023-10-27 15:55:00`) or daily (`2023-10-27`) stamps.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| ProcessingError::InvalidTimestamp(raw.to_string()))
}

/// Find the first top-level key naming a time series.
fn find_series(raw: &Map<String, Value>) -> Result<(&String, &Value)> {
    raw.iter()
        .find(|(key, _)| key.contains(SERIES_MARKER))
        .ok_or(ProcessingError::MissingTimeSeries)
}

/// Flatten the provider response into ascending candles.
pub fn normalize_time_series(raw: &Value) -> Result<ProcessedPayload> {
    let object = raw
        .as_object()
        .ok_or_else(|| ProcessingError::NotAnObject(json_kind(raw)))?;
    let (key, series) = find_series(object)?;
    let series = series
        .as_object()
        .ok_or_else(|| ProcessingError::InvalidSeries(key.clone()))?;

    let mut rows = Vec::with_capacity(series.len());
    for (timestamp, values) in series {
        let at = parse_timestamp(timestamp)?;
        let values = values
            .as_object()
            .ok_or_else(|| ProcessingError::InvalidEntry(timestamp.clone()))?;
        let field = |name: &str| values.get(name).cloned().unwrap_or(Value::Null);
        rows.push((
            at,
            Candle {
                timestamp: timestamp.clone(),
                open: field(OPEN_KEY),
                high: field(HIGH_KEY),
                low: field(LOW_KEY),
                close: field(CLOSE_KEY),
                volume: field(VOLUME_KEY),
            },
        ));
    }
    // Providers list newest first.
    rows.sort_by_key(|(at, _)| *at);

    tracing::debug!(series = %key, candles = rows.len(), "normalized time series");
    Ok(ProcessedPayload {
        processed_data: rows.into_iter().map(|(_, candle)| candle).collect(),
    })
}
