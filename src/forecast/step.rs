//! Price forecasting step

use super::{Forecast, PlaceholderForecaster, PriceForecaster, PricePoint};
use crate::config::ForecastConfig;
use crate::error::Result;
use crate::pipeline::{parse_object, Step, StepProcessor};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};
use std::str::FromStr;

pub const FORECAST_MESSAGE: &str = "Price forecasting placeholder";

const SAMPLE_INPUT: &str =
    r#"{"processed_data": [{"timestamp": "2023-10-27 15:55:00", "close": "150.00"}]}"#;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ForecastResult {
    pub message: String,
    /// The input's `message` field, or null
    pub input_data_summary: Value,
    pub forecast: Forecast,
}

pub struct ForecastStep<F = PlaceholderForecaster> {
    model: F,
}

impl ForecastStep<PlaceholderForecaster> {
    pub fn from_config(config: &ForecastConfig) -> Self {
        Self::new(PlaceholderForecaster::new(config))
    }

    pub fn placeholder() -> Self {
        Self::new(PlaceholderForecaster::default())
    }
}

impl<F: PriceForecaster> ForecastStep<F> {
    pub fn new(model: F) -> Self {
        Self { model }
    }
}

/// Close prices from `processed_data`, skipping entries without a usable
/// `close`. Never fails: odd shapes just yield a shorter series.
pub fn extract_series(data: &Map<String, Value>) -> Vec<PricePoint> {
    let Some(entries) = data.get("processed_data").and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let entry = entry.as_object()?;
            let close = match entry.get("close")? {
                Value::String(s) => Decimal::from_str(s.trim()).ok()?,
                Value::Number(n) => parse_number(&n.to_string())?,
                _ => return None,
            };
            let timestamp = entry
                .get("timestamp")
                .and_then(Value::as_str)
                .map(str::to_string);
            Some(PricePoint { timestamp, close })
        })
        .collect()
}

/// Numbers keep their input text, which may use exponent notation.
fn parse_number(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

impl<F: PriceForecaster> StepProcessor for ForecastStep<F> {
    type Output = ForecastResult;

    fn step(&self) -> Step {
        Step::PriceForecasting
    }

    fn sample_input(&self) -> &'static str {
        SAMPLE_INPUT
    }

    fn process(&self, input: &str) -> Result<ForecastResult> {
        let data = parse_object(input)?;
        let series = extract_series(&data);
        tracing::debug!(points = series.len(), "extracted close series");

        let forecast = self.model.forecast(&series)?;
        Ok(ForecastResult {
            message: FORECAST_MESSAGE.to_string(),
            input_data_summary: data.get("message").cloned().unwrap_or(Value::Null),
            forecast,
        })
    }
}
