//! Price forecasting
//!
//! The step extracts a close-price series from cleaned data and hands it to a
//! [`PriceForecaster`]. Real models (ARIMA, Prophet, ...) plug in behind the
//! trait; the shipped implementation returns configured placeholder prices.

pub mod placeholder;
pub mod step;

pub use placeholder::PlaceholderForecaster;
pub use step::{extract_series, ForecastResult, ForecastStep, FORECAST_MESSAGE};

use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One observation of the input series.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub timestamp: Option<String>,
    pub close: Decimal,
}

/// Horizon-keyed price map, in insertion order.
///
/// Serialized as a JSON object whose values are decimal strings, keeping the
/// scale of each price (`"152.00"`, not `152`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    horizons: Vec<(String, Decimal)>,
}

impl Forecast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the price for a horizon, replacing any earlier value.
    pub fn insert(&mut self, horizon: impl Into<String>, price: Decimal) {
        let horizon = horizon.into();
        match self.horizons.iter_mut().find(|(name, _)| *name == horizon) {
            Some(slot) => slot.1 = price,
            None => self.horizons.push((horizon, price)),
        }
    }

    pub fn with(mut self, horizon: impl Into<String>, price: Decimal) -> Self {
        self.insert(horizon, price);
        self
    }

    pub fn get(&self, horizon: &str) -> Option<Decimal> {
        self.horizons
            .iter()
            .find(|(name, _)| name == horizon)
            .map(|(_, price)| *price)
    }

    pub fn len(&self) -> usize {
        self.horizons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.horizons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.horizons.iter().map(|(name, price)| (name.as_str(), *price))
    }
}

impl Serialize for Forecast {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.horizons.len()))?;
        for (name, price) in &self.horizons {
            map.serialize_entry(name, &price.to_string())?;
        }
        map.end()
    }
}

/// Forecasting model: time series in, horizon-keyed prices out.
#[cfg_attr(test, mockall::automock)]
pub trait PriceForecaster {
    fn forecast(&self, series: &[PricePoint]) -> anyhow::Result<Forecast>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_forecast_keeps_insertion_order() {
        let forecast = Forecast::new()
            .with("next_5_interval", dec!(152.00))
            .with("next_1_interval", dec!(150.50));
        let names: Vec<_> = forecast.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["next_5_interval", "next_1_interval"]);
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut forecast = Forecast::new().with("next_1_interval", dec!(1));
        forecast.insert("next_1_interval", dec!(2));
        assert_eq!(forecast.len(), 1);
        assert_eq!(forecast.get("next_1_interval"), Some(dec!(2)));
    }

    #[test]
    fn test_get_missing() {
        assert!(Forecast::new().get("next_1_interval").is_none());
        assert!(Forecast::new().is_empty());
    }

    #[test]
    fn test_serializes_prices_as_strings() {
        let forecast = Forecast::new()
            .with("next_1_interval", dec!(150.50))
            .with("next_5_interval", dec!(152.00));
        let json = serde_json::to_string(&forecast).unwrap();
        assert_eq!(json, r#"{"next_1_interval":"150.50","next_5_interval":"152.00"}"#);
    }
}
