//! Placeholder forecaster (fixed prices)

use super::{Forecast, PriceForecaster, PricePoint};
use crate::config::ForecastConfig;

/// Returns the configured horizon prices whatever the input series.
pub struct PlaceholderForecaster {
    forecast: Forecast,
}

impl PlaceholderForecaster {
    pub fn new(config: &ForecastConfig) -> Self {
        let forecast = config
            .horizons
            .iter()
            .fold(Forecast::new(), |acc, h| acc.with(h.name.clone(), h.value));
        Self { forecast }
    }
}

impl Default for PlaceholderForecaster {
    fn default() -> Self {
        Self::new(&ForecastConfig::default())
    }
}

impl PriceForecaster for PlaceholderForecaster {
    fn forecast(&self, series: &[PricePoint]) -> anyhow::Result<Forecast> {
        tracing::debug!(points = series.len(), "placeholder forecast ignores input series");
        Ok(self.forecast.clone())
    }
}
