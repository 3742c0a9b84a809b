//! Configuration management
//!
//! Every setting has a default reproducing the placeholder behaviour, so a
//! step run without `--config` reads no files and no environment.

use crate::error::{ProcessingError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct StepsConfig {
    pub forecast: ForecastConfig,
    pub sentiment: SentimentConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ForecastConfig {
    /// Horizons returned by the placeholder forecaster, in output order
    pub horizons: Vec<HorizonConfig>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HorizonConfig {
    /// Horizon name (e.g., "next_1_interval")
    pub name: String,
    /// Placeholder price; its scale is kept in the output ("150.50")
    pub value: Decimal,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SentimentConfig {
    /// Compound score at or above which sentiment is Positive
    pub positive_threshold: f64,
    /// Compound score at or below which sentiment is Negative
    pub negative_threshold: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizons: vec![
                HorizonConfig {
                    name: "next_1_interval".to_string(),
                    value: dec!(150.50),
                },
                HorizonConfig {
                    name: "next_5_interval".to_string(),
                    value: dec!(152.00),
                },
            ],
        }
    }
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            positive_threshold: 0.05,
            negative_threshold: -0.05,
        }
    }
}

impl StepsConfig {
    /// Load configuration from file, with `QUANTBOT__SECTION__KEY` overrides
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path.to_str().ok_or_else(|| {
            ProcessingError::InvalidConfig(format!("non UTF-8 path {}", path.display()))
        })?;
        let expanded = shellexpand::tilde(name);

        let settings = config::Config::builder()
            .add_source(config::File::with_name(expanded.as_ref()))
            .add_source(config::Environment::with_prefix("QUANTBOT").separator("__"))
            .build()?;

        let config: StepsConfig = settings.try_deserialize()?;
        config.validate()?;
        tracing::debug!(path = %expanded, "loaded configuration");
        Ok(config)
    }

    /// Defaults unless a path was given.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for horizon in &self.forecast.horizons {
            if horizon.name.trim().is_empty() {
                return Err(ProcessingError::InvalidConfig(
                    "forecast horizon with empty name".to_string(),
                ));
            }
            if !seen.insert(horizon.name.as_str()) {
                return Err(ProcessingError::InvalidConfig(format!(
                    "duplicate forecast horizon {:?}",
                    horizon.name
                )));
            }
        }

        let sentiment = &self.sentiment;
        if !(sentiment.negative_threshold < 0.0 && sentiment.positive_threshold > 0.0) {
            return Err(ProcessingError::InvalidConfig(format!(
                "sentiment thresholds must straddle zero, got negative {} positive {}",
                sentiment.negative_threshold, sentiment.positive_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("quantbot-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_match_placeholders() {
        let config = StepsConfig::default();
        let horizons = &config.forecast.horizons;
        assert_eq!(horizons.len(), 2);
        assert_eq!(horizons[0].name, "next_1_interval");
        assert_eq!(horizons[0].value.to_string(), "150.50");
        assert_eq!(horizons[1].name, "next_5_interval");
        assert_eq!(horizons[1].value.to_string(), "152.00");
        assert_eq!(config.sentiment.positive_threshold, 0.05);
        assert_eq!(config.sentiment.negative_threshold, -0.05);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_partial_sections_use_defaults() {
        let config: StepsConfig = toml::from_str(
            r#"
            [sentiment]
            positive_threshold = 0.2
            "#,
        )
        .unwrap();
        assert_eq!(config.sentiment.positive_threshold, 0.2);
        assert_eq!(config.sentiment.negative_threshold, -0.05);
        assert_eq!(config.forecast, ForecastConfig::default());
    }

    #[test]
    fn test_toml_horizons_keep_order_and_scale() {
        let config: StepsConfig = toml::from_str(
            r#"
            [[forecast.horizons]]
            name = "next_3_interval"
            value = "99.10"

            [[forecast.horizons]]
            name = "next_1_interval"
            value = "98.00"
            "#,
        )
        .unwrap();
        let names: Vec<_> = config.forecast.horizons.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["next_3_interval", "next_1_interval"]);
        assert_eq!(config.forecast.horizons[1].value.to_string(), "98.00");
    }

    #[test]
    fn test_resolve_without_path_is_default() {
        assert_eq!(StepsConfig::resolve(None).unwrap(), StepsConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_config(
            "load.toml",
            r#"
            [sentiment]
            positive_threshold = 0.1
            negative_threshold = -0.1
            "#,
        );
        let config = StepsConfig::load(&path).unwrap();
        assert_eq!(config.sentiment.positive_threshold, 0.1);
        assert_eq!(config.sentiment.negative_threshold, -0.1);
        assert_eq!(config.forecast, ForecastConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = StepsConfig::load("/nonexistent/quantbot.toml").unwrap_err();
        assert!(matches!(err, ProcessingError::Config(_)));
    }

    #[test]
    fn test_load_rejects_invalid_thresholds() {
        let path = temp_config(
            "inverted.toml",
            r#"
            [sentiment]
            positive_threshold = -0.5
            negative_threshold = 0.5
            "#,
        );
        let err = StepsConfig::load(&path).unwrap_err();
        assert!(matches!(err, ProcessingError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_duplicate_horizon() {
        let mut config = StepsConfig::default();
        config.forecast.horizons[1].name = "next_1_interval".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate forecast horizon"));
    }

    #[test]
    fn test_validate_zero_threshold() {
        let mut config = StepsConfig::default();
        config.sentiment.positive_threshold = 0.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("straddle zero"));
    }

    #[test]
    fn test_validate_empty_horizon_name() {
        let mut config = StepsConfig::default();
        config.forecast.horizons[0].name = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
