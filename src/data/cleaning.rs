//! Raw market data cleaning step
//!
//! Default behaviour wraps the provider payload untouched; normalization
//! into candles is opt-in.

use super::normalize::{normalize_time_series, ProcessedPayload};
use crate::error::Result;
use crate::pipeline::{Step, StepProcessor};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CLEANING_MESSAGE: &str = "Data cleaning placeholder";

const SAMPLE_INPUT: &str = r#"{"sample_key": "sample_value"}"#;

/// `{"message": ..., "original_data": <input>}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CleanedPayload {
    pub message: String,
    pub original_data: Value,
}

impl CleanedPayload {
    pub fn wrap(original_data: Value) -> Self {
        Self {
            message: CLEANING_MESSAGE.to_string(),
            original_data,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum CleanedOutput {
    Wrapped(CleanedPayload),
    Processed(ProcessedPayload),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CleaningMode {
    /// Echo the payload inside the placeholder wrapper.
    #[default]
    Passthrough,
    /// Flatten a provider time series into candles.
    Normalize,
}

#[derive(Debug, Clone, Default)]
pub struct DataCleaner {
    mode: CleaningMode,
}

impl DataCleaner {
    pub fn new(mode: CleaningMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> CleaningMode {
        self.mode
    }

    /// Clean an already parsed payload.
    pub fn clean(&self, raw: Value) -> Result<CleanedOutput> {
        match self.mode {
            CleaningMode::Passthrough => Ok(CleanedOutput::Wrapped(CleanedPayload::wrap(raw))),
            CleaningMode::Normalize => normalize_time_series(&raw).map(CleanedOutput::Processed),
        }
    }
}

impl StepProcessor for DataCleaner {
    type Output = CleanedOutput;

    fn step(&self) -> Step {
        Step::DataCleaning
    }

    fn sample_input(&self) -> &'static str {
        SAMPLE_INPUT
    }

    fn process(&self, input: &str) -> Result<CleanedOutput> {
        let raw: Value = serde_json::from_str(input)?;
        self.clean(raw)
    }
}
