//! Error types for the pipeline steps

use crate::pipeline::Step;
use serde::Serialize;
use thiserror::Error;

/// Everything that can go wrong while a step handles one document.
///
/// Callers never see these directly: the harness tags them with the step
/// and reports them as a single processing failure.
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("no time series found in input")]
    MissingTimeSeries,

    #[error("time series {0:?} is not an object")]
    InvalidSeries(String),

    #[error("entry at {0:?} is not an object")]
    InvalidEntry(String),

    #[error("invalid timestamp {0:?}")]
    InvalidTimestamp(String),

    #[error("model failure: {0:#}")]
    Model(#[from] anyhow::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProcessingError>;

/// A processing failure attributed to the step that raised it.
#[derive(Error, Debug)]
#[error("{step} failed: {source}")]
pub struct StepError {
    pub step: Step,
    #[source]
    pub source: ProcessingError,
}

impl StepError {
    pub fn new(step: Step, source: ProcessingError) -> Self {
        Self { step, source }
    }

    /// The document written to stderr for this failure.
    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload {
            error: self.source.to_string(),
            step: self.step,
        }
    }
}

/// Wire shape of a failure: `{"error": "...", "step": "..."}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorPayload {
    pub error: String,
    pub step: Step,
}
