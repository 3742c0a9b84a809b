//! Step harness shared by every pipeline binary
//!
//! A step is a single-shot transformer: one JSON document in, one JSON
//! document out. The harness owns everything around the transformation:
//! - choosing between piped input and the built-in sample
//! - tagging failures with the step that raised them
//! - routing results to stdout/stderr and an exit status

pub mod output;


use crate::error::{ProcessingError, Result, StepError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::io::{Read, Write};
use std::process::ExitCode;

pub use output::{to_json_line, SpacedFormatter};

/// Pipeline stage identifier attached to errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    DataCleaning,
    PriceForecasting,
    SentimentAnalysis,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::DataCleaning => "data_cleaning",
            Step::PriceForecasting => "price_forecasting",
            Step::SentimentAnalysis => "sentiment_analysis",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pipeline step.
pub trait StepProcessor {
    type Output: Serialize;

    fn step(&self) -> Step;

    /// Input used when the step runs without piped data.
    fn sample_input(&self) -> &'static str;

    fn process(&self, input: &str) -> Result<Self::Output>;
}

/// Where the step's input document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text read from the pipe.
    Provided(String),
    /// The step's built-in sample document.
    Sample,
}

impl InputSource {
    /// Pick the source for this run. Interactive sessions use the sample and
    /// never touch `reader`; otherwise the whole of `reader` is the input.
    pub fn resolve<R: Read>(is_interactive: bool, mut reader: R) -> Result<Self> {
        if is_interactive {
            return Ok(InputSource::Sample);
        }
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(InputSource::Provided(text))
    }
}

/// Success line or tagged failure.
pub type StepResult = std::result::Result<String, StepError>;

/// Final status of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

/// Transform one document and render the result as a JSON line.
pub fn execute<P: StepProcessor>(processor: &P, input: &str) -> StepResult {
    processor
        .process(input)
        .and_then(|output| to_json_line(&output))
        .map_err(|source| StepError::new(processor.step(), source))
}

/// Run a step end to end, writing to the given streams.
pub fn run<P, O, E>(processor: &P, source: InputSource, stdout: &mut O, stderr: &mut E) -> Outcome
where
    P: StepProcessor,
    O: Write,
    E: Write,
{
    let step = processor.step();
    let result = match source {
        InputSource::Provided(text) => {
            tracing::debug!(%step, bytes = text.len(), "processing piped input");
            execute(processor, &text)
        }
        InputSource::Sample => {
            let sample = processor.sample_input();
            tracing::debug!(%step, "no piped input, using sample");
            writeln!(stdout, "Running with sample data: {}", sample)
                .map_err(|e| StepError::new(step, e.into()))
                .and_then(|_| execute(processor, sample))
        }
    };

    let result = result.and_then(|line| {
        writeln!(stdout, "{}", line)
            .and_then(|_| stdout.flush())
            .map_err(|e| StepError::new(step, e.into()))
    });

    match result {
        Ok(()) => {
            tracing::info!(%step, "step completed");
            Outcome::Success
        }
        Err(err) => {
            tracing::debug!(%step, error = %err, "step failed");
            report(&err, stderr);
            Outcome::Failure
        }
    }
}

/// Write the error payload for `err` as one line.
pub fn report<E: Write>(err: &StepError, stderr: &mut E) {
    let line = to_json_line(&err.payload()).unwrap_or_else(|_| {
        format!(
            "{{\"error\": \"unrenderable error\", \"step\": \"{}\"}}",
            err.step
        )
    });
    // Nowhere left to report a failing stderr.
    let _ = writeln!(stderr, "{}", line).and_then(|_| stderr.flush());
}

/// Name of a JSON value's type, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse `input` and require a JSON object at the top level.
pub fn parse_object(input: &str) -> Result<serde_json::Map<String, Value>> {
    match serde_json::from_str::<Value>(input)? {
        Value::Object(map) => Ok(map),
        other => Err(ProcessingError::NotAnObject(json_kind(&other))),
    }
}
