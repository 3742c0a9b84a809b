//! Market data module
//!
//! - Cleaning step (placeholder wrapper around the raw provider payload)
//! - Time-series normalization into ordered candles

pub mod cleaning;
pub mod normalize;

pub use cleaning::{CleanedOutput, CleanedPayload, CleaningMode, DataCleaner, CLEANING_MESSAGE};
pub use normalize::{normalize_time_series, parse_timestamp, Candle, ProcessedPayload};
