//! Quantbot pipeline steps
//!
//! Single-shot JSON transformers run by an external workflow engine:
//! data cleaning, price forecasting and news sentiment. Each binary reads one
//! document from stdin and writes one document to stdout, or an error payload
//! to stderr with exit status 1.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod forecast;
pub mod pipeline;
pub mod sentiment;

#[cfg(test)]
mod error_tests;
