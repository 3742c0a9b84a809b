//! Data cleaning step
//!
//! Reads a raw provider payload from stdin and writes the cleaned document to
//! stdout. Example:
//!
//! echo '{"Time Series (5min)": {"2023-10-27 15:55:00": {"1. open": "150.00"}}}' | data-cleaner

use clap::Parser;
use quantbot::cli::{self, StepArgs};
use quantbot::data::{CleaningMode, DataCleaner};
use quantbot::pipeline::Step;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "data-cleaner")]
#[command(about = "Clean raw market data for the forecasting step")]
struct Cli {
    #[command(flatten)]
    common: StepArgs,

    /// Flatten the provider time series into ordered candles
    #[arg(long)]
    normalize: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::init_tracing(cli.common.verbose);

    let mode = if cli.normalize {
        CleaningMode::Normalize
    } else {
        CleaningMode::Passthrough
    };
    cli::launch(Step::DataCleaning, &cli.common, |_| DataCleaner::new(mode)).exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_help() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_normalize_flag() {
        assert!(Cli::parse_from(["data-cleaner", "--normalize"]).normalize);
        assert!(!Cli::parse_from(["data-cleaner"]).normalize);
    }
}
