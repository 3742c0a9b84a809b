//! Price forecasting step
//!
//! Reads cleaned data from stdin and writes a horizon-keyed forecast to
//! stdout.

use clap::Parser;
use quantbot::cli::{self, StepArgs};
use quantbot::forecast::ForecastStep;
use quantbot::pipeline::Step;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "price-forecast")]
#[command(about = "Forecast prices from cleaned market data")]
struct Cli {
    #[command(flatten)]
    common: StepArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::init_tracing(cli.common.verbose);

    cli::launch(Step::PriceForecasting, &cli.common, |config| {
        ForecastStep::from_config(&config.forecast)
    })
    .exit_code()
}
