//! News sentiment step
//!
//! Reads `{"articles": [...]}` from stdin and writes the sentiment summary to
//! stdout.

use clap::Parser;
use quantbot::cli::{self, StepArgs};
use quantbot::pipeline::Step;
use quantbot::sentiment::SentimentStep;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sentiment-model")]
#[command(about = "Score the sentiment of fetched news articles")]
struct Cli {
    #[command(flatten)]
    common: StepArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::init_tracing(cli.common.verbose);

    cli::launch(Step::SentimentAnalysis, &cli.common, |config| {
        SentimentStep::from_config(&config.sentiment)
    })
    .exit_code()
}
