//! Shared command-line surface for the step binaries

use crate::config::StepsConfig;
use crate::error::StepError;
use crate::pipeline::{self, InputSource, Outcome, Step, StepProcessor};
use clap::Args;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Flags every step accepts. None are required.
#[derive(Args, Debug, Clone, Default)]
pub struct StepArgs {
    /// Ignore stdin and run on the built-in sample document
    #[arg(long)]
    pub sample: bool,

    /// Config file path (defaults apply when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Initialize logging on stderr.
///
/// Silent unless `RUST_LOG` is set or `verbose` is on: stderr is reserved
/// for the error payload.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("quantbot=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"))
    };

    // A second init (tests) is harmless.
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();
}

/// Run one step against the real process streams.
///
/// `build` turns the loaded configuration into the step's processor.
pub fn launch<P, F>(step: Step, args: &StepArgs, build: F) -> Outcome
where
    P: StepProcessor,
    F: FnOnce(&StepsConfig) -> P,
{
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let config = match StepsConfig::resolve(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            pipeline::report(&StepError::new(step, e), &mut stderr);
            return Outcome::Failure;
        }
    };
    let processor = build(&config);

    let is_interactive = args.sample || io::stdin().is_terminal();
    let source = match InputSource::resolve(is_interactive, io::stdin().lock()) {
        Ok(source) => source,
        Err(e) => {
            pipeline::report(&StepError::new(step, e), &mut stderr);
            return Outcome::Failure;
        }
    };

    pipeline::run(&processor, source, &mut stdout, &mut stderr)
}
