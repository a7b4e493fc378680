//! Crossing - client-side encrypted uploads to S3.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crossing::cli::output;
use crossing::cli::{execute, Cli};
use crossing::core::constants::LOG_ENV;

fn main() {
    let cli = Cli::parse();

    // stdout is reserved for the version report, so logs go to stderr
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.debug {
            EnvFilter::new("crossing=debug")
        } else {
            EnvFilter::new("crossing=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.aws.into()) {
        output::failure(&e);
        std::process::exit(1);
    }
}
