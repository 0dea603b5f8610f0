//! Color Themer - command-line palette generator
//!
//! Generates tonal palettes from base colors, keeps them in a local data
//! file, and exports them for stylesheets and Tailwind configs.

use clap::Parser;
use color_themer::cli::Cli;
use color_themer::constants::APP_BINARY_NAME;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let filter = if cli.global.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.execute() {
        eprintln!("Error: {err}");
        if err.kind == color_themer::cli::ExitCode::ValidationError {
            eprintln!("Run '{APP_BINARY_NAME} --help' for usage.");
        }
        std::process::exit(err.exit_code());
    }
}
