//! recurra CLI entry point.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use recurra_cli::cli::{Cli, Commands};
use recurra_cli::commands::{
    read_input, render_report, run_dates, run_expand, run_series, run_validate,
};
use recurra_cli::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing subscriber. Logs go to stderr so stdout stays
    // parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                if cli.quiet {
                    "recurra=warn,recurra_cli=warn".into()
                } else {
                    "recurra=info,recurra_cli=info".into()
                }
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Commands::Expand(cmd) => {
            let config = config.with_horizon(cmd.horizon);
            let input = read_input(cmd.input.as_deref())?;
            println!("{}", run_expand(&input, &cmd, &config, cli.format)?);
        }
        Commands::Validate(cmd) => {
            let input = read_input(cmd.input.as_deref())?;
            let report = run_validate(&input, &config)?;
            println!("{}", render_report(&report, cli.format));
            if !report.valid {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Dates(cmd) => {
            let config = config.with_horizon(cmd.horizon);
            println!("{}", run_dates(&cmd, &config, cli.format)?);
        }
        Commands::Series(cmd) => {
            let input = read_input(cmd.input.as_deref())?;
            println!("{}", run_series(&input, &cmd, cli.format)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
