use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use gitscout::cli::Cli;
use gitscout::output::{self, Verbosity};
use gitscout::{DEFAULT_EMAIL, ScoutContext, commands};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    if cli.quiet {
        output::set_verbosity(Verbosity::Quiet);
    } else if cli.verbose {
        output::set_verbosity(Verbosity::Verbose);
    }

    let ctx = ScoutContext::new()?;

    // The scan path returns immediately and never falls through to stats.
    if let Some(folder) = cli.add {
        return commands::scan::execute(&ctx, &folder);
    }

    let email = cli
        .email
        .or_else(|| ctx.config.user.email.clone())
        .unwrap_or_else(|| DEFAULT_EMAIL.to_string());

    commands::stats::execute(&ctx, &email)
}
