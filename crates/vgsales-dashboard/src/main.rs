//! Video game sales dashboard - command line entry point

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, info};
use vgsales_common::init_logging;
use vgsales_config::{Config, ConfigLoader};
use vgsales_dashboard::cli::{Args, Command};
use vgsales_dashboard::Dashboard;

fn main() -> ExitCode {
    let args = Args::parse();

    // Logging is configured from the file, so config errors go straight to stderr.
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let mut logging = config.logging.to_logging_config();
    if let Some(level) = &args.log_level {
        logging.level.clone_from(level);
    }
    let _guard = match init_logging(logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(args.command, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &Args) -> Result<Config> {
    match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => ConfigLoader::load().context("Failed to load configuration"),
    }
}

fn run(command: Command, config: Config) -> Result<()> {
    info!("Starting video game sales dashboard");

    let dashboard = Dashboard::load(config).context("Failed to load sales dataset")?;
    info!(
        records = dashboard.table().len(),
        platforms = dashboard.options().platforms.len(),
        genres = dashboard.options().genres.len(),
        "Dataset loaded"
    );

    let mut out = io::stdout().lock();
    match command {
        Command::Options => {
            serde_json::to_writer_pretty(&mut out, dashboard.options())?;
            writeln!(out)?;
        }
        Command::Aggregate { selection, pretty } => {
            let data = dashboard.handle(&selection.resolve(dashboard.options()));
            if pretty {
                serde_json::to_writer_pretty(&mut out, &data)?;
            } else {
                serde_json::to_writer(&mut out, &data)?;
            }
            writeln!(out)?;
        }
        Command::Render {
            selection,
            output,
            format,
        } => {
            let out_dir = output.unwrap_or_else(|| dashboard.config().output.directory.clone());
            let format = format.map_or(dashboard.config().output.format, Into::into);
            let page = dashboard
                .render(&selection.resolve(dashboard.options()), format, &out_dir)
                .context("Failed to render dashboard")?;
            writeln!(out, "{}", page.display())?;
        }
    }

    Ok(())
}
