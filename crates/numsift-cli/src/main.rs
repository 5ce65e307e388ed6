mod commands;
mod error;
mod input;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{clean, completions, extract, reclean, Context};
use crate::error::{exit_code_for, report_error};
use numsift_config as config;
use numsift_core::RegionCode;

#[derive(Debug, Parser)]
#[command(name = "numsift", version, about = "numsift CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Default region for numbers without a country code, e.g. ZA
    #[arg(long, global = true)]
    region: Option<String>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract and validate numbers from text, files or stdin
    Clean(clean::CleanArgs),
    /// Validate a saved list again, one number per line
    Reclean(reclean::RecleanArgs),
    /// Print the candidate tokens found in the input
    Extract(extract::ExtractArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        region,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        Command::Extract(args) => extract::extract(json, args),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }

            let region_override = region
                .as_deref()
                .map(RegionCode::new)
                .transpose()
                .with_context(|| "parse --region")?;
            let ctx = Context {
                json,
                config: &app_config,
                region: region_override,
            };
            if let Some(region) = ctx.normalizer().default_region() {
                debug!(region = %region, "default region");
            }

            match command {
                Command::Clean(args) => clean::clean(&ctx, args),
                Command::Reclean(args) => reclean::reclean(&ctx, args),
                Command::Extract(_) => {
                    unreachable!("extract command handled before config load")
                }
                Command::Completions(_) => {
                    unreachable!("completions command handled before config load")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
