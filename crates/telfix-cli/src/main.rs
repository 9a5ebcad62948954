mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, report, tags, values, Context};
use crate::error::{exit_code_for, invalid_input, report_error};
use telfix_config as config;
use telfix_core::SeparatorProfile;

#[derive(Debug, Parser)]
#[command(name = "telfix", version, about = "telfix CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// BCP 47 locale controlling separator handling, e.g. "de-AT"
    #[arg(long, global = true)]
    locale: Option<String>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    Diff(values::DiffArgs),
    #[command(name = "diff-tags")]
    DiffTags(tags::DiffTagsArgs),
    Report(report::ReportArgs),
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
        locale,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
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

            let locale = resolve_locale(locale, &app_config)?;
            let profile = locale
                .as_deref()
                .map(SeparatorProfile::for_locale)
                .unwrap_or(SeparatorProfile::Standard);
            if verbose {
                debug!(?profile, locale = locale.as_deref().unwrap_or("-"), "separator profile selected");
            }

            let ctx = Context {
                json,
                locale,
                profile,
            };
            match command {
                Command::Diff(args) => values::diff_field(&ctx, args),
                Command::DiffTags(args) => tags::diff_keys(&ctx, args),
                Command::Report(args) => report::render_report(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before config load")
                }
            }
        }
    }
}

fn resolve_locale(flag: Option<String>, config: &config::AppConfig) -> Result<Option<String>> {
    let raw = flag.or_else(|| config.default_locale.clone());
    match raw {
        Some(raw) => {
            let locale = telfix_core::validate_locale(&raw)
                .map_err(|err| invalid_input(err.to_string()))?;
            Ok(Some(locale))
        }
        None => Ok(None),
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
        .try_init();
}
