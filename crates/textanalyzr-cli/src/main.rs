use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod analyze_cmd;
mod cli;
mod console;
mod error;
mod validate;

use analyze_cmd::run_analyze;
use cli::Cli;
use console::Console;
use error::{output_format_hint, parse_output_format, render_error};

fn init_tracing(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default)
            .with_context(|| format!("Invalid log filter: {default}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install tracing subscriber")
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Warning: {e:#}");
    }
    debug!("Parsed CLI args: {:?}", cli);

    let fallback = output_format_hint(&cli.output_format);
    let output_format = match parse_output_format(&cli.output_format) {
        Ok(format) => format,
        Err(err) => return render_error(&err, fallback),
    };

    let result = {
        let mut console = Console::stdio()
            .with_prompts_to_stderr(output_format == error::OutputFormat::Json)
            .with_max_attempts(cli.max_attempts);
        run_analyze(&mut console, output_format)
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            debug!(kind = ?err.kind(), "Analysis ended with error");
            render_error(&err, output_format)
        }
    }
}
