//! Shared CLI entry point for the `apistub` binary.
//!
//! Merges the argument sources (config file, environment, process argv),
//! resolves them into [`Options`] and maps the outcome to output streams and
//! an exit code.

use std::io::Write;

use anyhow::Context;

use super::help::{usage_text, version_text};
use super::options::Options;
use super::parser::{Parsed, parse_options};
use crate::colors::Painter;
use crate::config::ApistubConfig;
use crate::error::{DriverError, OutputStream};
use crate::reporter::TracingReporter;
use crate::types::ColorMode;

/// Echo the final argument list before parsing.
pub const DUMP_ARGV_ENV: &str = "APISTUB_DUMP_ARGV";
/// Whitespace separated arguments placed before the command line.
pub const PREPEND_ARGS_ENV: &str = "APISTUB_PREPEND_ARGS";
/// Whitespace separated arguments placed after the command line.
pub const APPEND_ARGS_ENV: &str = "APISTUB_APPEND_ARGS";

/// Initialize the stderr `tracing` subscriber.
///
/// `RUST_LOG` wins; otherwise the level follows `--verbose`/`--quiet` on argv.
pub fn init_tracing(argv: &[String]) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_log_level(argv))),
        )
        .init();
}

fn default_log_level(argv: &[String]) -> &'static str {
    let mut level = "warn";
    for arg in argv {
        match arg.as_str() {
            "--verbose" => level = "info",
            "--quiet" => level = "error",
            "--generate-documentation" => break,
            _ => {}
        }
    }
    level
}

/// Whitespace separated words of an environment variable.
fn env_args(name: &str) -> Vec<String> {
    std::env::var(name)
        .map(|raw| raw.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// The full argument list: config defaults, `APISTUB_PREPEND_ARGS`, `argv`,
/// then `APISTUB_APPEND_ARGS`.
pub fn assemble_args(argv: Vec<String>, config: &ApistubConfig) -> Vec<String> {
    let mut args = config.leading_args(&argv);
    args.extend(env_args(PREPEND_ARGS_ENV));
    args.extend(argv);
    args.extend(env_args(APPEND_ARGS_ENV));
    args
}

/// Color mode for text printed before [`Options`] exist (help, errors).
fn color_for(args: &[String]) -> ColorMode {
    let mut mode = ColorMode::from_env();
    for arg in args {
        match arg.as_str() {
            "--color" => mode = ColorMode::Always,
            "--no-color" => mode = ColorMode::Never,
            "--generate-documentation" => break,
            _ => {}
        }
    }
    mode
}

/// Run the CLI on `argv` (without the program name). Returns the exit code.
pub fn run(argv: Vec<String>) -> anyhow::Result<i32> {
    let cwd = std::env::current_dir().context("Cannot determine the working directory")?;
    let config = ApistubConfig::load(&cwd);
    let args = assemble_args(argv, &config);

    if std::env::var_os(DUMP_ARGV_ENV).is_some() {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "apistub args:").context("Cannot write to stdout")?;
        for arg in &args {
            writeln!(stdout, "  {arg}").context("Cannot write to stdout")?;
        }
    }

    let color = color_for(&args);
    let mut reporter = TracingReporter;
    let outcome = match parse_options(&args, &mut reporter) {
        Ok(Parsed::Run(options)) => {
            log_summary(&options);
            return Ok(0);
        }
        Ok(Parsed::ShowHelp) => {
            DriverError::stdout(usage_text(&Painter::new(color, OutputStream::Stdout)))
        }
        Ok(Parsed::ShowVersion) => DriverError::stdout(version_text()),
        Err(err) => err,
    };
    emit(&outcome, color);
    Ok(outcome.exit_code)
}

/// Write a run-ending message to its stream. Failures get a red headline.
fn emit(outcome: &DriverError, color: ColorMode) {
    let mut text = match outcome.stream {
        OutputStream::Stdout => outcome.message.clone(),
        OutputStream::Stderr => {
            let painter = Painter::new(color, OutputStream::Stderr);
            match outcome.message.split_once('\n') {
                Some((first, rest)) => format!("{}\n{rest}", painter.error(first)),
                None => painter.error(&outcome.message),
            }
        }
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    match outcome.stream {
        OutputStream::Stdout => print!("{text}"),
        OutputStream::Stderr => eprint!("{text}"),
    }
}

fn log_summary(options: &Options) {
    tracing::info!(
        sources = options.sources.len(),
        source_path = options.source_path.len(),
        classpath = options.classpath.len(),
        checks = options.compatibility_checks.len(),
        update_api = options.update_api,
        compat_output = options.compat_output,
        "options resolved"
    );
    if let Some(jars) = &options.platform_jars {
        tracing::info!(
            highest_level = jars.highest_level(),
            "platform jars discovered"
        );
    }
}
