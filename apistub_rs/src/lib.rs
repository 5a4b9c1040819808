//! # apistub
//!
//! **Option engine for an API signature and stub generator.** Turns a flat
//! command line into a validated, internally consistent [`Options`].
//!
//! ## Features
//!
//! - **Single-pass dispatch** - one flag table, synonyms, `--flag=value` forms
//! - **Path kinds** - existing/new files and directories validated (and
//!   prepared) as they are parsed, with `@listfile` indirection
//! - **Compatibility flags** - any `--some-setting[=yes|no]` binds to the
//!   matching signature compatibility setting
//! - **Platform jar discovery** - contiguous API levels from `%` patterns
//! - **Update mode** - `--update-api` cancels every non-signature output
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use apistub::{Parsed, parse_options, reporter::TracingReporter};
//!
//! let args: Vec<String> = vec!["--api".into(), "out/api.txt".into()];
//! let mut reporter = TracingReporter;
//! match parse_options(&args, &mut reporter) {
//!     Ok(Parsed::Run(options)) => println!("{:?}", options.api_file),
//!     Ok(Parsed::ShowHelp | Parsed::ShowVersion) => {}
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! apistub --source-path src --api api/current.txt --stubs out/stubs
//! apistub --update-api --api api/current.txt @sources.txt
//! APISTUB_APPEND_ARGS="--verbose" apistub --help
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// Platform jar discovery for API level generation.
pub mod api_levels;

/// The option engine: flag table, dispatcher, consistency rules and the
/// binary's entry point.
///
/// # Submodules
///
/// - [`cli::flags`] - The flag table
/// - [`cli::parser`] - The dispatcher
/// - [`cli::compat`] - Compatibility flags
/// - [`cli::consistency`] - Cross-flag rules and `--update-api`
pub mod cli;

/// ANSI coloring for usage text and errors.
pub mod colors;

/// Optional `.apistub/config.toml`.
pub mod config;

/// [`DriverError`] and [`PathError`](error::PathError).
pub mod error;

/// Path resolution by kind, home expansion and `@listfile` reading.
///
/// - [`PathKind`](fs_utils::PathKind) - what a flag expects at a path
/// - [`resolve`](fs_utils::resolve) / [`resolve_list`](fs_utils::resolve_list)
/// - [`existing_files`](fs_utils::existing_files) - source lists with `@file`
pub mod fs_utils;

/// Diagnostics sink for non-fatal messages.
pub mod reporter;

/// Common types used throughout the crate.
pub mod types;

// ============================================================================
// Re-exports for convenience
// ============================================================================

/// Resolved configuration.
pub use cli::Options;

/// Outcome of a successful parse.
pub use cli::Parsed;

/// Main parsing function.
pub use cli::parse_options;

/// Fatal parse error.
pub use error::DriverError;

/// Discovered platform jars.
pub use api_levels::PlatformJars;

/// Color mode (Auto, Always, Never).
pub use types::ColorMode;
