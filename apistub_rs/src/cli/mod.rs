//! Command-line option engine.
//!
//! ```text
//!   argv ──► entrypoint (config defaults, APISTUB_*_ARGS)
//!              │
//!              ▼
//!          parser ──► flags (lookup) ──► fs_utils (path kinds)
//!              │  └──► compat (unknown --name[=yes|no] tokens)
//!              ▼
//!          finalize (implied checks, platform jar discovery)
//!              │
//!              ▼
//!          consistency ──► update-api cancellation ──► Options
//! ```
//!
//! # Module Structure
//!
//! - [`flags`] - The flag table (source of truth for dispatch and usage)
//! - [`parser`] - Single-pass dispatcher producing [`Options`]
//! - [`compat`] - Free-form compatibility flags
//! - [`consistency`] - Cross-flag rules and `--update-api`
//! - [`help`] - Usage text rendered from the flag table
//! - [`entrypoint`] - Argument assembly and exit-code mapping for the binary

pub mod compat;
pub mod consistency;
pub mod cursor;
pub mod entrypoint;
pub mod flags;
pub mod help;
pub mod options;
pub mod parser;

pub use compat::Compatibility;
pub use options::Options;
pub use parser::{Parsed, parse_options};
