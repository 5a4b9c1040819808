//! Command-line parser for apistub.
//!
//! This module is organized into focused submodules:
//! - `core`: compat pre-scan, the flag dispatcher and post-scan finalization
//! - `helpers`: yes/no and integer coercion, list splitting, flag suggestions

mod core;
pub mod helpers;

pub use self::core::{Parsed, compat_output_requested, parse_options};
