//! Terminal color utilities for usage text and fatal messages.
//!
//! Plain ANSI escapes; whether they are emitted is decided once per
//! [`Painter`] from the resolved [`ColorMode`] and the stream the text is
//! written to.

use std::io::IsTerminal;

use crate::error::OutputStream;
use crate::types::ColorMode;

// ============================================================================
// ANSI Color Codes
// ============================================================================

pub const RED: &str = "\x1b[31m";
pub const CYAN: &str = "\x1b[36m";

pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RESET: &str = "\x1b[0m";

// ============================================================================
// Color State
// ============================================================================

/// Determines if colors should be used based on ColorMode and whether `stream`
/// is a terminal.
pub fn is_enabled(mode: ColorMode, stream: OutputStream) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => match stream {
            OutputStream::Stdout => std::io::stdout().is_terminal(),
            OutputStream::Stderr => std::io::stderr().is_terminal(),
        },
    }
}

/// Colorizer handed to the usage renderer.
#[derive(Clone, Copy, Debug)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    /// Painter for text written to `stream`.
    pub fn new(mode: ColorMode, stream: OutputStream) -> Self {
        Self {
            enabled: is_enabled(mode, stream),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Section titles - BOLD
    pub fn header(&self, s: &str) -> String {
        self.wrap(s, BOLD)
    }

    /// Flag spellings - CYAN
    pub fn flag(&self, s: &str) -> String {
        self.wrap(s, CYAN)
    }

    /// Metavariables and hints - DIM
    pub fn dim(&self, s: &str) -> String {
        self.wrap(s, DIM)
    }

    pub fn error(&self, s: &str) -> String {
        self.wrap(s, RED)
    }

    pub fn wrap(&self, s: &str, code: &str) -> String {
        if self.enabled && !s.is_empty() {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}
