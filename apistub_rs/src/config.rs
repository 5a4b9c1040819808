//! Configuration file support for apistub.
//!
//! Loads optional `.apistub/config.toml` from the working directory, or the
//! file named by `APISTUB_CONFIG`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::types::ColorMode;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "APISTUB_CONFIG";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ApistubConfig {
    /// Arguments placed before everything else on the command line.
    pub default_args: Vec<String>,
    /// Platform jar patterns used when the command line names none.
    pub android_jar_patterns: Vec<String>,
    /// `auto`, `always` or `never`.
    pub color: Option<String>,
}

impl ApistubConfig {
    /// Load config from `APISTUB_CONFIG`, else `.apistub/config.toml` under `root`.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => root.join(".apistub").join("config.toml"),
        };
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{err:#}");
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// The configured color preference, if it is a known mode.
    pub fn color_mode(&self) -> Option<ColorMode> {
        match self.color.as_deref()? {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            other => {
                tracing::warn!("Ignoring unknown color mode '{other}' in config");
                None
            }
        }
    }

    /// Arguments contributed by the config file, for a command line `argv`.
    ///
    /// Jar patterns only apply when `argv` does not set its own. The color
    /// preference becomes `--color`/`--no-color`, so later flags override it.
    pub fn leading_args(&self, argv: &[String]) -> Vec<String> {
        let mut args = match self.color_mode() {
            Some(ColorMode::Always) => vec!["--color".to_string()],
            Some(ColorMode::Never) => vec!["--no-color".to_string()],
            Some(ColorMode::Auto) | None => Vec::new(),
        };
        args.extend(self.default_args.iter().cloned());
        let has_patterns = argv.iter().any(|arg| {
            arg == "--android-jar-pattern" || arg.starts_with("--android-jar-pattern=")
        });
        if !has_patterns {
            for pattern in &self.android_jar_patterns {
                args.push("--android-jar-pattern".to_string());
                args.push(pattern.clone());
            }
        }
        args
    }
}
