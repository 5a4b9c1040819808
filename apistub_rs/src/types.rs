use std::fmt;
use std::path::PathBuf;

/// Codename marking a finalized platform release.
pub const RELEASED_CODENAME: &str = "REL";

/// Default search patterns for platform jars, `%` is the API level.
pub const DEFAULT_ANDROID_JAR_PATTERNS: &[&str] = &[
    "prebuilts/tools/common/api-versions/android-%/android.jar",
    "prebuilts/sdk/%/public/android.jar",
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Process-wide default, derived once from the environment.
    ///
    /// `NO_COLOR` disables color; `APISTUB_COLOR=always|never|auto` picks a mode.
    pub fn from_env() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            return ColorMode::Never;
        }
        match std::env::var("APISTUB_COLOR").as_deref() {
            Ok("always") | Ok("yes") | Ok("true") => ColorMode::Always,
            Ok("never") | Ok("no") | Ok("false") => ColorMode::Never,
            _ => ColorMode::Auto,
        }
    }
}

/// Lowest visibility level of members included in the output.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DocLevel {
    Public,
    #[default]
    Protected,
    Package,
    Private,
    Hidden,
}

/// How typedef annotations are rendered in signature files.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TypedefMode {
    #[default]
    None,
    Reference,
    Inline,
}

impl TypedefMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "none" => Some(TypedefMode::None),
            "ref" => Some(TypedefMode::Reference),
            "inline" => Some(TypedefMode::Inline),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ApiType {
    PublicApi,
    Removed,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReleaseType {
    /// Checked against the API of the in-development release.
    Dev,
    /// Checked against a previously shipped API.
    Released,
}

/// A single `--check-compatibility:*` request.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CheckRequest {
    pub file: PathBuf,
    pub api_type: ApiType,
    pub release_type: ReleaseType,
}

impl fmt::Display for CheckRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api = match self.api_type {
            ApiType::PublicApi => "api",
            ApiType::Removed => "removed",
        };
        let release = match self.release_type {
            ReleaseType::Dev => "current",
            ReleaseType::Released => "released",
        };
        write!(f, "--check-compatibility:{api}:{release} {}", self.file.display())
    }
}

/// Request to convert a signature file to JDiff XML, optionally relative to a base API.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ConvertFile {
    pub base: Option<PathBuf>,
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Severity of a diagnostic handed to a [`Reporter`](crate::reporter::Reporter).
#[derive(Clone, Copy, PartialEq, Eq, Debug, PartialOrd, Ord)]
pub enum Severity {
    Hidden,
    Info,
    Lint,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Hidden => "hidden",
            Severity::Info => "info",
            Severity::Lint => "lint",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(label)
    }
}
