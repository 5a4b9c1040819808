//! Error types surfaced by the option engine.

use std::io;
use std::path::PathBuf;

/// Stream a fatal message should be written to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

/// Fatal error that aborts option resolution.
///
/// The caller maps it to a process exit: print `message` on `stream`, then exit
/// with `exit_code`.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct DriverError {
    pub message: String,
    pub stream: OutputStream,
    pub exit_code: i32,
}

impl DriverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stream: OutputStream::Stderr,
            exit_code: 1,
        }
    }

    /// Output that ends the run successfully, such as usage or version text.
    pub fn stdout(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stream: OutputStream::Stdout,
            exit_code: 0,
        }
    }

    /// Error for a value-taking flag that ended the argument list.
    pub fn missing_value(flag: &str, what: &str) -> Self {
        Self::new(format!("{flag} requires an argument: {what}"))
    }
}

/// Path validation failures raised by [`fs_utils`](crate::fs_utils).
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("{} is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("{} is not a jar file or a directory", .0.display())]
    NotAJarOrDirectory(PathBuf),

    #[error("{} is a directory, expected a file to write", .0.display())]
    IsADirectory(PathBuf),

    #[error("{} exists and is not a directory", .0.display())]
    ExistsAsFile(PathBuf),

    #[error("Could not delete {}: {source}", path.display())]
    Delete { path: PathBuf, source: io::Error },

    #[error("Could not create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Could not read list file {}: {source}", path.display())]
    ReadList { path: PathBuf, source: io::Error },
}

impl From<PathError> for DriverError {
    fn from(err: PathError) -> Self {
        DriverError::new(err.to_string())
    }
}
