//! Path resolution for flag values.
//!
//! Every path-valued flag names the [`PathKind`] it needs; [`resolve`] turns the
//! raw string into an absolute path and checks (or prepares) the filesystem
//! state. Output kinds have side effects: a stale output file is deleted, a
//! fresh output directory is emptied, and missing parents are created.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PathError;

/// What a path-valued flag expects to find on disk.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PathKind {
    ExistingFile,
    ExistingDir,
    ExistingFileOrDir,
    ExistingJarOrDir,
    /// Output file; an existing file is deleted, missing parents are created.
    NewFile,
    /// File that is read if present and written otherwise (baselines).
    NewOrExistingFile,
    NewOrExistingDir,
    /// Output directory; existing contents are removed.
    NewDir,
}

/// Expand a leading `~/` with the user's home directory.
///
/// Without a resolvable home directory the string is used as-is.
pub fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

/// Home-expanded, absolute form of `raw`. No filesystem checks.
pub fn file_for_path(raw: &str) -> PathBuf {
    let path = expand_home(raw);
    std::path::absolute(&path).unwrap_or(path)
}

/// Resolve a single path of the given kind.
pub fn resolve(raw: &str, kind: PathKind) -> Result<PathBuf, PathError> {
    let path = file_for_path(raw);
    match kind {
        PathKind::ExistingFile => {
            if !path.exists() {
                return Err(PathError::NotFound(path));
            }
            if !path.is_file() {
                return Err(PathError::NotAFile(path));
            }
        }
        PathKind::ExistingDir => {
            if !path.exists() {
                return Err(PathError::NotFound(path));
            }
            if !path.is_dir() {
                return Err(PathError::NotADirectory(path));
            }
        }
        PathKind::ExistingFileOrDir => {
            if !path.exists() {
                return Err(PathError::NotFound(path));
            }
        }
        PathKind::ExistingJarOrDir => {
            if !path.exists() {
                return Err(PathError::NotFound(path));
            }
            if !path.is_dir() && !is_archive(&path) {
                return Err(PathError::NotAJarOrDirectory(path));
            }
        }
        PathKind::NewFile => prepare_new_file(&path)?,
        PathKind::NewOrExistingFile => {
            if path.is_dir() {
                return Err(PathError::IsADirectory(path));
            }
            create_parent(&path)?;
        }
        PathKind::NewOrExistingDir => {
            if path.exists() && !path.is_dir() {
                return Err(PathError::ExistsAsFile(path));
            }
            create_dir(&path)?;
        }
        PathKind::NewDir => {
            if path.exists() {
                if !path.is_dir() {
                    return Err(PathError::ExistsAsFile(path));
                }
                fs::remove_dir_all(&path).map_err(|source| PathError::Delete {
                    path: path.clone(),
                    source,
                })?;
            }
            create_dir(&path)?;
        }
    }
    Ok(path)
}

/// Resolve a path-separator delimited list; order is preserved.
///
/// For [`PathKind::ExistingFile`] an element of the form `@listfile` expands to
/// the files named in `listfile`.
pub fn resolve_list(raw: &str, kind: PathKind) -> Result<Vec<PathBuf>, PathError> {
    let mut out = Vec::new();
    for element in std::env::split_paths(raw) {
        let element = element.to_string_lossy();
        if element.is_empty() {
            continue;
        }
        if kind == PathKind::ExistingFile {
            if let Some(list) = element.strip_prefix('@') {
                out.extend(read_list_file(list)?);
                continue;
            }
        }
        out.push(resolve(&element, kind)?);
    }
    Ok(out)
}

/// Existing files named by `raw`, with `@listfile` support.
pub fn existing_files(raw: &str) -> Result<Vec<PathBuf>, PathError> {
    resolve_list(raw, PathKind::ExistingFile)
}

/// Read a whitespace-delimited list of existing files.
pub fn read_list_file(raw: &str) -> Result<Vec<PathBuf>, PathError> {
    let list_path = file_for_path(raw);
    if !list_path.is_file() {
        return Err(PathError::NotFound(list_path));
    }
    let content = fs::read_to_string(&list_path).map_err(|source| PathError::ReadList {
        path: list_path.clone(),
        source,
    })?;
    content
        .split_whitespace()
        .map(|entry| resolve(entry, PathKind::ExistingFile))
        .collect()
}

fn is_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("jar") || ext.eq_ignore_ascii_case("zip"))
        .unwrap_or(false)
}

fn prepare_new_file(path: &Path) -> Result<(), PathError> {
    if path.is_dir() {
        return Err(PathError::IsADirectory(path.to_path_buf()));
    }
    if path.exists() {
        fs::remove_file(path).map_err(|source| PathError::Delete {
            path: path.to_path_buf(),
            source,
        })?;
    }
    create_parent(path)
}

fn create_parent(path: &Path) -> Result<(), PathError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_dir(parent),
        _ => Ok(()),
    }
}

fn create_dir(path: &Path) -> Result<(), PathError> {
    fs::create_dir_all(path).map_err(|source| PathError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    if path.is_dir() {
        Ok(())
    } else {
        Err(PathError::NotADirectory(path.to_path_buf()))
    }
}
