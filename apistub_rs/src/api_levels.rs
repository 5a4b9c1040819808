//! Discovery of versioned platform jars.
//!
//! Platform jars are located by substituting each API level into a set of
//! filename patterns (`%` is the level), starting at level 1 and stopping at
//! the first level with no jar. Levels are assumed contiguous.

use std::path::{Path, PathBuf};

use crate::fs_utils::file_for_path;
use crate::types::RELEASED_CODENAME;

/// Platform jars indexed by API level.
///
/// Slot 0 is a placeholder so that `jars[level]` is the jar for `level`; it is
/// never handed out by the accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformJars {
    jars: Vec<PathBuf>,
}

impl Default for PlatformJars {
    fn default() -> Self {
        Self {
            jars: vec![PathBuf::new()],
        }
    }
}

impl PlatformJars {
    /// Number of slots, including the placeholder at index 0.
    pub fn len(&self) -> usize {
        self.jars.len()
    }

    /// True when no API level was found.
    pub fn is_empty(&self) -> bool {
        self.jars.len() <= 1
    }

    /// Highest API level found, 0 if none.
    pub fn highest_level(&self) -> usize {
        self.jars.len() - 1
    }

    pub fn get(&self, level: usize) -> Option<&Path> {
        if level == 0 {
            return None;
        }
        self.jars.get(level).map(PathBuf::as_path)
    }

    /// `(level, jar)` pairs in ascending level order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Path)> {
        self.jars
            .iter()
            .enumerate()
            .skip(1)
            .map(|(level, jar)| (level, jar.as_path()))
    }

    fn push(&mut self, jar: PathBuf) {
        self.jars.push(jar);
    }
}

/// Stands for the API level in a jar pattern.
pub const LEVEL_PLACEHOLDER: char = '%';

/// The level the in-development platform will ship as.
///
/// A codename other than `REL` means the current level is still being built,
/// so its jar belongs to the next integer level. `None` if that level does
/// not fit in a `usize`.
pub fn effective_current_level(current_api_level: usize, codename: Option<&str>) -> Option<usize> {
    match codename {
        Some(name) if name != RELEASED_CODENAME => current_api_level.checked_add(1),
        _ => Some(current_api_level),
    }
}

/// Jar for `level` from the first pattern that names an existing file.
///
/// Patterns without a level placeholder never match.
pub fn jar_for_level(level: usize, patterns: &[String]) -> Option<PathBuf> {
    let level = level.to_string();
    patterns
        .iter()
        .filter(|pattern| pattern.contains(LEVEL_PLACEHOLDER))
        .map(|pattern| file_for_path(&pattern.replace(LEVEL_PLACEHOLDER, &level)))
        .find(|candidate| candidate.is_file())
}

/// Find the contiguous run of platform jars starting at API level 1.
///
/// `current_jar`, when given, replaces the pattern lookup for the effective
/// current level.
pub fn find_android_jars(
    patterns: &[String],
    current_api_level: usize,
    codename: Option<&str>,
    current_jar: Option<&Path>,
) -> PlatformJars {
    let current = effective_current_level(current_api_level, codename);
    let mut jars = PlatformJars::default();
    let mut level = 1;
    loop {
        let jar = match current_jar {
            Some(jar) if Some(level) == current => Some(jar.to_path_buf()),
            _ => jar_for_level(level, patterns),
        };
        match jar {
            Some(jar) if jar.is_file() => {
                tracing::debug!(level, jar = %jar.display(), "found platform jar");
                jars.push(jar);
                level += 1;
            }
            _ => {
                tracing::debug!(last = level - 1, "last API level found");
                break;
            }
        }
    }
    jars
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_jars(root: &Path, layout: &str, levels: impl IntoIterator<Item = usize>) {
        for level in levels {
            let path = root.join(layout.replace('%', &level.to_string()));
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "jar").unwrap();
        }
    }

    fn pattern(root: &Path, layout: &str) -> String {
        root.join(layout).to_string_lossy().into_owned()
    }

    #[test]
    fn finds_contiguous_levels_with_placeholder() {
        let tmp = TempDir::new().unwrap();
        make_jars(tmp.path(), "android-%/android.jar", 1..=5);

        let patterns = vec![pattern(tmp.path(), "android-%/android.jar")];
        let jars = find_android_jars(&patterns, 5, None, None);

        assert_eq!(jars.len(), 6);
        assert_eq!(jars.highest_level(), 5);
        assert_eq!(jars.get(0), None);
        assert_eq!(
            jars.get(3).unwrap(),
            tmp.path().join("android-3/android.jar")
        );
        assert_eq!(jars.get(6), None);
    }

    #[test]
    fn stops_at_first_gap() {
        let tmp = TempDir::new().unwrap();
        make_jars(tmp.path(), "android-%/android.jar", [1, 2, 3, 5, 6]);

        let patterns = vec![pattern(tmp.path(), "android-%/android.jar")];
        let jars = find_android_jars(&patterns, 6, None, None);

        assert_eq!(jars.highest_level(), 3);
    }

    #[test]
    fn result_does_not_depend_on_pattern_order() {
        let tmp = TempDir::new().unwrap();
        make_jars(tmp.path(), "old/android-%/android.jar", 1..=2);
        make_jars(tmp.path(), "sdk/%/public/android.jar", 3..=4);

        let a = pattern(tmp.path(), "old/android-%/android.jar");
        let b = pattern(tmp.path(), "sdk/%/public/android.jar");
        let forward = find_android_jars(&[a.clone(), b.clone()], 4, None, None);
        let backward = find_android_jars(&[b, a], 4, None, None);

        assert_eq!(forward.highest_level(), 4);
        assert_eq!(forward, backward);
    }

    #[test]
    fn first_matching_pattern_wins() {
        let tmp = TempDir::new().unwrap();
        make_jars(tmp.path(), "a/%.jar", 1..=1);
        make_jars(tmp.path(), "b/%.jar", 1..=1);

        let patterns = vec![pattern(tmp.path(), "b/%.jar"), pattern(tmp.path(), "a/%.jar")];
        let jars = find_android_jars(&patterns, 1, None, None);
        assert_eq!(jars.get(1).unwrap(), tmp.path().join("b/1.jar"));
    }

    #[test]
    fn current_jar_overrides_the_current_level() {
        let tmp = TempDir::new().unwrap();
        make_jars(tmp.path(), "android-%/android.jar", 1..=2);
        let current = tmp.path().join("out/android.jar");
        fs::create_dir_all(current.parent().unwrap()).unwrap();
        fs::write(&current, "jar").unwrap();

        let patterns = vec![pattern(tmp.path(), "android-%/android.jar")];
        let jars = find_android_jars(&patterns, 3, None, Some(&current));

        assert_eq!(jars.highest_level(), 3);
        assert_eq!(jars.get(3).unwrap(), current.as_path());
    }

    #[test]
    fn codename_moves_current_jar_to_next_level() {
        let tmp = TempDir::new().unwrap();
        make_jars(tmp.path(), "android-%/android.jar", 1..=3);
        let current = tmp.path().join("current.jar");
        fs::write(&current, "jar").unwrap();

        let patterns = vec![pattern(tmp.path(), "android-%/android.jar")];
        let jars = find_android_jars(&patterns, 3, Some("Q"), Some(&current));
        assert_eq!(jars.highest_level(), 4);
        assert_eq!(jars.get(4).unwrap(), current.as_path());

        let released = find_android_jars(&patterns, 3, Some(RELEASED_CODENAME), Some(&current));
        assert_eq!(released.highest_level(), 3);
        assert_eq!(released.get(3).unwrap(), current.as_path());
    }

    #[test]
    fn pattern_without_placeholder_finds_nothing() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("android.jar"), "jar").unwrap();

        let patterns = vec![pattern(tmp.path(), "android.jar")];
        let jars = find_android_jars(&patterns, 3, None, None);
        assert!(jars.is_empty());
    }

    #[test]
    fn effective_level_does_not_overflow() {
        assert_eq!(effective_current_level(29, Some("Q")), Some(30));
        assert_eq!(effective_current_level(29, Some(RELEASED_CODENAME)), Some(29));
        assert_eq!(effective_current_level(usize::MAX, None), Some(usize::MAX));
        assert_eq!(effective_current_level(usize::MAX, Some("Q")), None);
    }

    #[test]
    fn no_jars_leaves_only_the_placeholder() {
        let tmp = TempDir::new().unwrap();
        let patterns = vec![pattern(tmp.path(), "android-%/android.jar")];
        let jars = find_android_jars(&patterns, 5, None, None);
        assert!(jars.is_empty());
        assert_eq!(jars.len(), 1);
        assert_eq!(jars.iter().count(), 0);
    }
}
