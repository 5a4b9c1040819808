//! End-to-End CLI Tests for apistub
//!
//! Run the real binary in a scratch directory and check streams and exit codes.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command pointing to the apistub binary, isolated from user config.
fn apistub(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("apistub");
    cmd.current_dir(dir)
        .env("APISTUB_CONFIG", dir.join("no-config.toml"))
        .env_remove("APISTUB_PREPEND_ARGS")
        .env_remove("APISTUB_APPEND_ARGS")
        .env_remove("APISTUB_DUMP_ARGV")
        .env_remove("APISTUB_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, name: &str, body: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, body).unwrap();
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let tmp = TempDir::new().unwrap();
        apistub(tmp.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage: apistub"))
            .stdout(predicate::str::contains("--source-files"))
            .stdout(predicate::str::contains("Injecting API Levels"));
    }

    #[test]
    fn piped_help_has_no_color_codes() {
        let tmp = TempDir::new().unwrap();
        apistub(tmp.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("\x1b[").not());
    }

    #[test]
    fn shows_version() {
        let tmp = TempDir::new().unwrap();
        apistub(tmp.path())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn empty_command_line_succeeds() {
        let tmp = TempDir::new().unwrap();
        apistub(tmp.path()).assert().success();
    }

    #[test]
    fn unknown_flag_fails_with_suggestion_and_usage() {
        let tmp = TempDir::new().unwrap();
        apistub(tmp.path())
            .args(["--no-bannr"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid argument --no-bannr"))
            .stderr(predicate::str::contains("Did you mean --no-banner?"))
            .stderr(predicate::str::contains("Usage: apistub"));
    }

    #[test]
    fn missing_value_names_the_flag() {
        let tmp = TempDir::new().unwrap();
        apistub(tmp.path())
            .args(["--api"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("--api requires an argument"));
    }
}

// ============================================
// Sources and paths
// ============================================

mod sources {
    use super::*;

    #[test]
    fn listfile_sources_resolve_from_working_directory() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "src/A.java", "class A {}");
        write(tmp.path(), "src/B.java", "class B {}");
        write(tmp.path(), "list.txt", "src/A.java\nsrc/B.java\n");
        apistub(tmp.path())
            .args(["--source-files", "@list.txt", "--api", "out/api.txt"])
            .assert()
            .success();
        assert!(tmp.path().join("out").is_dir());
    }

    #[test]
    fn missing_source_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        apistub(tmp.path())
            .args(["--source-files", "Missing.java"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Missing.java"));
    }

    #[test]
    fn api_jar_with_sources_is_fatal_in_either_order() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "api.jar", "jar");
        write(tmp.path(), "A.java", "class A {}");
        for args in [
            ["--input-api-jar", "api.jar", "--source-files", "A.java"],
            ["--source-files", "A.java", "--input-api-jar", "api.jar"],
        ] {
            apistub(tmp.path())
                .args(args)
                .assert()
                .code(1)
                .stderr(predicate::str::contains("--input-api-jar"))
                .stderr(predicate::str::contains("--source-files"));
        }
    }

    #[test]
    fn unsupported_encoding_is_fatal() {
        let tmp = TempDir::new().unwrap();
        apistub(tmp.path())
            .args(["-encoding", "ISO-8859-1"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("UTF-8"));
    }
}

// ============================================
// Modes and consistency
// ============================================

mod modes {
    use super::*;

    #[test]
    fn compatible_output_conflicts_cite_both_flags() {
        let tmp = TempDir::new().unwrap();
        apistub(tmp.path())
            .args(["--compatible-output", "--output-kotlin-nulls"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("--output-kotlin-nulls"))
            .stderr(predicate::str::contains("--compatible-output"));
    }

    #[test]
    fn bad_yes_no_literal_names_the_value() {
        let tmp = TempDir::new().unwrap();
        apistub(tmp.path())
            .args(["--output-kotlin-nulls=maybe"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("maybe"));
    }

    #[test]
    fn compat_flags_are_accepted() {
        let tmp = TempDir::new().unwrap();
        apistub(tmp.path())
            .args(["--include-synchronized", "-spaceAfterCommaInTypes=no"])
            .assert()
            .success();
    }

    #[test]
    fn unimplemented_flags_warn_once() {
        let tmp = TempDir::new().unwrap();
        apistub(tmp.path())
            .args(["-offlinemode", "-offlinemode"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Ignoring unimplemented flag -offlinemode").count(1));
    }

    #[test]
    fn deprecated_flags_name_the_replacement() {
        let tmp = TempDir::new().unwrap();
        apistub(tmp.path())
            .args(["--current-version", "28"])
            .assert()
            .success()
            .stderr(predicate::str::contains("--current-api-level"));
    }
}

// ============================================
// Environment
// ============================================

mod environment {
    use super::*;

    #[test]
    fn dump_argv_echoes_merged_arguments() {
        let tmp = TempDir::new().unwrap();
        apistub(tmp.path())
            .env("APISTUB_DUMP_ARGV", "1")
            .env("APISTUB_PREPEND_ARGS", "--no-banner")
            .env("APISTUB_APPEND_ARGS", "--quiet")
            .arg("--no-docs")
            .assert()
            .success()
            .stdout(predicate::str::contains("apistub args:"))
            .stdout(predicate::str::is_match(r"(?s)--no-banner.*--no-docs.*--quiet").unwrap());
    }

    #[test]
    fn appended_help_wins() {
        let tmp = TempDir::new().unwrap();
        apistub(tmp.path())
            .env("APISTUB_APPEND_ARGS", "--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage: apistub"));
    }

    #[test]
    fn config_default_args_are_applied() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "apistub.toml",
            "default_args = [\"--no-such-flag-from-config\"]\n",
        );
        apistub(tmp.path())
            .env("APISTUB_CONFIG", tmp.path().join("apistub.toml"))
            .assert()
            .code(1)
            .stderr(predicate::str::contains("--no-such-flag-from-config"));
    }
}
