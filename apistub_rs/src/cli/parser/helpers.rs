//! Value coercion and suggestion helpers shared by the dispatcher.

use strsim::levenshtein;

use super::super::compat::compat_flag_spellings;
use super::super::flags::documented_names;
use crate::error::DriverError;

/// Coerce a yes/no literal for `flag`.
pub fn yes_no(flag: &str, value: &str) -> Result<bool, DriverError> {
    match value {
        "yes" | "true" | "enabled" | "on" => Ok(true),
        "no" | "false" | "disabled" | "off" => Ok(false),
        _ => Err(DriverError::new(format!(
            "Unexpected value '{value}' for {flag}; expected yes or no"
        ))),
    }
}

pub fn parse_positive_usize(raw: &str, flag: &str) -> Result<usize, DriverError> {
    match raw.parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(DriverError::new(format!(
            "{flag} requires a positive integer, got '{raw}'"
        ))),
    }
}

/// Split a separated list, dropping empty segments.
pub fn split_list(raw: &str, separator: char) -> impl Iterator<Item = String> + '_ {
    raw.split(separator)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// Suggest a known flag within edit distance 2 of `input`.
pub fn suggest_similar_flag(input: &str) -> Option<String> {
    let name = input.split_once('=').map_or(input, |(name, _)| name);
    let mut best_match: Option<(String, usize)> = None;

    let candidates = documented_names()
        .map(str::to_string)
        .chain(compat_flag_spellings());
    for candidate in candidates {
        let distance = levenshtein(name, &candidate);
        if distance > 2 {
            continue;
        }
        match &best_match {
            Some((_, best)) if *best <= distance => {}
            _ => best_match = Some((candidate, distance)),
        }
    }

    best_match.map(|(flag, _)| flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_no_vocabulary() {
        for yes in ["yes", "true", "enabled", "on"] {
            assert!(yes_no("--flag", yes).unwrap());
        }
        for no in ["no", "false", "disabled", "off"] {
            assert!(!yes_no("--flag", no).unwrap());
        }
    }

    #[test]
    fn yes_no_rejects_other_values() {
        let err = yes_no("--output-kotlin-nulls", "maybe").unwrap_err();
        assert!(err.message.contains("'maybe'"));
        assert!(err.message.contains("--output-kotlin-nulls"));
    }

    #[test]
    fn positive_usize() {
        assert_eq!(parse_positive_usize("28", "--current-api-level").unwrap(), 28);
        assert!(parse_positive_usize("0", "--current-api-level").is_err());
        assert!(parse_positive_usize("Q", "--current-api-level").is_err());
    }

    #[test]
    fn split_list_drops_empty_segments() {
        let parts: Vec<_> = split_list("android.app::android.view:", ':').collect();
        assert_eq!(parts, vec!["android.app", "android.view"]);
    }

    #[test]
    fn suggests_close_flags() {
        assert_eq!(suggest_similar_flag("--stub").as_deref(), Some("--stubs"));
        assert_eq!(suggest_similar_flag("--verbos=yes").as_deref(), Some("--verbose"));
        assert_eq!(suggest_similar_flag("--completely-unrelated"), None);
    }
}
