//! Usage and version text, rendered from the flag table.

use super::flags::{FLAGS, FlagKind, Section};
use crate::colors::Painter;

const FLAG_COLUMN: usize = 40;

/// One-line version banner.
pub fn version_text() -> String {
    format!("apistub version: {}", env!("CARGO_PKG_VERSION"))
}

/// Full usage text: every active flag, grouped by section.
pub fn usage_text(painter: &Painter) -> String {
    let mut help = String::new();
    help.push_str(&format!(
        "{} [flags] <sources...>\n\n",
        painter.header("Usage: apistub")
    ));

    for section in Section::ALL {
        help.push_str(&painter.header(&format!("{}:", section.title())));
        help.push('\n');
        for spec in FLAGS
            .iter()
            .filter(|spec| spec.section == *section && spec.kind == FlagKind::Active)
        {
            let names = spec.names.join(", ");
            let metavars = spec.arity.metavars();
            let width = names.len() + metavars.len();
            help.push_str("  ");
            help.push_str(&painter.flag(&names));
            help.push_str(&painter.dim(&metavars));
            if width + 2 < FLAG_COLUMN {
                help.push_str(&" ".repeat(FLAG_COLUMN - width - 2));
            } else {
                help.push('\n');
                help.push_str(&" ".repeat(FLAG_COLUMN));
            }
            help.push_str(spec.help);
            help.push('\n');
        }
        help.push('\n');
    }

    help.push_str(&painter.header("Environment:"));
    help.push('\n');
    for (name, description) in ENVIRONMENT {
        help.push_str(&format!("  {:<width$}{description}\n", name, width = FLAG_COLUMN - 2));
    }
    help.push('\n');
    help.push_str(
        "Any other --name[=yes|no] flag is matched against the signature compatibility \
         settings,\nspelled in kebab-case or camelCase (e.g. --include-synchronized).\n",
    );
    help
}

const ENVIRONMENT: &[(&str, &str)] = &[
    ("APISTUB_DUMP_ARGV", "Print the received arguments before parsing."),
    ("APISTUB_PREPEND_ARGS", "Whitespace separated arguments placed before the command line."),
    ("APISTUB_APPEND_ARGS", "Whitespace separated arguments placed after the command line."),
    ("APISTUB_CONFIG", "Config file (default: .apistub/config.toml)."),
    ("APISTUB_COLOR", "auto, always or never."),
    ("RUST_LOG", "Log filter for diagnostics on stderr."),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OutputStream;
    use crate::types::ColorMode;

    #[test]
    fn usage_lists_every_section_and_flag() {
        let text = usage_text(&Painter::new(ColorMode::Never, OutputStream::Stdout));
        assert!(text.starts_with("Usage: apistub"));
        for section in Section::ALL {
            assert!(text.contains(section.title()), "{}", section.title());
        }
        assert!(text.contains("--api, -api <file>"));
        assert!(text.contains("--check-compatibility:api:released <file>"));
        assert!(text.contains("APISTUB_PREPEND_ARGS"));
    }

    #[test]
    fn usage_hides_legacy_spellings() {
        let text = usage_text(&Painter::new(ColorMode::Never, OutputStream::Stdout));
        assert!(!text.contains("-stubsourceonly"));
        assert!(!text.contains("--sdkvalues"));
        assert!(!text.contains("-federate"));
    }

    #[test]
    fn version_names_the_tool() {
        assert!(version_text().starts_with("apistub version: "));
    }
}
