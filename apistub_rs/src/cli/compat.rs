//! Compatibility settings reachable through free-form boolean flags.
//!
//! Any `-name[=value]` token the flag table does not know is looked up here.
//! Names are normalized to snake_case, so `--include-synchronized`,
//! `-includeSynchronized` and `--include_synchronized` all bind to
//! [`Compatibility::include_synchronized`].

use std::collections::HashMap;

use heck::ToSnakeCase;
use once_cell::sync::Lazy;

use super::parser::helpers::yes_no;
use crate::error::DriverError;

/// Output quirks kept for signature files produced by older tooling.
///
/// Most defaults follow the `compat` switch, which mirrors
/// `--compatible-output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compatibility {
    pub compat: bool,
    /// Emit `extends` instead of `implements` for an interface's super interfaces.
    pub extends_for_interface_super_class: bool,
    pub include_synchronized: bool,
    /// Drop `Object` methods (`equals`, `hashCode`...) from annotation types.
    pub skip_annotation_instance_methods: bool,
    pub include_extends_java_lang_object: bool,
    pub space_after_comma_in_types: bool,
    pub nonstandard_modifier_order: bool,
    /// Only list checked exceptions that are part of the API.
    pub filter_throws_classes: bool,
    pub skip_inherited_interface_methods: bool,
    pub sort_enum_constants: bool,
    pub use_error_type_in_signatures: bool,
    pub omit_parameter_names: bool,
    pub include_default_constructors: bool,
}

impl Compatibility {
    pub fn new(compat: bool) -> Self {
        Self {
            compat,
            extends_for_interface_super_class: compat,
            include_synchronized: compat,
            skip_annotation_instance_methods: compat,
            include_extends_java_lang_object: compat,
            space_after_comma_in_types: compat,
            nonstandard_modifier_order: compat,
            filter_throws_classes: !compat,
            skip_inherited_interface_methods: !compat,
            sort_enum_constants: false,
            use_error_type_in_signatures: false,
            omit_parameter_names: compat,
            include_default_constructors: true,
        }
    }
}

impl Default for Compatibility {
    fn default() -> Self {
        Self::new(false)
    }
}

type Setter = fn(&mut Compatibility, bool);

const COMPAT_FLAGS: &[(&str, Setter)] = &[
    ("compat", |c, v| c.compat = v),
    ("extends_for_interface_super_class", |c, v| {
        c.extends_for_interface_super_class = v
    }),
    ("include_synchronized", |c, v| c.include_synchronized = v),
    ("skip_annotation_instance_methods", |c, v| {
        c.skip_annotation_instance_methods = v
    }),
    ("include_extends_java_lang_object", |c, v| {
        c.include_extends_java_lang_object = v
    }),
    ("space_after_comma_in_types", |c, v| c.space_after_comma_in_types = v),
    ("nonstandard_modifier_order", |c, v| c.nonstandard_modifier_order = v),
    ("filter_throws_classes", |c, v| c.filter_throws_classes = v),
    ("skip_inherited_interface_methods", |c, v| {
        c.skip_inherited_interface_methods = v
    }),
    ("sort_enum_constants", |c, v| c.sort_enum_constants = v),
    ("use_error_type_in_signatures", |c, v| {
        c.use_error_type_in_signatures = v
    }),
    ("omit_parameter_names", |c, v| c.omit_parameter_names = v),
    ("include_default_constructors", |c, v| {
        c.include_default_constructors = v
    }),
];

static COMPAT_LOOKUP: Lazy<HashMap<&'static str, Setter>> =
    Lazy::new(|| COMPAT_FLAGS.iter().copied().collect());

/// Normalized property name for a compatibility flag token.
pub fn compat_flag_name(arg: &str) -> String {
    let name = arg.split_once('=').map_or(arg, |(name, _)| name);
    name.trim_start_matches('-').to_snake_case()
}

/// Kebab-case spellings of every compatibility flag, for suggestions.
pub fn compat_flag_spellings() -> impl Iterator<Item = String> {
    COMPAT_FLAGS
        .iter()
        .map(|(name, _)| format!("--{}", name.replace('_', "-")))
}

/// Apply `arg` to `compat` if it names a compatibility property.
///
/// Returns `Ok(false)` when no property matches. A bare flag enables the
/// property; `=value` takes a yes/no literal.
pub fn apply_compat_flag(compat: &mut Compatibility, arg: &str) -> Result<bool, DriverError> {
    let Some(setter) = COMPAT_LOOKUP.get(compat_flag_name(arg).as_str()) else {
        return Ok(false);
    };
    let value = match arg.split_once('=') {
        Some((flag, raw)) => yes_no(flag, raw)?,
        None => true,
    };
    setter(compat, value);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_normalize_to_snake_case() {
        assert_eq!(compat_flag_name("--include-synchronized"), "include_synchronized");
        assert_eq!(compat_flag_name("-includeSynchronized"), "include_synchronized");
        assert_eq!(
            compat_flag_name("--space-after-comma-in-types=no"),
            "space_after_comma_in_types"
        );
    }

    #[test]
    fn bare_flag_enables_property() {
        let mut compat = Compatibility::new(false);
        assert!(!compat.include_synchronized);
        assert!(apply_compat_flag(&mut compat, "--include-synchronized").unwrap());
        assert!(compat.include_synchronized);
    }

    #[test]
    fn value_form_accepts_yes_no_literals() {
        let mut compat = Compatibility::new(true);
        assert!(apply_compat_flag(&mut compat, "--nonstandardModifierOrder=off").unwrap());
        assert!(!compat.nonstandard_modifier_order);
        assert!(apply_compat_flag(&mut compat, "-nonstandard-modifier-order=yes").unwrap());
        assert!(compat.nonstandard_modifier_order);
    }

    #[test]
    fn bad_literal_is_an_error() {
        let mut compat = Compatibility::default();
        let err = apply_compat_flag(&mut compat, "--sort-enum-constants=maybe").unwrap_err();
        assert!(err.message.contains("maybe"));
    }

    #[test]
    fn unknown_names_do_not_match() {
        let mut compat = Compatibility::default();
        let before = compat.clone();
        assert!(!apply_compat_flag(&mut compat, "--no-such-thing").unwrap());
        assert_eq!(compat, before);
    }

    #[test]
    fn every_table_entry_is_reachable_by_its_spelling() {
        for spelling in compat_flag_spellings() {
            let mut compat = Compatibility::new(false);
            assert!(
                apply_compat_flag(&mut compat, &format!("{spelling}=yes")).unwrap(),
                "{spelling} did not bind"
            );
        }
    }
}
