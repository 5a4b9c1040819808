//! The resolved configuration for one apistub run.

use std::collections::HashSet;
use std::path::PathBuf;

use super::compat::Compatibility;
use crate::api_levels::PlatformJars;
use crate::types::{CheckRequest, ColorMode, ConvertFile, DocLevel, TypedefMode};

/// Default cap on how many errors of a single issue are repeated.
pub const DEFAULT_REPEAT_ERRORS_MAX: usize = 25;

/// Default Java language level assumed for sources.
pub const DEFAULT_JAVA_LANGUAGE_LEVEL: &str = "1.8";

/// Everything the command line asked for.
///
/// Built once by [`parse_options`](super::parse_options); later stages only
/// read it.
#[derive(Debug, Clone)]
pub struct Options {
    // === General ===
    pub quiet: bool,
    pub verbose: bool,
    pub color: ColorMode,
    pub show_banner: bool,
    /// Write signature files in the legacy format.
    pub compat_output: bool,
    pub compatibility: Compatibility,
    pub omit_common_packages: bool,
    pub hidden_issues: HashSet<String>,
    pub error_issues: HashSet<String>,
    pub warning_issues: HashSet<String>,
    pub lint_issues: HashSet<String>,
    pub warnings_as_errors: bool,
    pub lints_as_errors: bool,
    pub baseline: Option<PathBuf>,
    pub update_baseline: bool,
    pub repeat_errors_max: usize,

    // === API sources ===
    pub sources: Vec<PathBuf>,
    pub source_path: Vec<PathBuf>,
    pub classpath: Vec<PathBuf>,
    pub api_jar: Option<PathBuf>,
    pub merge_qualifier_annotations: Vec<PathBuf>,
    pub merge_inclusion_annotations: Vec<PathBuf>,
    pub validate_nullability_from_merged_stubs: bool,
    pub validate_nullability_from_list: Option<PathBuf>,
    pub nullability_warnings_txt: Option<PathBuf>,
    pub input_kotlin_nulls: bool,
    pub manifest: Option<PathBuf>,
    pub hide_packages: HashSet<String>,
    pub show_annotations: HashSet<String>,
    pub show_single_annotations: HashSet<String>,
    pub hide_annotations: HashSet<String>,
    pub show_unannotated: bool,
    pub pass_through_annotations: HashSet<String>,
    pub java_language_level: String,
    pub doc_level: DocLevel,

    // === Documentation ===
    pub no_docs: bool,
    /// Argv for the documentation tool, taken verbatim from the end of the command line.
    pub invoke_documentation_tool_arguments: Vec<String>,

    // === Signature files ===
    pub api_file: Option<PathBuf>,
    pub private_api_file: Option<PathBuf>,
    pub dex_api_file: Option<PathBuf>,
    pub private_dex_api_file: Option<PathBuf>,
    pub removed_api_file: Option<PathBuf>,
    pub removed_dex_api_file: Option<PathBuf>,
    pub output_kotlin_nulls: bool,
    pub output_default_values: bool,
    pub include_signature_version: bool,
    pub proguard: Option<PathBuf>,
    pub android_jar_signature_files: Option<PathBuf>,
    pub subtract_api: Option<PathBuf>,
    pub typedefs_in_signatures: TypedefMode,

    // === Stubs ===
    pub stubs_dir: Option<PathBuf>,
    pub doc_stubs_dir: Option<PathBuf>,
    pub stubs_source_list: Option<PathBuf>,
    pub doc_stubs_source_list: Option<PathBuf>,
    pub stub_packages: HashSet<String>,
    pub generate_annotations: bool,
    pub include_documentation_in_stubs: bool,
    /// `(api file, maven artifact id)` pairs.
    pub artifact_registrations: Vec<(PathBuf, String)>,

    // === Diffs and checks ===
    pub previous_api: Option<PathBuf>,
    pub migrate_nulls_from: Option<PathBuf>,
    pub compatibility_checks: Vec<CheckRequest>,
    pub check_kotlin_interop: bool,
    pub update_api: bool,
    pub convert_to_xml_files: Vec<ConvertFile>,

    // === Statistics ===
    pub annotation_coverage_stats: bool,
    pub annotation_coverage_of: Vec<PathBuf>,
    pub annotation_coverage_class_report: Option<PathBuf>,
    pub annotation_coverage_member_report: Option<PathBuf>,
    pub skip_java_in_coverage_report: bool,

    // === Annotations ===
    pub external_annotations: Option<PathBuf>,
    pub include_source_retention: bool,
    pub copy_annotations_source: Option<PathBuf>,
    pub copy_annotations_target: Option<PathBuf>,

    // === API levels ===
    pub apply_api_levels_xml: Option<PathBuf>,
    pub generate_api_levels_xml: Option<PathBuf>,
    pub android_jar_patterns: Vec<String>,
    pub current_api_level: Option<usize>,
    pub current_codename: Option<String>,
    pub current_jar: Option<PathBuf>,
    /// Filled by discovery when `--generate-api-levels` is set.
    pub platform_jars: Option<PlatformJars>,
    pub sdk_values_dir: Option<PathBuf>,
    pub remove_missing_class_references_in_api_levels: bool,
}

impl Options {
    /// Defaults for a run in (or out of) compatible-output mode.
    ///
    /// Modern signature-format features default to on unless the legacy format
    /// was requested.
    pub fn new(compat_output: bool) -> Self {
        Self {
            quiet: false,
            verbose: false,
            color: ColorMode::from_env(),
            show_banner: true,
            compat_output,
            compatibility: Compatibility::new(compat_output),
            omit_common_packages: !compat_output,
            hidden_issues: HashSet::new(),
            error_issues: HashSet::new(),
            warning_issues: HashSet::new(),
            lint_issues: HashSet::new(),
            warnings_as_errors: false,
            lints_as_errors: false,
            baseline: None,
            update_baseline: false,
            repeat_errors_max: DEFAULT_REPEAT_ERRORS_MAX,

            sources: Vec::new(),
            source_path: Vec::new(),
            classpath: Vec::new(),
            api_jar: None,
            merge_qualifier_annotations: Vec::new(),
            merge_inclusion_annotations: Vec::new(),
            validate_nullability_from_merged_stubs: false,
            validate_nullability_from_list: None,
            nullability_warnings_txt: None,
            input_kotlin_nulls: false,
            manifest: None,
            hide_packages: HashSet::new(),
            show_annotations: HashSet::new(),
            show_single_annotations: HashSet::new(),
            hide_annotations: HashSet::new(),
            show_unannotated: false,
            pass_through_annotations: HashSet::new(),
            java_language_level: DEFAULT_JAVA_LANGUAGE_LEVEL.to_string(),
            doc_level: DocLevel::default(),

            no_docs: false,
            invoke_documentation_tool_arguments: Vec::new(),

            api_file: None,
            private_api_file: None,
            dex_api_file: None,
            private_dex_api_file: None,
            removed_api_file: None,
            removed_dex_api_file: None,
            output_kotlin_nulls: !compat_output,
            output_default_values: !compat_output,
            include_signature_version: !compat_output,
            proguard: None,
            android_jar_signature_files: None,
            subtract_api: None,
            typedefs_in_signatures: TypedefMode::default(),

            stubs_dir: None,
            doc_stubs_dir: None,
            stubs_source_list: None,
            doc_stubs_source_list: None,
            stub_packages: HashSet::new(),
            generate_annotations: true,
            include_documentation_in_stubs: true,
            artifact_registrations: Vec::new(),

            previous_api: None,
            migrate_nulls_from: None,
            compatibility_checks: Vec::new(),
            check_kotlin_interop: false,
            update_api: false,
            convert_to_xml_files: Vec::new(),

            annotation_coverage_stats: false,
            annotation_coverage_of: Vec::new(),
            annotation_coverage_class_report: None,
            annotation_coverage_member_report: None,
            skip_java_in_coverage_report: false,

            external_annotations: None,
            include_source_retention: false,
            copy_annotations_source: None,
            copy_annotations_target: None,

            apply_api_levels_xml: None,
            generate_api_levels_xml: None,
            android_jar_patterns: Vec::new(),
            current_api_level: None,
            current_codename: None,
            current_jar: None,
            platform_jars: None,
            sdk_values_dir: None,
            remove_missing_class_references_in_api_levels: false,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new(false)
    }
}
