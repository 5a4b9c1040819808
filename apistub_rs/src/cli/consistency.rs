//! Cross-flag rules applied once the scan is complete.
//!
//! [`check_consistency`] rejects combinations that are individually valid but
//! contradict each other. [`apply_update_api_mode`] then implements
//! `--update-api`: only signature files are written, so every other output
//! requested on the command line is dropped, wherever it appeared.

use super::options::Options;
use crate::error::DriverError;

/// Fail with every contradictory flag combination in `options`.
pub fn check_consistency(options: &Options) -> Result<(), DriverError> {
    let mut violations: Vec<&str> = Vec::new();

    if options.api_jar.is_some() && !options.sources.is_empty() {
        violations.push("Specify either --source-files or --input-api-jar, not both");
    }
    if options.compat_output && options.output_kotlin_nulls {
        violations.push("--output-kotlin-nulls=yes should not be combined with --compatible-output=yes");
    }
    if options.compat_output && options.output_default_values {
        violations.push("--output-default-values=yes should not be combined with --compatible-output=yes");
    }
    if options.compat_output && options.include_signature_version {
        violations.push(
            "--include-signature-version=yes should not be combined with --compatible-output=yes",
        );
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(DriverError::new(violations.join("\n")))
    }
}

/// Drop every output `--update-api` does not produce.
pub fn apply_update_api_mode(options: &mut Options) {
    if !options.update_api {
        return;
    }
    tracing::debug!("--update-api: cancelling non-signature outputs");

    options.annotation_coverage_stats = false;
    options.annotation_coverage_of.clear();
    options.annotation_coverage_class_report = None;
    options.annotation_coverage_member_report = None;

    options.apply_api_levels_xml = None;
    options.generate_api_levels_xml = None;
    options.platform_jars = None;
    options.android_jar_signature_files = None;
    options.sdk_values_dir = None;

    options.stubs_dir = None;
    options.doc_stubs_dir = None;
    options.stubs_source_list = None;
    options.doc_stubs_source_list = None;

    options.external_annotations = None;
    options.proguard = None;
    options.no_docs = true;
    options.invoke_documentation_tool_arguments.clear();

    options.check_kotlin_interop = false;
    options.compatibility_checks.clear();
    options.artifact_registrations.clear();
    options.convert_to_xml_files.clear();

    options.validate_nullability_from_merged_stubs = false;
    options.validate_nullability_from_list = None;
    options.nullability_warnings_txt = None;
}
