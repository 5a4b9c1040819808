//! Core parsing logic: the compat pre-scan, the flag dispatcher and
//! post-scan finalization.
//!
//! [`parse_options`] is the entry point. It walks the argument list once,
//! consulting the flag table for every token, then finalizes derived state
//! (platform jar discovery, implied checks) and runs the consistency rules.

use std::collections::HashSet;
use std::path::PathBuf;

use super::super::compat::apply_compat_flag;
use super::super::consistency::{apply_update_api_mode, check_consistency};
use super::super::cursor::ArgCursor;
use super::super::flags::{self, Arity, FlagId, FlagKind, FlagSpec};
use super::super::help::usage_text;
use super::super::options::Options;
use super::helpers::{parse_positive_usize, split_list, suggest_similar_flag, yes_no};
use crate::api_levels::{LEVEL_PLACEHOLDER, effective_current_level, find_android_jars};
use crate::colors::Painter;
use crate::error::{DriverError, OutputStream};
use crate::fs_utils::{self, PathKind};
use crate::reporter::Reporter;
use crate::types::{
    ApiType, CheckRequest, ColorMode, ConvertFile, DEFAULT_ANDROID_JAR_PATTERNS, DocLevel,
    ReleaseType, Severity, TypedefMode,
};

/// Result of a successful parse.
#[derive(Debug)]
pub enum Parsed {
    Run(Box<Options>),
    ShowHelp,
    ShowVersion,
}

/// Whether `--compatible-output` is in effect for `args`.
///
/// The last occurrence wins. Tokens after `--generate-documentation` belong
/// to the documentation tool and are not inspected. Malformed values count as
/// "no" here; the dispatcher reports them.
pub fn compat_output_requested(args: &[String]) -> bool {
    let mut compat = false;
    for arg in args {
        if arg == "--generate-documentation" {
            break;
        }
        if arg == "--compatible-output" {
            compat = true;
        } else if let Some(value) = arg.strip_prefix("--compatible-output=") {
            compat = yes_no("--compatible-output", value).unwrap_or(false);
        }
    }
    compat
}

/// Resolve `args` into [`Options`].
///
/// Non-fatal diagnostics go to `reporter`. `--help` and `--version` stop the
/// scan where they appear.
pub fn parse_options(args: &[String], reporter: &mut dyn Reporter) -> Result<Parsed, DriverError> {
    let mut parser = OptionsParser::new(args, reporter);
    if let Some(early) = parser.scan()? {
        return Ok(early);
    }
    let mut options = parser.finish()?;
    check_consistency(&options)?;
    apply_update_api_mode(&mut options);
    Ok(Parsed::Run(Box::new(options)))
}

struct OptionsParser<'a, 'r> {
    cursor: ArgCursor<'a>,
    options: Options,
    reporter: &'r mut dyn Reporter,
    /// Flag names already warned about.
    reported: HashSet<String>,
    /// `--migrate-nullness` without a file: migrate from `--previous-api`.
    migrate_from_previous: bool,
}

impl<'a, 'r> OptionsParser<'a, 'r> {
    fn new(args: &'a [String], reporter: &'r mut dyn Reporter) -> Self {
        Self {
            cursor: ArgCursor::new(args),
            options: Options::new(compat_output_requested(args)),
            reporter,
            reported: HashSet::new(),
            migrate_from_previous: false,
        }
    }

    fn scan(&mut self) -> Result<Option<Parsed>, DriverError> {
        while let Some(token) = self.cursor.next_token() {
            if let Some(spec) = flags::lookup(token) {
                if let Some(early) = self.handle(spec, token, None)? {
                    return Ok(Some(early));
                }
                continue;
            }

            if flags::is_pass_through(token) {
                self.warn_once(token, format!("Ignoring unimplemented flag {token}"));
                continue;
            }

            if token.starts_with('-') {
                if let Some((name, value)) = token.split_once('=') {
                    let inline = flags::lookup(name).filter(|spec| spec.takes_inline_value());
                    if let Some(spec) = inline {
                        self.handle(spec, name, Some(value))?;
                        continue;
                    }
                }
                self.bind_compat_flag(token)?;
                continue;
            }

            let files = fs_utils::existing_files(token)?;
            self.options.sources.extend(files);
        }
        Ok(None)
    }

    fn handle(
        &mut self,
        spec: &'static FlagSpec,
        flag: &str,
        inline: Option<&'a str>,
    ) -> Result<Option<Parsed>, DriverError> {
        match spec.kind {
            FlagKind::Unimplemented => {
                self.warn_once(flag, format!("Ignoring unimplemented flag {flag}"));
            }
            FlagKind::Deprecated { replacement } => {
                self.warn_once(flag, format!("{flag} is deprecated; use {replacement} instead"));
            }
            FlagKind::Active | FlagKind::Legacy => {}
        }

        match spec.id {
            FlagId::Help => return Ok(Some(Parsed::ShowHelp)),
            FlagId::Version => return Ok(Some(Parsed::ShowVersion)),
            FlagId::Quiet => {
                self.options.quiet = true;
                self.options.verbose = false;
            }
            FlagId::Verbose => {
                self.options.verbose = true;
                self.options.quiet = false;
            }
            FlagId::Color => self.options.color = ColorMode::Always,
            FlagId::NoColor => self.options.color = ColorMode::Never,
            FlagId::NoBanner => self.options.show_banner = false,
            FlagId::OmitCommonPackages => {
                self.options.omit_common_packages = self.toggle(flag, inline)?;
            }
            FlagId::CompatibleOutput => {
                let compat = self.toggle(flag, inline)?;
                self.options.compat_output = compat;
                self.options.compatibility.compat = compat;
            }
            FlagId::Hide => self.set_issue_severity(spec, flag, inline, Severity::Hidden)?,
            FlagId::Error => self.set_issue_severity(spec, flag, inline, Severity::Error)?,
            FlagId::Warning => self.set_issue_severity(spec, flag, inline, Severity::Warning)?,
            FlagId::Lint => self.set_issue_severity(spec, flag, inline, Severity::Lint)?,
            FlagId::WarningsAsErrors => self.options.warnings_as_errors = true,
            FlagId::LintsAsErrors => self.options.lints_as_errors = true,
            FlagId::Baseline => {
                let value = self.value(spec, flag, inline)?;
                self.options.baseline = Some(fs_utils::resolve(value, PathKind::NewOrExistingFile)?);
            }
            FlagId::UpdateBaseline => self.options.update_baseline = true,
            FlagId::RepeatErrorsMax => {
                let value = self.value(spec, flag, inline)?;
                self.options.repeat_errors_max = parse_positive_usize(value, flag)?;
            }

            // API sources
            FlagId::SourceFiles => {
                let value = self.value(spec, flag, inline)?;
                for entry in split_list(value, ',') {
                    let files = fs_utils::existing_files(&entry)?;
                    self.options.sources.extend(files);
                }
            }
            FlagId::SourcePath => {
                let value = self.value(spec, flag, inline)?;
                if value.ends_with(".java") {
                    return Err(DriverError::new(format!(
                        "{flag} should point to a source root directory, not a source file ({value})"
                    )));
                }
                let dirs = fs_utils::resolve_list(value, PathKind::ExistingJarOrDir)?;
                self.options.source_path.extend(dirs);
            }
            FlagId::Classpath => {
                let value = self.value(spec, flag, inline)?;
                let entries = fs_utils::resolve_list(value, PathKind::ExistingJarOrDir)?;
                self.options.classpath.extend(entries);
            }
            FlagId::InputApiJar => {
                self.options.api_jar = Some(self.path(spec, flag, inline, PathKind::ExistingFile)?);
            }
            FlagId::MergeQualifierAnnotations => {
                let value = self.value(spec, flag, inline)?;
                let entries = fs_utils::resolve_list(value, PathKind::ExistingFileOrDir)?;
                self.options.merge_qualifier_annotations.extend(entries);
            }
            FlagId::MergeInclusionAnnotations => {
                let value = self.value(spec, flag, inline)?;
                let entries = fs_utils::resolve_list(value, PathKind::ExistingFileOrDir)?;
                self.options.merge_inclusion_annotations.extend(entries);
            }
            FlagId::ValidateNullabilityFromMergedStubs => {
                self.options.validate_nullability_from_merged_stubs = true;
            }
            FlagId::ValidateNullabilityFromList => {
                self.options.validate_nullability_from_list =
                    Some(self.path(spec, flag, inline, PathKind::ExistingFile)?);
            }
            FlagId::NullabilityWarningsTxt => {
                self.options.nullability_warnings_txt =
                    Some(self.path(spec, flag, inline, PathKind::NewFile)?);
            }
            FlagId::InputKotlinNulls => {
                self.options.input_kotlin_nulls = self.toggle(flag, inline)?;
            }
            FlagId::Manifest => {
                self.options.manifest = Some(self.path(spec, flag, inline, PathKind::ExistingFile)?);
            }
            FlagId::HidePackage => {
                let value = self.value(spec, flag, inline)?;
                self.options.hide_packages.insert(value.to_string());
            }
            FlagId::ShowAnnotation => {
                let value = self.value(spec, flag, inline)?;
                self.options.show_annotations.insert(value.to_string());
            }
            FlagId::ShowSingleAnnotation => {
                let value = self.value(spec, flag, inline)?;
                self.options.show_single_annotations.insert(value.to_string());
            }
            FlagId::HideAnnotation => {
                let value = self.value(spec, flag, inline)?;
                self.options.hide_annotations.insert(value.to_string());
            }
            FlagId::ShowUnannotated => self.options.show_unannotated = true,
            FlagId::PassThroughAnnotation => {
                let value = self.value(spec, flag, inline)?;
                self.options
                    .pass_through_annotations
                    .extend(split_list(value, ','));
            }
            FlagId::JavaSource => {
                let value = self.value(spec, flag, inline)?;
                self.options.java_language_level = value.to_string();
            }
            FlagId::Public => self.options.doc_level = DocLevel::Public,
            FlagId::Protected => self.options.doc_level = DocLevel::Protected,
            FlagId::Package => self.options.doc_level = DocLevel::Package,
            FlagId::Private => self.options.doc_level = DocLevel::Private,
            FlagId::Hidden => self.options.doc_level = DocLevel::Hidden,

            // Documentation
            FlagId::NoDocs => self.options.no_docs = true,
            FlagId::GenerateDocumentation => {
                let rest = self.cursor.take_rest();
                self.options.invoke_documentation_tool_arguments =
                    substitute_doc_placeholders(rest, &self.options);
            }

            // Signature files
            FlagId::Api => {
                self.options.api_file = Some(self.path(spec, flag, inline, PathKind::NewFile)?);
            }
            FlagId::PrivateApi => {
                self.options.private_api_file = Some(self.path(spec, flag, inline, PathKind::NewFile)?);
            }
            FlagId::DexApi => {
                self.options.dex_api_file = Some(self.path(spec, flag, inline, PathKind::NewFile)?);
            }
            FlagId::PrivateDexApi => {
                self.options.private_dex_api_file =
                    Some(self.path(spec, flag, inline, PathKind::NewFile)?);
            }
            FlagId::RemovedApi => {
                self.options.removed_api_file = Some(self.path(spec, flag, inline, PathKind::NewFile)?);
            }
            FlagId::RemovedDexApi => {
                self.options.removed_dex_api_file =
                    Some(self.path(spec, flag, inline, PathKind::NewFile)?);
            }
            FlagId::OutputKotlinNulls => {
                self.options.output_kotlin_nulls = self.toggle(flag, inline)?;
            }
            FlagId::OutputDefaultValues => {
                self.options.output_default_values = self.toggle(flag, inline)?;
            }
            FlagId::IncludeSignatureVersion => {
                self.options.include_signature_version = self.toggle(flag, inline)?;
            }
            FlagId::Proguard => {
                self.options.proguard = Some(self.path(spec, flag, inline, PathKind::NewFile)?);
            }
            FlagId::WriteAndroidJarSignatures => {
                let root = self.path(spec, flag, inline, PathKind::ExistingDir)?;
                if !root.join("prebuilts/sdk").is_dir() {
                    return Err(DriverError::new(format!(
                        "{} does not point to an Android source tree",
                        root.display()
                    )));
                }
                self.options.android_jar_signature_files = Some(root);
            }
            FlagId::SubtractApi => {
                self.options.subtract_api = Some(self.path(spec, flag, inline, PathKind::ExistingFile)?);
            }
            FlagId::TypedefsInSignatures => {
                let value = self.value(spec, flag, inline)?;
                self.options.typedefs_in_signatures = TypedefMode::parse(value).ok_or_else(|| {
                    DriverError::new(format!(
                        "Unexpected value '{value}' for {flag}; expected none, ref or inline"
                    ))
                })?;
            }

            // Stubs
            FlagId::Stubs => {
                self.options.stubs_dir = Some(self.path(spec, flag, inline, PathKind::NewDir)?);
            }
            FlagId::DocStubs => {
                self.options.doc_stubs_dir = Some(self.path(spec, flag, inline, PathKind::NewDir)?);
            }
            FlagId::WriteStubsSourceList => {
                self.options.stubs_source_list = Some(self.path(spec, flag, inline, PathKind::NewFile)?);
            }
            FlagId::WriteDocStubsSourceList => {
                self.options.doc_stubs_source_list =
                    Some(self.path(spec, flag, inline, PathKind::NewFile)?);
            }
            FlagId::StubPackages => {
                let value = self.value(spec, flag, inline)?;
                self.options.stub_packages.extend(split_list(value, ':'));
            }
            FlagId::IncludeAnnotations => self.options.generate_annotations = true,
            FlagId::ExcludeAnnotations => self.options.generate_annotations = false,
            FlagId::ExcludeDocumentationFromStubs => {
                self.options.include_documentation_in_stubs = false;
            }
            FlagId::RegisterArtifact => {
                let file = fs_utils::resolve(self.cursor.take(flag, "<api-file>")?, PathKind::ExistingFile)?;
                let id = self.cursor.take(flag, "<id>")?;
                self.options
                    .artifact_registrations
                    .push((file, id.to_string()));
            }

            // Diffs and checks
            FlagId::PreviousApi => {
                self.options.previous_api = Some(self.path(spec, flag, inline, PathKind::ExistingFile)?);
            }
            FlagId::MigrateNullness => match self.optional_existing_file() {
                Some(file) => self.options.migrate_nulls_from = Some(file),
                None => self.migrate_from_previous = true,
            },
            FlagId::CheckCompatibility => {
                if let Some(file) = self.optional_existing_file() {
                    self.push_check(file, ApiType::PublicApi, ReleaseType::Dev);
                }
            }
            FlagId::CheckCompatibilityApiCurrent => {
                let file = self.path(spec, flag, inline, PathKind::ExistingFile)?;
                self.push_check(file, ApiType::PublicApi, ReleaseType::Dev);
            }
            FlagId::CheckCompatibilityRemovedCurrent => {
                let file = self.path(spec, flag, inline, PathKind::ExistingFile)?;
                self.push_check(file, ApiType::Removed, ReleaseType::Dev);
            }
            FlagId::CheckCompatibilityApiReleased => {
                let file = self.path(spec, flag, inline, PathKind::ExistingFile)?;
                self.push_check(file, ApiType::PublicApi, ReleaseType::Released);
            }
            FlagId::CheckCompatibilityRemovedReleased => {
                let file = self.path(spec, flag, inline, PathKind::ExistingFile)?;
                self.push_check(file, ApiType::Removed, ReleaseType::Released);
            }
            FlagId::CheckKotlinInterop => self.options.check_kotlin_interop = true,
            FlagId::UpdateApi => self.options.update_api = true,
            FlagId::ConvertToJdiff => {
                let from = fs_utils::resolve(self.cursor.take(flag, "<sig>")?, PathKind::ExistingFile)?;
                let to = fs_utils::resolve(self.cursor.take(flag, "<xml>")?, PathKind::NewFile)?;
                self.options
                    .convert_to_xml_files
                    .push(ConvertFile { base: None, from, to });
            }
            FlagId::ConvertNewToJdiff => {
                let base = fs_utils::resolve(self.cursor.take(flag, "<old>")?, PathKind::ExistingFile)?;
                let from = fs_utils::resolve(self.cursor.take(flag, "<new>")?, PathKind::ExistingFile)?;
                let to = fs_utils::resolve(self.cursor.take(flag, "<xml>")?, PathKind::NewFile)?;
                self.options.convert_to_xml_files.push(ConvertFile {
                    base: Some(base),
                    from,
                    to,
                });
            }

            // Statistics
            FlagId::AnnotationCoverageStats => self.options.annotation_coverage_stats = true,
            FlagId::AnnotationCoverageOf => {
                let value = self.value(spec, flag, inline)?;
                let files = fs_utils::existing_files(value)?;
                self.options.annotation_coverage_of.extend(files);
            }
            FlagId::WriteClassCoverageTo => {
                self.options.annotation_coverage_class_report =
                    Some(self.path(spec, flag, inline, PathKind::NewFile)?);
            }
            FlagId::WriteMemberCoverageTo => {
                self.options.annotation_coverage_member_report =
                    Some(self.path(spec, flag, inline, PathKind::NewFile)?);
            }
            FlagId::SkipJavaInCoverageReport => self.options.skip_java_in_coverage_report = true,

            // Annotations
            FlagId::ExtractAnnotations => {
                self.options.external_annotations = Some(self.path(spec, flag, inline, PathKind::NewFile)?);
            }
            FlagId::IncludeSourceRetention => self.options.include_source_retention = true,
            FlagId::CopyAnnotations => {
                let source = fs_utils::resolve(self.cursor.take(flag, "<source>")?, PathKind::ExistingDir)?;
                let target = fs_utils::resolve(self.cursor.take(flag, "<dest>")?, PathKind::NewOrExistingDir)?;
                self.options.copy_annotations_source = Some(source);
                self.options.copy_annotations_target = Some(target);
            }

            // API levels
            FlagId::ApplyApiLevels => {
                self.options.apply_api_levels_xml = Some(self.path(spec, flag, inline, PathKind::ExistingFile)?);
            }
            FlagId::GenerateApiLevels => {
                self.options.generate_api_levels_xml = Some(self.path(spec, flag, inline, PathKind::NewFile)?);
            }
            FlagId::AndroidJarPattern => {
                let value = self.value(spec, flag, inline)?;
                if !value.contains(LEVEL_PLACEHOLDER) {
                    return Err(DriverError::new(format!(
                        "{flag} {value}: pattern must contain {LEVEL_PLACEHOLDER} for the API level"
                    )));
                }
                self.options.android_jar_patterns.push(value.to_string());
            }
            FlagId::CurrentApiLevel => {
                let value = self.value(spec, flag, inline)?;
                self.options.current_api_level = Some(parse_positive_usize(value, flag)?);
            }
            FlagId::CurrentCodename => {
                let value = self.value(spec, flag, inline)?;
                self.options.current_codename = Some(value.to_string());
            }
            FlagId::CurrentJar => {
                self.options.current_jar = Some(self.path(spec, flag, inline, PathKind::ExistingFile)?);
            }
            FlagId::SdkValues => {
                self.options.sdk_values_dir = Some(self.path(spec, flag, inline, PathKind::NewDir)?);
            }
            FlagId::RemoveMissingClassReferencesInApiLevels => {
                self.options.remove_missing_class_references_in_api_levels = true;
            }

            // Legacy tool flags
            FlagId::Encoding => {
                let value = self.value(spec, flag, inline)?;
                if !value.eq_ignore_ascii_case("utf-8") && !value.eq_ignore_ascii_case("utf8") {
                    return Err(DriverError::new(format!(
                        "{value}: Only UTF-8 source encoding is supported"
                    )));
                }
            }
            FlagId::Ignored => self.skip_values(spec.arity, flag, inline)?,
        }
        Ok(None)
    }

    /// The single value of `spec`, inline or from the next token.
    fn value(
        &mut self,
        spec: &FlagSpec,
        flag: &str,
        inline: Option<&'a str>,
    ) -> Result<&'a str, DriverError> {
        let what = match spec.arity {
            Arity::One(what) => what,
            _ => "<value>",
        };
        match inline {
            Some("") => Err(DriverError::missing_value(flag, what)),
            Some(value) => Ok(value),
            None => self.cursor.take(flag, what),
        }
    }

    fn path(
        &mut self,
        spec: &FlagSpec,
        flag: &str,
        inline: Option<&'a str>,
        kind: PathKind,
    ) -> Result<PathBuf, DriverError> {
        let value = self.value(spec, flag, inline)?;
        Ok(fs_utils::resolve(value, kind)?)
    }

    fn toggle(&self, flag: &str, inline: Option<&str>) -> Result<bool, DriverError> {
        inline.map_or(Ok(true), |value| yes_no(flag, value))
    }

    /// Consume the next token if it names an existing file.
    ///
    /// A following flag, a missing path or a directory is left for the scan.
    fn optional_existing_file(&mut self) -> Option<PathBuf> {
        let next = self.cursor.peek()?;
        if next.starts_with('-') {
            return None;
        }
        let file = fs_utils::file_for_path(next);
        if !file.is_file() {
            return None;
        }
        self.cursor.advance();
        Some(file)
    }

    fn push_check(&mut self, file: PathBuf, api_type: ApiType, release_type: ReleaseType) {
        self.options.compatibility_checks.push(CheckRequest {
            file,
            api_type,
            release_type,
        });
    }

    /// Move every comma-separated issue id to the set for `severity`.
    fn set_issue_severity(
        &mut self,
        spec: &FlagSpec,
        flag: &str,
        inline: Option<&'a str>,
        severity: Severity,
    ) -> Result<(), DriverError> {
        let value = self.value(spec, flag, inline)?;
        for id in split_list(value, ',') {
            self.options.hidden_issues.remove(&id);
            self.options.error_issues.remove(&id);
            self.options.warning_issues.remove(&id);
            self.options.lint_issues.remove(&id);
            let target = match severity {
                Severity::Hidden => &mut self.options.hidden_issues,
                Severity::Error => &mut self.options.error_issues,
                Severity::Lint => &mut self.options.lint_issues,
                Severity::Warning | Severity::Info => &mut self.options.warning_issues,
            };
            target.insert(id);
        }
        Ok(())
    }

    /// Consume the values of an ignored legacy flag.
    fn skip_values(&mut self, arity: Arity, flag: &str, inline: Option<&str>) -> Result<(), DriverError> {
        if inline.is_some() {
            return Ok(());
        }
        match arity {
            Arity::Bare | Arity::Toggle => {}
            Arity::One(a) | Arity::OptionalFile(a) => {
                self.cursor.take(flag, a)?;
            }
            Arity::Two(a, b) => {
                self.cursor.take(flag, a)?;
                self.cursor.take(flag, b)?;
            }
            Arity::Three(a, b, c) => {
                self.cursor.take(flag, a)?;
                self.cursor.take(flag, b)?;
                self.cursor.take(flag, c)?;
            }
            Arity::Rest(_) => {
                self.cursor.take_rest();
            }
            Arity::UntilFlag(_) => {
                self.cursor.take_until_flag();
            }
        }
        Ok(())
    }

    fn warn_once(&mut self, flag: &str, message: String) {
        if self.reported.insert(flag.to_string()) {
            self.reporter.report(Severity::Warning, None, &message);
        }
    }

    fn bind_compat_flag(&mut self, token: &str) -> Result<(), DriverError> {
        if apply_compat_flag(&mut self.options.compatibility, token)? {
            return Ok(());
        }
        Err(self.invalid_argument(token))
    }

    fn invalid_argument(&self, token: &str) -> DriverError {
        let mut message = format!("Invalid argument {token}");
        if let Some(suggestion) = suggest_similar_flag(token) {
            message.push_str(&format!("\nDid you mean {suggestion}?"));
        }
        message.push_str("\n\n");
        message.push_str(&usage_text(&Painter::new(self.options.color, OutputStream::Stderr)));
        DriverError::new(message)
    }

    /// Derive state that depends on the whole command line.
    fn finish(mut self) -> Result<Options, DriverError> {
        let options = &mut self.options;

        if self.migrate_from_previous && options.migrate_nulls_from.is_none() {
            options.migrate_nulls_from = options.previous_api.clone();
        }

        let single: Vec<String> = options.show_single_annotations.iter().cloned().collect();
        options.show_annotations.extend(single);

        if options.generate_api_levels_xml.is_some() {
            let level = options.current_api_level.ok_or_else(|| {
                DriverError::new("--generate-api-levels requires --current-api-level")
            })?;
            let codename = options.current_codename.as_deref();
            if effective_current_level(level, codename).is_none() {
                return Err(DriverError::new(format!(
                    "--current-api-level {level} is out of range for codename {}",
                    codename.unwrap_or_default()
                )));
            }
            if options.android_jar_patterns.is_empty() {
                options.android_jar_patterns = DEFAULT_ANDROID_JAR_PATTERNS
                    .iter()
                    .map(|pattern| pattern.to_string())
                    .collect();
            }
            let jars = find_android_jars(
                &options.android_jar_patterns,
                level,
                codename,
                options.current_jar.as_deref(),
            );
            self.reporter.report(
                Severity::Info,
                None,
                &format!("Found platform jars for API levels 1..={}", jars.highest_level()),
            );
            options.platform_jars = Some(jars);
        }

        Ok(self.options)
    }
}

/// Replace output placeholders in the documentation tool's argv.
///
/// `--doc-stubs` becomes the doc stubs directory and
/// `--write-doc-stubs-source-list` becomes `@<list file>`, when configured.
fn substitute_doc_placeholders(rest: &[String], options: &Options) -> Vec<String> {
    rest.iter()
        .map(|arg| match arg.as_str() {
            "--doc-stubs" => options
                .doc_stubs_dir
                .as_ref()
                .map_or_else(|| arg.clone(), |dir| dir.display().to_string()),
            "--write-doc-stubs-source-list" => options
                .doc_stubs_source_list
                .as_ref()
                .map_or_else(|| arg.clone(), |list| format!("@{}", list.display())),
            _ => arg.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::CollectingReporter;
    use std::fs;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run(list: &[&str]) -> Options {
        let mut reporter = CollectingReporter::new();
        match parse_options(&args(list), &mut reporter).unwrap() {
            Parsed::Run(options) => *options,
            other => panic!("expected a run, got {other:?}"),
        }
    }

    #[test]
    fn compat_prescan_last_occurrence_wins() {
        assert!(!compat_output_requested(&args(&[])));
        assert!(compat_output_requested(&args(&["--compatible-output"])));
        assert!(!compat_output_requested(&args(&[
            "--compatible-output",
            "--compatible-output=no"
        ])));
        assert!(!compat_output_requested(&args(&[
            "--generate-documentation",
            "--compatible-output"
        ])));
    }

    #[test]
    fn compat_output_changes_defaults_regardless_of_position() {
        let options = run(&["--omit-common-packages=yes", "--compatible-output=yes"]);
        assert!(options.compat_output);
        assert!(options.omit_common_packages);
        assert!(!options.output_kotlin_nulls);
        assert!(!options.output_default_values);
        assert!(options.compatibility.compat);
    }

    #[test]
    fn help_and_version_stop_the_scan() {
        let mut reporter = CollectingReporter::new();
        let parsed = parse_options(&args(&["--help", "--no-such-flag"]), &mut reporter).unwrap();
        assert!(matches!(parsed, Parsed::ShowHelp));
        let parsed = parse_options(&args(&["-?"]), &mut reporter).unwrap();
        assert!(matches!(parsed, Parsed::ShowHelp));
        let parsed = parse_options(&args(&["--version"]), &mut reporter).unwrap();
        assert!(matches!(parsed, Parsed::ShowVersion));
    }

    #[test]
    fn quiet_and_verbose_are_exclusive() {
        let options = run(&["--verbose", "--quiet"]);
        assert!(options.quiet);
        assert!(!options.verbose);
        let options = run(&["--quiet", "--verbose"]);
        assert!(options.verbose);
        assert!(!options.quiet);
    }

    #[test]
    fn issue_severity_last_assignment_wins() {
        let options = run(&["--hide", "Foo,Bar", "--error", "Foo"]);
        assert!(options.hidden_issues.contains("Bar"));
        assert!(!options.hidden_issues.contains("Foo"));
        assert!(options.error_issues.contains("Foo"));
    }

    #[test]
    fn inline_values_for_single_value_flags() {
        let tmp = TempDir::new().unwrap();
        let api = tmp.path().join("api.txt");
        let api_arg = format!("--api={}", api.display());
        let options = run(&[api_arg.as_str(), "--java-source=1.7"]);
        assert_eq!(options.api_file.as_deref(), Some(api.as_path()));
        assert_eq!(options.java_language_level, "1.7");
    }

    #[test]
    fn empty_inline_value_is_missing() {
        let mut reporter = CollectingReporter::new();
        let err = parse_options(&args(&["--api="]), &mut reporter).unwrap_err();
        assert!(err.message.contains("--api"));
    }

    #[test]
    fn stub_packages_split_on_colons() {
        let options = run(&["--stub-packages", "android.app:android.view"]);
        assert!(options.stub_packages.contains("android.app"));
        assert!(options.stub_packages.contains("android.view"));
    }

    #[test]
    fn typedef_mode_is_validated() {
        let options = run(&["--typedefs-in-signatures", "inline"]);
        assert_eq!(options.typedefs_in_signatures, TypedefMode::Inline);
        let mut reporter = CollectingReporter::new();
        let err = parse_options(&args(&["--typedefs-in-signatures", "all"]), &mut reporter)
            .unwrap_err();
        assert!(err.message.contains("'all'"));
    }

    #[test]
    fn legacy_flags_consume_their_values() {
        let options = run(&["-doclet", "com.example.Doclet", "-werror", "-encoding", "UTF-8"]);
        assert!(options.sources.is_empty());
    }

    #[test]
    fn non_utf8_encoding_is_fatal() {
        let mut reporter = CollectingReporter::new();
        let err = parse_options(&args(&["-encoding", "latin1"]), &mut reporter).unwrap_err();
        assert!(err.message.contains("UTF-8"));
    }

    #[test]
    fn check_compatibility_without_file_adds_nothing() {
        let options = run(&["--check-compatibility", "--no-docs"]);
        assert!(options.compatibility_checks.is_empty());
        assert!(options.no_docs);
    }

    #[test]
    fn pass_through_flags_warn_once() {
        let mut reporter = CollectingReporter::new();
        parse_options(&args(&["-J-Xmx1g", "-J-Xmx1g", "-XDkey=value"]), &mut reporter).unwrap();
        assert_eq!(
            reporter.messages(Severity::Warning),
            vec![
                "Ignoring unimplemented flag -J-Xmx1g",
                "Ignoring unimplemented flag -XDkey=value"
            ]
        );
    }

    #[test]
    fn hdf_skips_values_up_to_the_next_flag() {
        let options = run(&["-hdf", "android.whichdoc", "online", "extra", "--no-docs"]);
        assert!(options.sources.is_empty());
        assert!(options.no_docs);
    }

    #[test]
    fn jar_pattern_needs_a_level_placeholder() {
        let mut reporter = CollectingReporter::new();
        let err = parse_options(&args(&["--android-jar-pattern", "android.jar"]), &mut reporter)
            .unwrap_err();
        assert!(err.message.contains("android.jar"));
        assert!(err.message.contains('%'));
    }

    #[test]
    fn migrate_nullness_defaults_to_previous_api() {
        let tmp = TempDir::new().unwrap();
        let previous = tmp.path().join("previous.txt");
        fs::write(&previous, "").unwrap();
        let options = run(&[
            "--migrate-nullness",
            "--previous-api",
            previous.to_str().unwrap(),
        ]);
        assert_eq!(options.migrate_nulls_from.as_deref(), Some(previous.as_path()));
    }

    #[test]
    fn single_annotations_join_show_annotations() {
        let options = run(&["--show-single-annotation", "android.annotation.SystemApi"]);
        assert!(options.show_annotations.contains("android.annotation.SystemApi"));
        assert!(options.show_single_annotations.contains("android.annotation.SystemApi"));
    }

    #[test]
    fn generate_api_levels_requires_current_level() {
        let tmp = TempDir::new().unwrap();
        let xml = tmp.path().join("levels.xml");
        let mut reporter = CollectingReporter::new();
        let err = parse_options(
            &args(&["--generate-api-levels", xml.to_str().unwrap()]),
            &mut reporter,
        )
        .unwrap_err();
        assert!(err.message.contains("--current-api-level"));
    }

    #[test]
    fn generate_api_levels_discovers_platform_jars() {
        let tmp = TempDir::new().unwrap();
        for level in 1..=3 {
            let dir = tmp.path().join(format!("android-{level}"));
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("android.jar"), "jar").unwrap();
        }
        let pattern = tmp.path().join("android-%/android.jar");
        let xml = tmp.path().join("levels.xml");
        let options = run(&[
            "--android-jar-pattern",
            pattern.to_str().unwrap(),
            "--current-api-level",
            "3",
            "--generate-api-levels",
            xml.to_str().unwrap(),
        ]);
        let jars = options.platform_jars.expect("discovery ran");
        assert_eq!(jars.highest_level(), 3);
    }

    #[test]
    fn compat_flags_bind_after_table_lookup() {
        let options = run(&["--include-synchronized", "-spaceAfterCommaInTypes=yes"]);
        assert!(options.compatibility.include_synchronized);
        assert!(options.compatibility.space_after_comma_in_types);
    }

    #[test]
    fn unknown_flag_suggests_and_prints_usage() {
        let mut reporter = CollectingReporter::new();
        let err = parse_options(&args(&["--stub", "out"]), &mut reporter).unwrap_err();
        assert!(err.message.starts_with("Invalid argument --stub"));
        assert!(err.message.contains("Did you mean --stubs?"));
        assert!(err.message.contains("Usage:"));
    }
}
