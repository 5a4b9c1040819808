//! The flag table.
//!
//! [`FLAGS`] is the only list of recognized flags: the dispatcher looks tokens
//! up in it and the usage text is rendered from it.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Parsing action selected by a flag.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum FlagId {
    // General
    Help,
    Version,
    Quiet,
    Verbose,
    Color,
    NoColor,
    NoBanner,
    OmitCommonPackages,
    CompatibleOutput,
    Hide,
    Error,
    Warning,
    Lint,
    WarningsAsErrors,
    LintsAsErrors,
    Baseline,
    UpdateBaseline,
    RepeatErrorsMax,
    // API sources
    SourceFiles,
    SourcePath,
    Classpath,
    InputApiJar,
    MergeQualifierAnnotations,
    MergeInclusionAnnotations,
    ValidateNullabilityFromMergedStubs,
    ValidateNullabilityFromList,
    NullabilityWarningsTxt,
    InputKotlinNulls,
    Manifest,
    HidePackage,
    ShowAnnotation,
    ShowSingleAnnotation,
    HideAnnotation,
    ShowUnannotated,
    PassThroughAnnotation,
    JavaSource,
    Public,
    Protected,
    Package,
    Private,
    Hidden,
    // Documentation
    NoDocs,
    GenerateDocumentation,
    // Signature files
    Api,
    PrivateApi,
    DexApi,
    PrivateDexApi,
    RemovedApi,
    RemovedDexApi,
    OutputKotlinNulls,
    OutputDefaultValues,
    IncludeSignatureVersion,
    Proguard,
    WriteAndroidJarSignatures,
    SubtractApi,
    TypedefsInSignatures,
    // Stubs
    Stubs,
    DocStubs,
    WriteStubsSourceList,
    WriteDocStubsSourceList,
    StubPackages,
    IncludeAnnotations,
    ExcludeAnnotations,
    ExcludeDocumentationFromStubs,
    RegisterArtifact,
    // Diffs and checks
    PreviousApi,
    MigrateNullness,
    CheckCompatibility,
    CheckCompatibilityApiCurrent,
    CheckCompatibilityRemovedCurrent,
    CheckCompatibilityApiReleased,
    CheckCompatibilityRemovedReleased,
    CheckKotlinInterop,
    UpdateApi,
    ConvertToJdiff,
    ConvertNewToJdiff,
    // Statistics
    AnnotationCoverageStats,
    AnnotationCoverageOf,
    WriteClassCoverageTo,
    WriteMemberCoverageTo,
    SkipJavaInCoverageReport,
    // Annotations
    ExtractAnnotations,
    IncludeSourceRetention,
    CopyAnnotations,
    // API levels
    ApplyApiLevels,
    GenerateApiLevels,
    AndroidJarPattern,
    CurrentApiLevel,
    CurrentCodename,
    CurrentJar,
    SdkValues,
    RemoveMissingClassReferencesInApiLevels,
    // Legacy tool flags
    Encoding,
    Ignored,
}

/// How many tokens a flag consumes after itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Arity {
    Bare,
    /// `--flag` or `--flag=yes|no`.
    Toggle,
    One(&'static str),
    Two(&'static str, &'static str),
    Three(&'static str, &'static str, &'static str),
    /// Consumes the next token only if it is an existing file.
    OptionalFile(&'static str),
    /// Consumes every remaining token.
    Rest(&'static str),
    /// Consumes tokens up to the next one starting with `-`.
    UntilFlag(&'static str),
}

impl Arity {
    /// Metavariables shown after the flag name in usage text.
    pub fn metavars(&self) -> String {
        match self {
            Arity::Bare => String::new(),
            Arity::Toggle => "[=yes|no]".to_string(),
            Arity::One(a) => format!(" {a}"),
            Arity::Two(a, b) => format!(" {a} {b}"),
            Arity::Three(a, b, c) => format!(" {a} {b} {c}"),
            Arity::OptionalFile(a) => format!(" [{a}]"),
            Arity::Rest(a) | Arity::UntilFlag(a) => format!(" {a}..."),
        }
    }
}

/// Whether a flag is live, kept for drop-in compatibility, or on its way out.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FlagKind {
    Active,
    /// Accepted silently.
    Legacy,
    /// Accepted with a one-time warning, otherwise ignored.
    Unimplemented,
    /// Handled as `replacement` after a one-time warning.
    Deprecated { replacement: &'static str },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, PartialOrd, Ord)]
pub enum Section {
    General,
    ApiSources,
    Documentation,
    SignatureFiles,
    Stubs,
    DiffsAndChecks,
    Statistics,
    Annotations,
    ApiLevels,
    Legacy,
}

impl Section {
    pub const ALL: &'static [Section] = &[
        Section::General,
        Section::ApiSources,
        Section::Documentation,
        Section::SignatureFiles,
        Section::Stubs,
        Section::DiffsAndChecks,
        Section::Statistics,
        Section::Annotations,
        Section::ApiLevels,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::General => "General",
            Section::ApiSources => "API sources",
            Section::Documentation => "Documentation",
            Section::SignatureFiles => "Extracting Signature Files",
            Section::Stubs => "Generating Stubs",
            Section::DiffsAndChecks => "Diffs and Checks",
            Section::Statistics => "Statistics",
            Section::Annotations => "Extracting Annotations",
            Section::ApiLevels => "Injecting API Levels",
            Section::Legacy => "Legacy",
        }
    }
}

/// One row of the flag table.
#[derive(Clone, Copy, Debug)]
pub struct FlagSpec {
    pub id: FlagId,
    /// Canonical spelling first, then synonyms.
    pub names: &'static [&'static str],
    pub arity: Arity,
    pub kind: FlagKind,
    pub section: Section,
    pub help: &'static str,
}

impl FlagSpec {
    pub fn name(&self) -> &'static str {
        self.names[0]
    }

    /// Accepts `--flag=value` in addition to the separated form.
    pub fn takes_inline_value(&self) -> bool {
        matches!(self.arity, Arity::Toggle | Arity::One(_))
    }
}

const fn active(
    id: FlagId,
    names: &'static [&'static str],
    arity: Arity,
    section: Section,
    help: &'static str,
) -> FlagSpec {
    FlagSpec {
        id,
        names,
        arity,
        kind: FlagKind::Active,
        section,
        help,
    }
}

const fn legacy(names: &'static [&'static str], arity: Arity) -> FlagSpec {
    FlagSpec {
        id: FlagId::Ignored,
        names,
        arity,
        kind: FlagKind::Legacy,
        section: Section::Legacy,
        help: "",
    }
}

const fn unimplemented(names: &'static [&'static str], arity: Arity) -> FlagSpec {
    FlagSpec {
        id: FlagId::Ignored,
        names,
        arity,
        kind: FlagKind::Unimplemented,
        section: Section::Legacy,
        help: "",
    }
}

const fn deprecated(
    id: FlagId,
    names: &'static [&'static str],
    arity: Arity,
    replacement: &'static str,
) -> FlagSpec {
    FlagSpec {
        id,
        names,
        arity,
        kind: FlagKind::Deprecated { replacement },
        section: Section::Legacy,
        help: "",
    }
}

use Arity::*;
use FlagId as F;
use Section as S;

pub const FLAGS: &[FlagSpec] = &[
    // === General ===
    active(F::Help, &["--help", "-h", "-?"], Bare, S::General, "This message."),
    active(F::Version, &["--version"], Bare, S::General, "Show the version and exit."),
    active(F::Quiet, &["--quiet"], Bare, S::General, "Only include vital output."),
    active(F::Verbose, &["--verbose"], Bare, S::General, "Include extra diagnostic output."),
    active(F::Color, &["--color"], Bare, S::General, "Attempt to colorize the output."),
    active(F::NoColor, &["--no-color"], Bare, S::General, "Do not attempt to colorize the output."),
    active(F::NoBanner, &["--no-banner"], Bare, S::General, "Do not show the tool banner."),
    active(
        F::OmitCommonPackages,
        &["--omit-common-packages"],
        Toggle,
        S::General,
        "Omit java.lang and similar common packages from type references in signature files.",
    ),
    active(
        F::CompatibleOutput,
        &["--compatible-output"],
        Toggle,
        S::General,
        "Write signature files in the legacy format.",
    ),
    active(F::Hide, &["--hide", "-hide"], One("<id>"), S::General, "Hide/skip issues of the given id."),
    active(F::Error, &["--error", "-error"], One("<id>"), S::General, "Report issues of the given id as errors."),
    active(F::Warning, &["--warning", "-warning"], One("<id>"), S::General, "Report issues of the given id as warnings."),
    active(F::Lint, &["--lint"], One("<id>"), S::General, "Report issues of the given id as lint warnings."),
    active(F::WarningsAsErrors, &["--warnings-as-errors"], Bare, S::General, "Promote all warnings to errors."),
    active(F::LintsAsErrors, &["--lints-as-errors"], Bare, S::General, "Promote all lint warnings to errors."),
    active(F::Baseline, &["--baseline"], One("<file>"), S::General, "Filter out issues already recorded in this baseline file."),
    active(F::UpdateBaseline, &["--update-baseline"], Bare, S::General, "Rewrite the baseline file with the current issues."),
    active(
        F::RepeatErrorsMax,
        &["--repeat-errors-max"],
        One("<n>"),
        S::General,
        "Repeat at most N errors of the same issue at the end of the run.",
    ),
    // === API sources ===
    active(
        F::SourceFiles,
        &["--source-files"],
        One("<files>"),
        S::ApiSources,
        "A comma separated list of source files; @file reads whitespace separated paths from a file.",
    ),
    active(
        F::SourcePath,
        &["--source-path", "--sourcepath", "-sourcepath"],
        One("<paths>"),
        S::ApiSources,
        "Source directories, separated by the platform path separator.",
    ),
    active(
        F::Classpath,
        &["--classpath", "--class-path", "-classpath"],
        One("<paths>"),
        S::ApiSources,
        "Jars and directories with library classes, separated by the platform path separator.",
    ),
    active(
        F::InputApiJar,
        &["--input-api-jar"],
        One("<jar>"),
        S::ApiSources,
        "Read the API from a compiled jar instead of sources.",
    ),
    active(
        F::MergeQualifierAnnotations,
        &["--merge-qualifier-annotations"],
        One("<paths>"),
        S::ApiSources,
        "External annotation files or directories to merge into the codebase.",
    ),
    active(
        F::MergeInclusionAnnotations,
        &["--merge-inclusion-annotations"],
        One("<paths>"),
        S::ApiSources,
        "Inclusion annotation files or directories to merge into the codebase.",
    ),
    active(
        F::ValidateNullabilityFromMergedStubs,
        &["--validate-nullability-from-merged-stubs"],
        Bare,
        S::ApiSources,
        "Validate nullability of APIs whose annotations came from merged stubs.",
    ),
    active(
        F::ValidateNullabilityFromList,
        &["--validate-nullability-from-list"],
        One("<file>"),
        S::ApiSources,
        "Validate nullability of the classes listed in this file.",
    ),
    active(
        F::NullabilityWarningsTxt,
        &["--nullability-warnings-txt"],
        One("<file>"),
        S::ApiSources,
        "Write nullability validation warnings to this file.",
    ),
    active(
        F::InputKotlinNulls,
        &["--input-kotlin-nulls"],
        Toggle,
        S::ApiSources,
        "Input signature files use Kotlin-style nullness markers.",
    ),
    active(F::Manifest, &["--manifest"], One("<file>"), S::ApiSources, "The AndroidManifest.xml of the library."),
    active(
        F::HidePackage,
        &["--hide-package", "-hidePackage"],
        One("<package>"),
        S::ApiSources,
        "Remove the given package from the API.",
    ),
    active(
        F::ShowAnnotation,
        &["--show-annotation", "-showAnnotation"],
        One("<class>"),
        S::ApiSources,
        "Unhide APIs annotated with the given annotation.",
    ),
    active(
        F::ShowSingleAnnotation,
        &["--show-single-annotation"],
        One("<class>"),
        S::ApiSources,
        "Like --show-annotation, without applying to members of annotated classes.",
    ),
    active(
        F::HideAnnotation,
        &["--hide-annotation", "-hideAnnotation"],
        One("<class>"),
        S::ApiSources,
        "Hide APIs annotated with the given annotation.",
    ),
    active(
        F::ShowUnannotated,
        &["--show-unannotated"],
        Bare,
        S::ApiSources,
        "Include unannotated APIs alongside --show-annotation ones.",
    ),
    active(
        F::PassThroughAnnotation,
        &["--pass-through-annotation"],
        One("<class>"),
        S::ApiSources,
        "Copy the given annotation into stubs unchanged.",
    ),
    active(
        F::JavaSource,
        &["--java-source", "-source"],
        One("<level>"),
        S::ApiSources,
        "The Java language level of the sources.",
    ),
    active(F::Public, &["--public", "-public"], Bare, S::ApiSources, "Only include public elements."),
    active(F::Protected, &["--protected", "-protected"], Bare, S::ApiSources, "Only include public and protected elements."),
    active(F::Package, &["--package", "-package"], Bare, S::ApiSources, "Include package-private elements."),
    active(F::Private, &["--private", "-private"], Bare, S::ApiSources, "Include private elements."),
    active(F::Hidden, &["--hidden", "-hidden"], Bare, S::ApiSources, "Include hidden elements."),
    // === Documentation ===
    active(F::NoDocs, &["--no-docs"], Bare, S::Documentation, "Do not generate documentation."),
    active(
        F::GenerateDocumentation,
        &["--generate-documentation"],
        Rest("<argv>"),
        S::Documentation,
        "Run the documentation tool with all remaining arguments; --doc-stubs and \
         --write-doc-stubs-source-list are replaced by the configured outputs.",
    ),
    // === Signature files ===
    active(F::Api, &["--api", "-api"], One("<file>"), S::SignatureFiles, "Write the public API signature file."),
    active(
        F::PrivateApi,
        &["--private-api", "-privateApi"],
        One("<file>"),
        S::SignatureFiles,
        "Write a signature file of everything outside the public API.",
    ),
    active(F::DexApi, &["--dex-api", "-dexApi"], One("<file>"), S::SignatureFiles, "Write the API in DEX signature format."),
    active(
        F::PrivateDexApi,
        &["--private-dex-api", "-privateDexApi"],
        One("<file>"),
        S::SignatureFiles,
        "Write the private API in DEX signature format.",
    ),
    active(
        F::RemovedApi,
        &["--removed-api", "-removedApi"],
        One("<file>"),
        S::SignatureFiles,
        "Write the signature file of removed APIs.",
    ),
    active(
        F::RemovedDexApi,
        &["--removed-dex-api", "-removedDexApi"],
        One("<file>"),
        S::SignatureFiles,
        "Write the removed APIs in DEX signature format.",
    ),
    active(
        F::OutputKotlinNulls,
        &["--output-kotlin-nulls"],
        Toggle,
        S::SignatureFiles,
        "Use Kotlin-style nullness markers in signature files.",
    ),
    active(
        F::OutputDefaultValues,
        &["--output-default-values"],
        Toggle,
        S::SignatureFiles,
        "Include default parameter values in signature files.",
    ),
    active(
        F::IncludeSignatureVersion,
        &["--include-signature-version"],
        Toggle,
        S::SignatureFiles,
        "Write the signature format version header.",
    ),
    active(
        F::Proguard,
        &["--proguard", "-proguard"],
        One("<file>"),
        S::SignatureFiles,
        "Write proguard keep rules for the API.",
    ),
    active(
        F::WriteAndroidJarSignatures,
        &["--write-android-jar-signatures"],
        One("<dir>"),
        S::SignatureFiles,
        "Export signature files for every discovered platform jar.",
    ),
    active(
        F::SubtractApi,
        &["--subtract-api"],
        One("<file>"),
        S::SignatureFiles,
        "Omit APIs present in this signature file.",
    ),
    active(
        F::TypedefsInSignatures,
        &["--typedefs-in-signatures"],
        One("<none|ref|inline>"),
        S::SignatureFiles,
        "How typedef annotations appear in signature files.",
    ),
    // === Stubs ===
    active(F::Stubs, &["--stubs", "-stubs"], One("<dir>"), S::Stubs, "Generate stub source files into this directory."),
    active(F::DocStubs, &["--doc-stubs"], One("<dir>"), S::Stubs, "Generate documentation stubs into this directory."),
    active(
        F::WriteStubsSourceList,
        &["--write-stubs-source-list"],
        One("<file>"),
        S::Stubs,
        "Write the list of generated stub files.",
    ),
    active(
        F::WriteDocStubsSourceList,
        &["--write-doc-stubs-source-list"],
        One("<file>"),
        S::Stubs,
        "Write the list of generated documentation stub files.",
    ),
    active(
        F::StubPackages,
        &["--stub-packages", "-stubpackages"],
        One("<packages>"),
        S::Stubs,
        "Colon separated packages to generate stubs for.",
    ),
    active(F::IncludeAnnotations, &["--include-annotations"], Bare, S::Stubs, "Include annotations in stubs."),
    active(F::ExcludeAnnotations, &["--exclude-annotations"], Bare, S::Stubs, "Exclude annotations from stubs."),
    active(
        F::ExcludeDocumentationFromStubs,
        &["--exclude-documentation-from-stubs"],
        Bare,
        S::Stubs,
        "Leave doc comments out of stubs.",
    ),
    active(
        F::RegisterArtifact,
        &["--register-artifact", "-artifact"],
        Two("<api-file>", "<id>"),
        S::Stubs,
        "Associate the APIs in a signature file with a maven artifact id.",
    ),
    // === Diffs and checks ===
    active(F::PreviousApi, &["--previous-api"], One("<file>"), S::DiffsAndChecks, "The API of the previous release."),
    active(
        F::MigrateNullness,
        &["--migrate-nullness"],
        OptionalFile("<api-file>"),
        S::DiffsAndChecks,
        "Migrate nullness annotations from this API (default: --previous-api).",
    ),
    active(
        F::CheckCompatibilityApiCurrent,
        &["--check-compatibility:api:current"],
        One("<file>"),
        S::DiffsAndChecks,
        "Check compatibility with the current public API.",
    ),
    active(
        F::CheckCompatibilityRemovedCurrent,
        &["--check-compatibility:removed:current"],
        One("<file>"),
        S::DiffsAndChecks,
        "Check compatibility with the current removed API.",
    ),
    active(
        F::CheckCompatibilityApiReleased,
        &["--check-compatibility:api:released"],
        One("<file>"),
        S::DiffsAndChecks,
        "Check compatibility with a released public API.",
    ),
    active(
        F::CheckCompatibilityRemovedReleased,
        &["--check-compatibility:removed:released"],
        One("<file>"),
        S::DiffsAndChecks,
        "Check compatibility with a released removed API.",
    ),
    active(
        F::CheckKotlinInterop,
        &["--check-kotlin-interop"],
        Bare,
        S::DiffsAndChecks,
        "Check API surface for Kotlin interop guidelines.",
    ),
    active(
        F::UpdateApi,
        &["--update-api"],
        Bare,
        S::DiffsAndChecks,
        "Only write signature files; every other output is cancelled.",
    ),
    active(
        F::ConvertToJdiff,
        &["--convert-to-jdiff"],
        Two("<sig>", "<xml>"),
        S::DiffsAndChecks,
        "Convert a signature file to JDiff XML.",
    ),
    active(
        F::ConvertNewToJdiff,
        &["--convert-new-to-jdiff"],
        Three("<old>", "<new>", "<xml>"),
        S::DiffsAndChecks,
        "Write the APIs added between two signature files as JDiff XML.",
    ),
    // === Statistics ===
    active(
        F::AnnotationCoverageStats,
        &["--annotation-coverage-stats"],
        Bare,
        S::Statistics,
        "Print nullness annotation coverage statistics.",
    ),
    active(
        F::AnnotationCoverageOf,
        &["--annotation-coverage-of"],
        One("<files>"),
        S::Statistics,
        "Measure coverage of APIs referenced from these files.",
    ),
    active(
        F::WriteClassCoverageTo,
        &["--write-class-coverage-to"],
        One("<file>"),
        S::Statistics,
        "Write per-class annotation coverage to a file.",
    ),
    active(
        F::WriteMemberCoverageTo,
        &["--write-member-coverage-to"],
        One("<file>"),
        S::Statistics,
        "Write per-member annotation coverage to a file.",
    ),
    active(
        F::SkipJavaInCoverageReport,
        &["--skip-java-in-coverage-report"],
        Bare,
        S::Statistics,
        "Only count Kotlin sources in coverage reports.",
    ),
    // === Annotations ===
    active(
        F::ExtractAnnotations,
        &["--extract-annotations"],
        One("<zipfile>"),
        S::Annotations,
        "Write external annotations to a zip file.",
    ),
    active(
        F::IncludeSourceRetention,
        &["--include-source-retention"],
        Bare,
        S::Annotations,
        "Also extract source-retention annotations.",
    ),
    active(
        F::CopyAnnotations,
        &["--copy-annotations"],
        Two("<source>", "<dest>"),
        S::Annotations,
        "Copy private annotation sources into a new directory.",
    ),
    // === API levels ===
    active(
        F::ApplyApiLevels,
        &["--apply-api-levels"],
        One("<xml>"),
        S::ApiLevels,
        "Read API levels from this XML file.",
    ),
    active(
        F::GenerateApiLevels,
        &["--generate-api-levels"],
        One("<xml>"),
        S::ApiLevels,
        "Generate an API level XML file from the platform jars.",
    ),
    active(
        F::AndroidJarPattern,
        &["--android-jar-pattern"],
        One("<pattern>"),
        S::ApiLevels,
        "Platform jar path pattern, % is replaced by the API level.",
    ),
    active(
        F::CurrentApiLevel,
        &["--current-api-level"],
        One("<n>"),
        S::ApiLevels,
        "The API level of the platform being built.",
    ),
    active(
        F::CurrentCodename,
        &["--current-codename"],
        One("<name>"),
        S::ApiLevels,
        "Codename of the platform being built; anything but REL means the next level.",
    ),
    active(
        F::CurrentJar,
        &["--current-jar"],
        One("<jar>"),
        S::ApiLevels,
        "Platform jar to use for the current API level.",
    ),
    active(
        F::SdkValues,
        &["--sdk-values", "-sdkvalues"],
        One("<dir>"),
        S::ApiLevels,
        "Write SDK values files into this directory.",
    ),
    active(
        F::RemoveMissingClassReferencesInApiLevels,
        &["--remove-missing-class-references-in-api-levels"],
        Bare,
        S::ApiLevels,
        "Drop references to classes missing from the platform jars.",
    ),
    // === Legacy and deprecated spellings ===
    active(
        F::CheckCompatibility,
        &["--check-compatibility"],
        OptionalFile("<api-file>"),
        S::DiffsAndChecks,
        "Legacy form of --check-compatibility:api:current; ignored without an existing file.",
    ),
    deprecated(
        F::MergeQualifierAnnotations,
        &["--merge-annotations"],
        One("<paths>"),
        "--merge-qualifier-annotations",
    ),
    deprecated(F::CurrentApiLevel, &["--current-version"], One("<n>"), "--current-api-level"),
    deprecated(
        F::CheckCompatibilityApiCurrent,
        &["--current-api"],
        One("<file>"),
        "--check-compatibility:api:current",
    ),
    deprecated(F::SdkValues, &["--sdkvalues"], One("<dir>"), "--sdk-values"),
    // === Legacy tool flags, accepted silently ===
    FlagSpec {
        id: FlagId::Encoding,
        names: &["-encoding"],
        arity: One("<encoding>"),
        kind: FlagKind::Legacy,
        section: Section::Legacy,
        help: "",
    },
    legacy(&["-android"], Bare),
    legacy(&["-stubsourceonly"], Bare),
    legacy(&["-XDignore.symbol.file"], Bare),
    legacy(&["-keepstubcomments"], Bare),
    legacy(&["--noop", "--no-op"], Bare),
    legacy(&["-werror"], Bare),
    legacy(&["-lerror"], Bare),
    legacy(&["-bootclasspath"], One("<path>")),
    legacy(&["-doclet"], One("<class>")),
    legacy(&["-docletpath"], One("<path>")),
    legacy(&["-templatedir"], One("<dir>")),
    legacy(&["-htmldir"], One("<dir>")),
    legacy(&["-knowntags"], One("<file>")),
    legacy(&["-resourcesdir"], One("<dir>")),
    legacy(&["-resourcesoutdir"], One("<dir>")),
    legacy(&["-yaml"], One("<file>")),
    legacy(&["-apidocsdir"], One("<dir>")),
    legacy(&["-toroot"], One("<path>")),
    legacy(&["-samplegroup"], One("<group>")),
    legacy(&["-samplesdir"], One("<dir>")),
    // === Legacy tool flags, not implemented ===
    unimplemented(&["-quiet"], Bare),
    unimplemented(&["-yamlV2"], Bare),
    unimplemented(&["-offlinemode"], Bare),
    unimplemented(&["-metadataDebug"], Bare),
    unimplemented(&["-includePreview"], Bare),
    unimplemented(&["-ignoreJdLinks"], Bare),
    unimplemented(&["-referenceonly"], Bare),
    unimplemented(&["-devsite"], Bare),
    unimplemented(&["-nodefaultassets"], Bare),
    unimplemented(&["-parsecomments"], Bare),
    unimplemented(&["-gcmref"], Bare),
    unimplemented(&["-staticonly"], Bare),
    unimplemented(&["-navtreeonly"], Bare),
    unimplemented(&["-atLinksNavtree"], Bare),
    unimplemented(&["-d"], One("<dir>")),
    unimplemented(&["-title"], One("<text>")),
    unimplemented(&["-overview"], One("<file>")),
    unimplemented(&["-dac_libraryroot"], One("<dir>")),
    unimplemented(&["-dac_dataname"], One("<name>")),
    unimplemented(&["-proofread"], One("<file>")),
    unimplemented(&["-todo"], One("<file>")),
    unimplemented(&["-since"], Two("<file>", "<version>")),
    unimplemented(&["-hdf"], UntilFlag("<key> <value...>")),
    unimplemented(&["-federate"], Two("<name>", "<url>")),
    unimplemented(&["-federationapi"], Two("<name>", "<file>")),
    unimplemented(&["-htmldir2"], Two("<dir>", "<dir>")),
    unimplemented(&["-samplecode"], Three("<dir>", "<name>", "<title>")),
];

/// Prefixes of flags meant for the documentation tool's JVM (`-J-Xmx1g`) or
/// compiler properties (`-XDkey=value`). Ignored with a warning.
pub const PASS_THROUGH_PREFIXES: &[&str] = &["-J-", "-XD"];

/// True if `token` is a pass-through flag not listed in [`FLAGS`].
pub fn is_pass_through(token: &str) -> bool {
    PASS_THROUGH_PREFIXES
        .iter()
        .any(|prefix| token.starts_with(prefix))
}

static FLAG_INDEX: Lazy<HashMap<&'static str, &'static FlagSpec>> = Lazy::new(|| {
    FLAGS
        .iter()
        .flat_map(|spec| spec.names.iter().map(move |name| (*name, spec)))
        .collect()
});

/// Look up a flag by any of its spellings.
pub fn lookup(name: &str) -> Option<&'static FlagSpec> {
    FLAG_INDEX.get(name).copied()
}

/// All spellings of flags that appear in usage text.
pub fn documented_names() -> impl Iterator<Item = &'static str> {
    FLAGS
        .iter()
        .filter(|spec| spec.kind == FlagKind::Active)
        .flat_map(|spec| spec.names.iter().copied())
}
