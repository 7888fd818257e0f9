//! Platform detection across several candidate platforms.
//!
//! Runs one [`ArchiveValidator`] per platform, in order, and stops at the
//! first valid match. The result is a [`DdpContext`] that extractors receive
//! explicitly instead of consulting any global "current format" state.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::archive::{ArchiveOpener, ZipOpener};
use crate::category::{Category, FileFormat};
use crate::platform::Platform;
use crate::platforms::PlatformProfile;
use crate::validate::{ArchiveValidator, ValidationResult, ValidationStatus};

/// What an extractor needs to know about a recognized archive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DdpContext {
    /// Platform that produced the export
    pub platform: Platform,
    /// Matched category
    pub category: &'static Category,
    /// Format of the matched category
    pub file_format: FileFormat,
    /// Full in-archive paths that passed the extension filter
    pub relevant_paths: Vec<String>,
}

impl DdpContext {
    /// Builds a context from a valid result; `None` for any other status.
    pub fn from_result(result: ValidationResult) -> Option<Self> {
        let category = result.matched_category.filter(|_| result.is_valid())?;
        Some(Self {
            platform: result.platform,
            category,
            file_format: category.file_format,
            relevant_paths: result.relevant_paths,
        })
    }

    /// Relevant paths whose final component equals `file_name`, ignoring case.
    pub fn paths_named<'s>(&'s self, file_name: &'s str) -> impl Iterator<Item = &'s str> + 's {
        self.relevant_paths
            .iter()
            .map(String::as_str)
            .filter(move |p| crate::archive::entry_file_name(p).eq_ignore_ascii_case(file_name))
    }
}

/// Outcome of [`detect`].
#[derive(Debug, Clone, PartialEq)]
pub enum Detection {
    /// A platform accepted the archive.
    Found(DdpContext),
    /// The file is not a readable zip container.
    Corrupt,
    /// Readable, but no candidate platform accepted it.
    NoMatch(Vec<ValidationResult>),
}

impl Detection {
    /// The context, if a platform was found.
    pub fn context(&self) -> Option<&DdpContext> {
        match self {
            Detection::Found(ctx) => Some(ctx),
            _ => None,
        }
    }

    /// Status code of the overall outcome.
    pub fn status(&self) -> ValidationStatus {
        match self {
            Detection::Found(_) => ValidationStatus::Valid,
            Detection::Corrupt => ValidationStatus::CorruptArchive,
            Detection::NoMatch(_) => ValidationStatus::NotRecognized,
        }
    }
}

/// Tries each platform in order against the zip at `path`.
///
/// # Example
///
/// ```rust,no_run
/// use ddpack::detect::{detect, Detection};
/// use ddpack::platform::Platform;
///
/// match detect("takeout-20240724.zip", Platform::all()) {
///     Detection::Found(ctx) => println!("{} / {}", ctx.platform, ctx.category.id),
///     Detection::Corrupt => eprintln!("not a zip file"),
///     Detection::NoMatch(_) => eprintln!("unknown export"),
/// }
/// ```
pub fn detect(path: impl AsRef<Path>, platforms: &[Platform]) -> Detection {
    detect_with(path, platforms, &ZipOpener)
}

/// [`detect`] with a custom archive opener.
pub fn detect_with<O: ArchiveOpener>(path: impl AsRef<Path>, platforms: &[Platform], opener: &O) -> Detection {
    let path = path.as_ref();
    let mut attempts = Vec::with_capacity(platforms.len());

    for platform in platforms {
        let validator = ArchiveValidator::new(PlatformProfile::for_platform(*platform)).with_opener(opener);
        let result = validator.validate(path);
        match result.status {
            ValidationStatus::Valid => {
                let ctx = DdpContext::from_result(result);
                if let Some(ctx) = ctx {
                    info!(platform = %ctx.platform, category = ctx.category.id, "platform detected");
                    return Detection::Found(ctx);
                }
            }
            // the container is the same for every platform
            ValidationStatus::CorruptArchive => return Detection::Corrupt,
            ValidationStatus::NotRecognized => attempts.push(result),
        }
    }

    Detection::NoMatch(attempts)
}
