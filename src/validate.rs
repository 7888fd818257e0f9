//! Archive validation.
//!
//! [`ArchiveValidator`] decides whether an uploaded zip is an export of one
//! particular platform:
//!
//! 1. open the archive; failure means [`ValidationStatus::CorruptArchive`]
//! 2. list entry paths, keeping those with one of the platform's extensions
//! 3. infer a category from the final path components
//! 4. let the platform's exclusion rules veto the match
//!
//! Errors never escape: every outcome is a [`ValidationResult`]. The archive
//! handle is dropped before the result is returned, whatever the outcome.
//!
//! # Example
//!
//! ```rust,no_run
//! use ddpack::platform::Platform;
//! use ddpack::validate::{ArchiveValidator, ValidationStatus};
//!
//! let validator = ArchiveValidator::for_platform(Platform::Facebook);
//! let result = validator.validate("facebook-jdoe-2024.zip");
//!
//! if result.status == ValidationStatus::Valid {
//!     println!("matched {}", result.matched_category.map_or("", |c| c.id));
//! }
//! ```

use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::archive::{entry_file_name, list_entries, ArchiveOpener, ZipOpener};
use crate::category::Category;
use crate::exclusion::{first_rejection, ArchiveFacts};
use crate::inference::infer_category;
use crate::platform::Platform;
use crate::platforms::PlatformProfile;

/// Outcome of validating one archive against one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    /// A category was inferred and no exclusion rule objected.
    Valid,
    /// Readable zip, but not an export of this platform.
    NotRecognized,
    /// The file is not a readable zip container.
    CorruptArchive,
}

impl ValidationStatus {
    /// Numeric code: 0 valid, 1 not recognized, 2 corrupt.
    pub fn code(&self) -> u8 {
        match self {
            ValidationStatus::Valid => 0,
            ValidationStatus::NotRecognized => 1,
            ValidationStatus::CorruptArchive => 2,
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            ValidationStatus::Valid => "Valid DDP",
            ValidationStatus::NotRecognized => "Not a valid DDP",
            ValidationStatus::CorruptArchive => "Bad zipfile",
        }
    }

    /// Returns true for [`ValidationStatus::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationStatus::Valid)
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Everything the validator learned about an archive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Platform whose categories were tried
    pub platform: Platform,

    /// Final status
    pub status: ValidationStatus,

    /// Category the archive was matched to; only set when valid
    pub matched_category: Option<&'static Category>,

    /// Coverage of the best candidate category, in percent
    pub coverage_percent: f64,

    /// Full in-archive paths that passed the extension filter
    pub relevant_paths: Vec<String>,
}

impl ValidationResult {
    fn corrupt(platform: Platform) -> Self {
        Self {
            platform,
            status: ValidationStatus::CorruptArchive,
            matched_category: None,
            coverage_percent: 0.0,
            relevant_paths: Vec::new(),
        }
    }

    /// Returns true if the archive was accepted.
    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }
}

/// Validates archives against one platform's profile.
#[derive(Debug)]
pub struct ArchiveValidator<O = ZipOpener> {
    profile: PlatformProfile,
    opener: O,
}

impl ArchiveValidator<ZipOpener> {
    /// Creates a validator reading zip files from disk.
    pub fn new(profile: PlatformProfile) -> Self {
        Self {
            profile,
            opener: ZipOpener,
        }
    }

    /// Creates a validator with a platform's built-in profile.
    pub fn for_platform(platform: Platform) -> Self {
        Self::new(PlatformProfile::for_platform(platform))
    }
}

impl<O: ArchiveOpener> ArchiveValidator<O> {
    /// Replaces the archive opener.
    pub fn with_opener<P: ArchiveOpener>(self, opener: P) -> ArchiveValidator<P> {
        ArchiveValidator {
            profile: self.profile,
            opener,
        }
    }

    /// The profile in use.
    pub fn profile(&self) -> &PlatformProfile {
        &self.profile
    }

    /// Validates the archive at `path`, using its file name for exclusion rules.
    pub fn validate(&self, path: impl AsRef<Path>) -> ValidationResult {
        let path = path.as_ref();
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        self.validate_with_name(path, &name)
    }

    /// Validates the archive at `path` under an explicit archive name.
    ///
    /// Useful when the file on disk is a temporary copy of an upload whose
    /// original name is known.
    pub fn validate_with_name(&self, path: impl AsRef<Path>, archive_name: &str) -> ValidationResult {
        let path = path.as_ref();
        let platform = self.profile.platform;

        let entries = match self.opener.open(path) {
            Ok(mut archive) => list_entries(&mut archive),
            Err(e) => {
                error!(%platform, path = %path.display(), error = %e, "Bad zip file");
                return ValidationResult::corrupt(platform);
            }
        };

        let relevant_paths: Vec<String> =
            entries.into_iter().filter(|entry| self.profile.is_relevant(entry)).collect();
        for entry in &relevant_paths {
            debug!(%platform, "Found: {} in zip", entry_file_name(entry));
        }

        let file_names: Vec<&str> = relevant_paths.iter().map(|p| entry_file_name(p)).collect();
        let inference = infer_category(&file_names, self.profile.registry.as_slice());
        let coverage_percent = inference.best().map_or(0.0, |c| c.percent());

        let Some(category) = inference.category else {
            warn!(%platform, "Could not infer DDP category");
            return ValidationResult {
                platform,
                status: ValidationStatus::NotRecognized,
                matched_category: None,
                coverage_percent,
                relevant_paths,
            };
        };

        let facts = ArchiveFacts::new(category, archive_name, &relevant_paths);
        if let Some(rule) = first_rejection(&self.profile.rules, &facts) {
            warn!(%platform, rule, category = category.id, "match rejected by exclusion rule");
            return ValidationResult {
                platform,
                status: ValidationStatus::NotRecognized,
                matched_category: None,
                coverage_percent,
                relevant_paths,
            };
        }

        info!(%platform, category = category.id, "Valid DDP");
        ValidationResult {
            platform,
            status: ValidationStatus::Valid,
            matched_category: Some(category),
            coverage_percent,
            relevant_paths,
        }
    }
}
