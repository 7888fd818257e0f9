//! Per-platform recognition profiles.
//!
//! Each supported platform contributes a static category table, the file
//! extensions worth scanning, and its exclusion rules. The tables mirror the
//! file names found in real exports; they are data, not logic.
//!
//! # Example
//!
//! ```rust
//! use ddpack::platform::Platform;
//! use ddpack::platforms::PlatformProfile;
//!
//! let profile = PlatformProfile::for_platform(Platform::Google);
//! assert!(profile.registry.lookup("json_nl").is_some());
//! assert!(profile.is_relevant("Takeout/YouTube and YouTube Music/comments/comments.csv"));
//! assert!(!profile.is_relevant("Takeout/Profile/photo.jpg"));
//! ```

pub mod facebook;
pub mod google;
pub mod instagram;
pub mod tiktok;

use std::fmt;

use crate::archive::entry_extension;
use crate::category::{Category, CategoryRegistry, FileFormat};
use crate::exclusion::ExclusionRule;
use crate::platform::Platform;

/// Everything the validator needs to know about one platform.
pub struct PlatformProfile {
    /// Platform this profile recognizes
    pub platform: Platform,

    /// Candidate categories, in tie-break order
    pub registry: CategoryRegistry,

    /// Extensions of entries considered during scanning
    pub extensions: &'static [FileFormat],

    /// Post-inference vetoes
    pub rules: Vec<Box<dyn ExclusionRule>>,
}

impl PlatformProfile {
    /// Creates a profile without exclusion rules.
    pub fn new(
        platform: Platform,
        categories: &'static [Category],
        extensions: &'static [FileFormat],
    ) -> Self {
        Self {
            platform,
            registry: CategoryRegistry::new(categories),
            extensions,
            rules: Vec::new(),
        }
    }

    /// Adds an exclusion rule.
    #[must_use]
    pub fn with_rule(mut self, rule: impl ExclusionRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the built-in profile of a platform.
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Facebook => facebook::profile(),
            Platform::Google => google::profile(),
            Platform::Instagram => instagram::profile(),
            Platform::TikTok => tiktok::profile(),
        }
    }

    /// Returns the built-in profiles of all platforms, in [`Platform::all`] order.
    pub fn all() -> Vec<Self> {
        Platform::all().iter().map(|p| Self::for_platform(*p)).collect()
    }

    /// True if an entry path has one of this profile's extensions (ASCII case-insensitive).
    pub fn is_relevant(&self, path: &str) -> bool {
        entry_extension(path)
            .and_then(FileFormat::from_extension)
            .is_some_and(|format| self.extensions.contains(&format))
    }
}

impl fmt::Debug for PlatformProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformProfile")
            .field("platform", &self.platform)
            .field("categories", &self.registry.len())
            .field("extensions", &self.extensions)
            .field("rules", &self.rules)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_platform_has_a_profile() {
        for profile in PlatformProfile::all() {
            assert!(!profile.registry.is_empty(), "{} has no categories", profile.platform);
            assert!(!profile.extensions.is_empty());
        }
    }

    #[test]
    fn test_category_ids_unique_per_platform() {
        for profile in PlatformProfile::all() {
            let ids: HashSet<_> = profile.registry.all().map(|c| c.id).collect();
            assert_eq!(ids.len(), profile.registry.len(), "{}", profile.platform);
        }
    }

    #[test]
    fn test_known_files_use_scanned_extensions() {
        for profile in PlatformProfile::all() {
            for category in profile.registry.all() {
                for name in category.known_files {
                    assert!(
                        profile.is_relevant(name),
                        "{} {}: {} would never be scanned",
                        profile.platform,
                        category.id,
                        name
                    );
                }
            }
        }
    }

    #[test]
    fn test_is_relevant_ignores_case() {
        let profile = PlatformProfile::for_platform(Platform::Facebook);
        assert!(profile.is_relevant("your_activity/COMMENTS.JSON"));
        assert!(profile.is_relevant("messages\\inbox\\index.Html"));
        assert!(!profile.is_relevant("media/photo.jpg"));
        assert!(!profile.is_relevant("your_activity/"));
    }
}
