//! # ddpack
//!
//! A Rust library for recognizing social media "data download packages"
//! (DDPs) and normalizing the timestamps found inside them.
//!
//! ## Overview
//!
//! ddpack recognizes zip exports from:
//! - **Facebook** - JSON or HTML "Download Your Information" exports
//! - **Instagram** - JSON or HTML exports
//! - **Google** - Takeout exports in English or Dutch
//! - **TikTok** - JSON or TXT exports
//!
//! For each upload it decides which platform and export shape it is, using
//! the share of expected file names present in the archive. Extractors then
//! receive an explicit [`DdpContext`](detect::DdpContext) and a timestamp
//! normalizer that turns any date representation into ISO 8601.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ddpack::prelude::*;
//!
//! match detect("instagram-janedoe-2024-07-24.zip", Platform::all()) {
//!     Detection::Found(ctx) => {
//!         println!("{} export, category {}", ctx.platform, ctx.category);
//!         for path in &ctx.relevant_paths {
//!             println!("  {path}");
//!         }
//!     }
//!     Detection::Corrupt => eprintln!("not a zip file"),
//!     Detection::NoMatch(_) => eprintln!("not a known export"),
//! }
//! ```
//!
//! ## Validating against a single platform
//!
//! ```rust,no_run
//! use ddpack::prelude::*;
//!
//! let result = ArchiveValidator::for_platform(Platform::Google).validate("takeout.zip");
//! println!("{} (code {})", result.status, result.status.code());
//! ```
//!
//! ## Timestamps
//!
//! ```rust
//! use ddpack::prelude::*;
//!
//! assert_eq!(normalize_timestamp(1_721_418_966_i64), "2024-07-19T19:56:06+00:00");
//!
//! let normalizer = TimestampNormalizer::with_config(
//!     TimestampConfig::new().with_day_order(DayOrder::DayFirst),
//! );
//! assert_eq!(normalizer.normalize("03/04/2024"), "2024-04-03T00:00:00+00:00");
//! ```
//!
//! ## Module Structure
//!
//! - [`platform`], [`platforms`] - supported platforms and their profiles
//! - [`category`] - [`Category`](category::Category) and the per-platform registry
//! - [`inference`] - coverage scoring with the 5% acceptance threshold
//! - [`exclusion`] - pluggable rules that veto a match
//! - [`archive`] - zip listing behind the [`ArchiveOpener`](archive::ArchiveOpener) seam
//! - [`validate`] - [`ArchiveValidator`](validate::ArchiveValidator) and its result
//! - [`detect`] - try several platforms, get a [`DdpContext`](detect::DdpContext)
//! - [`timestamp`] - the normalizer and epoch/ISO helpers
//! - [`tree`] - key lookups in loosely structured JSON
//! - [`row`], [`redact`] - the uniform row schema and text cleanup
//! - [`format`] - text, JSON and CSV reports
//! - [`config`] - [`TimestampConfig`](config::TimestampConfig)
//! - [`error`] - [`DdpError`] and [`Result`]
//! - [`prelude`] - convenient re-exports

pub mod archive;
pub mod category;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod exclusion;
pub mod format;
pub mod inference;
pub mod platform;
pub mod platforms;
pub mod redact;
pub mod row;
pub mod timestamp;
pub mod tree;
pub mod validate;

// Re-export the main types at the crate root for convenience
pub use error::{DdpError, Result};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use ddpack::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{DdpError, Result};

    // Platforms and categories
    pub use crate::category::{Category, CategoryRegistry, FileFormat, Language};
    pub use crate::platform::Platform;
    pub use crate::platforms::PlatformProfile;

    // Detection
    pub use crate::detect::{detect, DdpContext, Detection};
    pub use crate::inference::{infer_category, Inference};
    pub use crate::validate::{ArchiveValidator, ValidationResult, ValidationStatus};

    // Timestamps
    pub use crate::config::{DayOrder, EpochUnit, TimestampConfig};
    pub use crate::timestamp::{normalize_timestamp, RawTimestamp, TimestampNormalizer};

    // Rows and JSON helpers
    pub use crate::redact::{replace_email, replace_username, squish};
    pub use crate::row::{sort_rows_newest_first, Row};
    pub use crate::tree::{denest, find_first_bfs, find_least_nested};

    // Reports
    pub use crate::format::{render_report, ReportFormat};
}
