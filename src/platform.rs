//! Supported data download package platforms.
//!
//! [`Platform`] identifies which service produced an uploaded archive. Each
//! platform owns a [`PlatformProfile`](crate::platforms::PlatformProfile)
//! with its category registry, relevant extensions and exclusion rules.
//!
//! # Example
//!
//! ```rust
//! use ddpack::platform::Platform;
//! use std::str::FromStr;
//!
//! let platform = Platform::from_str("instagram").unwrap();
//! assert_eq!(platform, Platform::Instagram);
//!
//! // Aliases are supported
//! let platform = Platform::from_str("fb").unwrap();
//! assert_eq!(platform, Platform::Facebook);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::DdpError;

/// Platforms whose data download packages can be recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Platform {
    /// Facebook "Download Your Information" export
    #[serde(alias = "fb")]
    Facebook,

    /// Google Takeout export (My Activity, YouTube comments)
    #[serde(alias = "g")]
    Google,

    /// Instagram "Download Your Information" export
    #[serde(alias = "ig")]
    Instagram,

    /// TikTok data export (JSON or TXT)
    #[serde(alias = "tt")]
    TikTok,
}

impl Platform {
    /// Lower-case name token, as it appears in export file names.
    pub fn token(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Google => "google",
            Platform::Instagram => "instagram",
            Platform::TikTok => "tiktok",
        }
    }

    /// Returns all platform names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &[
            "facebook", "fb", "google", "g", "instagram", "ig", "tiktok", "tt",
        ]
    }

    /// Returns all available platforms.
    pub fn all() -> &'static [Platform] {
        &[
            Platform::Facebook,
            Platform::Google,
            Platform::Instagram,
            Platform::TikTok,
        ]
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Facebook => write!(f, "Facebook"),
            Platform::Google => write!(f, "Google"),
            Platform::Instagram => write!(f, "Instagram"),
            Platform::TikTok => write!(f, "TikTok"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = DdpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "facebook" | "fb" => Ok(Platform::Facebook),
            "google" | "g" | "takeout" => Ok(Platform::Google),
            "instagram" | "ig" => Ok(Platform::Instagram),
            "tiktok" | "tt" => Ok(Platform::TikTok),
            _ => Err(DdpError::unknown_platform(s, Platform::all_names())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_platform_from_str() {
        assert_eq!(Platform::from_str("facebook").unwrap(), Platform::Facebook);
        assert_eq!(Platform::from_str("FB").unwrap(), Platform::Facebook);
        assert_eq!(Platform::from_str("google").unwrap(), Platform::Google);
        assert_eq!(Platform::from_str("takeout").unwrap(), Platform::Google);
        assert_eq!(Platform::from_str("Instagram").unwrap(), Platform::Instagram);
        assert_eq!(Platform::from_str("ig").unwrap(), Platform::Instagram);
        assert_eq!(Platform::from_str("tiktok").unwrap(), Platform::TikTok);
        assert_eq!(Platform::from_str(" tt ").unwrap(), Platform::TikTok);
    }

    #[test]
    fn test_platform_from_str_error() {
        let err = Platform::from_str("myspace").unwrap_err();
        assert!(err.to_string().contains("myspace"));
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(Platform::Facebook.to_string(), "Facebook");
        assert_eq!(Platform::Google.to_string(), "Google");
        assert_eq!(Platform::Instagram.to_string(), "Instagram");
        assert_eq!(Platform::TikTok.to_string(), "TikTok");
    }

    #[test]
    fn test_platform_all() {
        let all = Platform::all();
        assert_eq!(all.len(), 4);
        for platform in all {
            assert_eq!(Platform::from_str(platform.token()).unwrap(), *platform);
        }
    }

    #[test]
    fn test_platform_serde_roundtrip() {
        let json = serde_json::to_string(&Platform::TikTok).unwrap();
        assert_eq!(json, "\"tiktok\"");
        let parsed: Platform = serde_json::from_str("\"ig\"").unwrap();
        assert_eq!(parsed, Platform::Instagram);
    }
}
