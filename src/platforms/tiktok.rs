//! TikTok data exports.
//!
//! TikTok ships either a single JSON document or a folder tree of
//! plain-text files, one per activity.

use crate::category::{Category, FileFormat, Language};
use crate::platform::Platform;

use super::PlatformProfile;

pub static CATEGORIES: &[Category] = &[
    Category::new(
        "json_en",
        FileFormat::Json,
        Language::En,
        &["user_data.json", "user_data_tiktok.json"],
    ),
    Category::new(
        "txt_en",
        FileFormat::Txt,
        Language::En,
        &[
            "Browsing History.txt",
            "Like List.txt",
            "Favorite Videos.txt",
            "Search History.txt",
            "Share History.txt",
            "Comments.txt",
            "Login History.txt",
            "Hashtag.txt",
            "Following.txt",
            "Follower.txt",
            "Profile Info.txt",
            "Watch Live History.txt",
        ],
    ),
];

pub static EXTENSIONS: &[FileFormat] = &[FileFormat::Json, FileFormat::Txt];

pub fn profile() -> PlatformProfile {
    PlatformProfile::new(Platform::TikTok, CATEGORIES, EXTENSIONS)
}
