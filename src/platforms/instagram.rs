//! Instagram "Download Your Information" exports.

use crate::category::{Category, FileFormat, Language};
use crate::exclusion::CompetingPlatformRule;
use crate::platform::Platform;

use super::PlatformProfile;

pub static CATEGORIES: &[Category] = &[
    Category::new(
        "json_en",
        FileFormat::Json,
        Language::En,
        &[
            "accounts_you're_not_interested_in.json",
            "ads_viewed.json",
            "posts_viewed.json",
            "videos_watched.json",
            "your_topics.json",
            "post_comments.json",
            "liked_posts.json",
            "following.json",
        ],
    ),
    Category::new(
        "html_en",
        FileFormat::Html,
        Language::En,
        &[
            "accounts_you're_not_interested_in.html",
            "ads_viewed.html",
            "posts_viewed.html",
            "videos_watched.html",
            "your_topics.html",
            "post_comments.html",
            "liked_posts.html",
            "following.html",
        ],
    ),
];

pub static EXTENSIONS: &[FileFormat] = &[FileFormat::Json, FileFormat::Html];

pub fn profile() -> PlatformProfile {
    PlatformProfile::new(Platform::Instagram, CATEGORIES, EXTENSIONS)
        .with_rule(CompetingPlatformRule::new(Platform::Instagram, Platform::Facebook))
}
