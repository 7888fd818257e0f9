//! Facebook "Download Your Information" exports.

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
            "group_interactions.json",
            "ad_preferences.json",
            "your_posts_1.json",
            "advertisers_using_your_activity_or_information.json",
            "advertisers_you've_interacted_with.json",
            "comments.json",
            "likes_and_reactions_1.json",
            "other_categories_used_to_reach_you.json",
            "recently_viewed.json",
            "recently_visited.json",
            "story_views_in_past_7_days.json",
            "subscription_for_no_ads.json",
            "who_you've_followed.json",
            "your_posts__check_ins__photos_and_videos_1.json",
            "your_search_history.json",
        ],
    ),
    Category::new(
        "html_en",
        FileFormat::Html,
        Language::En,
        &[
            "group_interactions.html",
            "ad_preferences.html",
            // HTML exports still ship this one as JSON
            "your_posts_1.json",
            "advertisers_using_your_activity_or_information.html",
            "advertisers_you've_interacted_with.html",
            "comments.html",
            "likes_and_reactions_1.html",
            "other_categories_used_to_reach_you.html",
            "recently_viewed.html",
            "recently_visited.html",
            "story_views_in_past_7_days.html",
            "subscription_for_no_ads.html",
            "who_you've_followed.html",
            "your_posts__check_ins__photos_and_videos_1.html",
            "your_search_history.html",
        ],
    ),
];

pub static EXTENSIONS: &[FileFormat] = &[FileFormat::Json, FileFormat::Html];

pub fn profile() -> PlatformProfile {
    PlatformProfile::new(Platform::Facebook, CATEGORIES, EXTENSIONS)
        .with_rule(CompetingPlatformRule::new(Platform::Facebook, Platform::Instagram))
}
