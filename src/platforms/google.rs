//! Google Takeout exports (My Activity, Chrome, YouTube comments).
//!
//! Takeout names its folders in the account language but keeps some file
//! names (`My Activity.json`) in English, so the English and Dutch tables
//! overlap. Only JSON and HTML categories are accepted. Every category lists
//! the YouTube comments CSV, so a Takeout holding nothing else still matches.

use crate::category::{Category, FileFormat, Language};
use crate::exclusion::AcceptedFormatsRule;
use crate::platform::Platform;

use super::PlatformProfile;

pub static CATEGORIES: &[Category] = &[
    Category::new(
        "json_en",
        FileFormat::Json,
        Language::En,
        &[
            "Autofill.json",
            "Bookmarks.html",
            "BrowserHistory.json",
            "Device Information.json",
            "Dictionary.csv",
            "Extensions.json",
            "Omnibox.json",
            "OS Settings.json",
            "ReadingList.html",
            "SearchEngines.json",
            "SyncSettings.json",
            "My Activity.json",
            "My Activities.json",
            "MyActivity.json",
            "MyActivities.json",
            "comments.csv",
        ],
    ),
    Category::new(
        "html_en",
        FileFormat::Html,
        Language::En,
        &[
            "comments.csv",
            "MyActivity.html",
            "MyActivities.html",
            "My Activities.html",
            "My Activity.html",
        ],
    ),
    Category::new(
        "json_nl",
        FileFormat::Json,
        Language::Nl,
        &[
            "Adressen en meer.json",
            "Bookmarks.html",
            "Geschiedenis.json",
            "Leeslijst.html",
            "Woordenboek.csv",
            "Apparaatgegevens.json",
            "Extensies.json",
            "Instellingen.json",
            "OS-instellingen.json",
            "My Activity.json",
            "My Activities.json",
            "MyActivity.json",
            "MyActivities.json",
            "reacties.csv",
        ],
    ),
    Category::new(
        "html_nl",
        FileFormat::Html,
        Language::Nl,
        &[
            "reacties.csv",
            "MyActivity.html",
            "MyActivities.html",
            "My Activities.html",
            "My Activity.html",
        ],
    ),
];

pub static EXTENSIONS: &[FileFormat] = &[FileFormat::Json, FileFormat::Html, FileFormat::Csv];

pub fn profile() -> PlatformProfile {
    PlatformProfile::new(Platform::Google, CATEGORIES, EXTENSIONS)
        .with_rule(AcceptedFormatsRule::new(&[FileFormat::Json, FileFormat::Html]))
}
