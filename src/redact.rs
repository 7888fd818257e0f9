//! Text cleanup applied to extracted values before they are shown or donated.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Replacement for e-mail addresses.
pub const EMAIL_PLACEHOLDER: &str = "this_is_an_email";

/// Replacement for the participant's own user name.
pub const USERNAME_PLACEHOLDER: &str = "this_is_the_username";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid regex"));

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Replaces every e-mail address with [`EMAIL_PLACEHOLDER`].
///
/// ```rust
/// use ddpack::redact::replace_email;
///
/// assert_eq!(replace_email("mail jane.doe@example.org now"), "mail this_is_an_email now");
/// ```
pub fn replace_email(text: &str) -> Cow<'_, str> {
    EMAIL_RE.replace_all(text, EMAIL_PLACEHOLDER)
}

/// Replaces whole-word, case-insensitive occurrences of `username` with
/// [`USERNAME_PLACEHOLDER`]. An empty user name leaves the text untouched.
pub fn replace_username<'t>(text: &'t str, username: &str) -> Cow<'t, str> {
    // a leading @ belongs to the mention, not the name
    let username = username.trim().trim_start_matches('@');
    if username.is_empty() {
        return Cow::Borrowed(text);
    }
    let pattern = format!(r"(?i)(?:^|\b|@){}\b", regex::escape(username));
    match Regex::new(&pattern) {
        Ok(re) => Cow::Owned(
            re.replace_all(text, |caps: &regex::Captures<'_>| {
                if caps[0].starts_with('@') {
                    format!("@{USERNAME_PLACEHOLDER}")
                } else {
                    USERNAME_PLACEHOLDER.to_string()
                }
            })
            .into_owned(),
        ),
        Err(_) => Cow::Borrowed(text),
    }
}

/// Trims the text and collapses every run of whitespace into one space.
pub fn squish(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_email() {
        assert_eq!(
            replace_email("a@b.co and first.last+tag@mail.example.com"),
            "this_is_an_email and this_is_an_email"
        );
        assert!(matches!(replace_email("no address here"), Cow::Borrowed(_)));
        assert_eq!(replace_email("user@localhost"), "user@localhost");
    }

    #[test]
    fn test_replace_username() {
        assert_eq!(
            replace_username("JaneDoe liked a post by janedoe", "janedoe"),
            "this_is_the_username liked a post by this_is_the_username"
        );
        assert_eq!(replace_username("replying to @janedoe", "janedoe"), "replying to @this_is_the_username");
        assert_eq!(replace_username("janedoe_fan posted", "janedoe"), "janedoe_fan posted");
        assert_eq!(replace_username("anything", "  "), "anything");
    }

    #[test]
    fn test_replace_username_bare_at_sign() {
        assert_eq!(replace_username("hello world", "@"), "hello world");
        assert_eq!(replace_username("hello @world", "@@"), "hello @world");
        assert!(matches!(replace_username("hello world", " @ "), Cow::Borrowed(_)));
        assert_eq!(replace_username("hi @janedoe", "@janedoe"), "hi @this_is_the_username");
    }

    #[test]
    fn test_replace_username_escapes_pattern() {
        assert_eq!(replace_username("hi j.doe and jxdoe", "j.doe"), "hi this_is_the_username and jxdoe");
    }

    #[test]
    fn test_squish() {
        assert_eq!(squish("  many \t spaces\n\nhere  "), "many spaces here");
        assert_eq!(squish(""), "");
    }
}
