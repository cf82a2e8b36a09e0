//! Shortening of result fields so each fits its slot in the results list.
//!
//! Lengths are counted in chars, not bytes.

use std::borrow::Cow;

pub const TITLE_BUDGET: usize = 70;
pub const DESCRIPTION_BUDGET: usize = 160;
pub const URL_BUDGET: usize = 60;
pub const ELLIPSIS: &str = "...";

/// Keep the first `budget` chars and mark the cut.
fn clip(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Cut a title at 70 chars, mid-word if need be.
pub fn truncate_title(title: &str) -> String {
    clip(title, TITLE_BUDGET)
}

/// Cut a description at 160 chars without splitting a word.
pub fn truncate_description(description: &str) -> String {
    let Some((cut, next)) = description.char_indices().nth(DESCRIPTION_BUDGET) else {
        return description.to_string();
    };

    let kept = &description[..cut];
    if next == ' ' {
        return format!("{kept}{ELLIPSIS}");
    }

    // Drop the partial word; a single unbroken word is kept whole.
    let kept = kept.rsplit_once(' ').map_or(kept, |(head, _)| head);
    format!("{kept}{ELLIPSIS}")
}

/// Decode a result URL and shorten it to `host/.../last-segment`.
///
/// Display only: the output is lossy and never a usable link.
pub fn truncate_url(url: &str) -> String {
    let decoded = percent_decode(url);
    if decoded.chars().count() <= URL_BUDGET {
        return decoded.into_owned();
    }

    let trimmed = decoded.strip_suffix('/').unwrap_or(&decoded);
    let location = trimmed
        .split_once("//")
        .map_or(trimmed, |(_, rest)| rest);

    let shortened = match location.split_once('/') {
        Some((host, path)) => {
            let last_segment = path.rsplit('/').next().unwrap_or(path);
            format!("{host}/.../{last_segment}")
        }
        None => location.to_string(),
    };

    clip(&shortened, URL_BUDGET)
}

/// Invalid UTF-8 after decoding becomes U+FFFD.
fn percent_decode(url: &str) -> Cow<'_, str> {
    match urlencoding::decode_binary(url.as_bytes()) {
        Cow::Borrowed(_) => Cow::Borrowed(url),
        Cow::Owned(bytes) => Cow::Owned(String::from_utf8_lossy(&bytes).into_owned()),
    }
}

#[test]
fn test_clip_counts_chars_not_bytes() {
    let title = "é".repeat(71);
    let clipped = truncate_title(&title);
    assert_eq!(clipped, format!("{}...", "é".repeat(70)));
}
