//! Title slugs.

use super::MAX_SLUG_LENGTH;

/// Normalize a user supplied title into a filename-safe slug.
///
/// The title is lower-cased and trimmed, every run of characters outside
/// `[a-z0-9]` becomes a single hyphen, leading and trailing hyphens are
/// stripped, and the result is cut to [`MAX_SLUG_LENGTH`] characters.
/// An empty return value means the title is unusable.
pub fn slugify_title(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for c in lowered.trim().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    // Slug is pure ASCII, so byte truncation is character truncation.
    slug.truncate(MAX_SLUG_LENGTH);
    slug
}
