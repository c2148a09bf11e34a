/// Derive a URL-safe identifier from a human-entered title.
///
/// Lowercases the input and collapses every maximal run of characters outside
/// `[a-z0-9]` into a single hyphen, with no hyphen at either end. Empty input
/// yields an empty slug. Distinct titles may collapse to the same slug;
/// uniqueness is the store's concern, not this function's.
pub fn derive_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for ch in title.chars() {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_lowercase() || lower.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(lower);
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Return `true` when `value` already has the shape `derive_slug` produces.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}
