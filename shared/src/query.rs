//! Query-string shaping for the external directories
//!
//! The directories are picky about how multi-word terms appear in query
//! strings, and the shaping is deliberately minimal: only the space
//! character is handled. Any other character that would need escaping is
//! passed through untouched — that is part of the wire contract, not an
//! oversight to fix here.

/// Shape a free-text city name for the restaurant directory.
///
/// Trims surrounding whitespace and replaces internal spaces with
/// underscores (`"new york"` becomes `"new_york"`).
pub fn city_query(raw: &str) -> String {
    raw.trim().replace(' ', "_")
}

/// Shape a free-text ingredient or food name for the recipe and
/// nutrition directories.
///
/// Trims surrounding whitespace and replaces internal spaces with the
/// literal sequence `%20`, pre-encoding them for the URL. The result is
/// spliced into the query string as-is.
pub fn ingredient_query(raw: &str) -> String {
    raw.trim().replace(' ', "%20")
}
