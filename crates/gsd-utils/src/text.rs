//! Case- and punctuation-insensitive handling of phase identifiers.
//!
//! Phase names arrive from two divergent sources (directory names and
//! free-text roadmap titles), so every comparison in the workspace goes
//! through the normalization here. `normalize_phase_name` is idempotent:
//! normalizing an already-normalized string is a no-op.

use std::cmp::Ordering;

/// Normalize a phase name for comparison: lower-case, collapse runs of
/// non-alphanumeric characters to single `-` separators, and trim
/// leading/trailing separators.
///
/// ```
/// use gsd_utils::text::normalize_phase_name;
///
/// assert_eq!(normalize_phase_name("Widget Builder"), "widget-builder");
/// assert_eq!(normalize_phase_name("  API__v2! "), "api-v2");
/// ```
#[must_use]
pub fn normalize_phase_name(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_sep = false;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    out
}

/// Produce a directory-name-safe slug from a human-readable title.
///
/// Used when only a roadmap title is available and no on-disk phase
/// directory exists yet. Same rules as [`normalize_phase_name`], so a slug
/// always round-trips through normalization unchanged.
#[must_use]
pub fn generate_slug(input: &str) -> String {
    normalize_phase_name(input)
}

/// Parse a phase identifier as a phase number, ignoring zero-padding.
///
/// Returns `None` for non-numeric input.
#[must_use]
pub fn phase_number(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// Zero-padded two-digit form of a phase number, the canonical on-disk
/// directory prefix (`3` -> `"03"`).
#[must_use]
pub fn padded_phase_number(n: u32) -> String {
    format!("{n:02}")
}

/// Compare two phase identifiers numerically, irrespective of zero-padding
/// (`"3"` equals `"03"`, `"03"` orders before `"10"`).
///
/// Non-numeric input compares as greater than any numeric input so that
/// malformed entries sort to the end deterministically; two non-numeric
/// inputs fall back to plain string comparison.
#[must_use]
pub fn compare_phase_number(a: &str, b: &str) -> Ordering {
    match (phase_number(a), phase_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Escape a raw string for literal use inside a dynamically-built regex.
///
/// Every user-supplied token interpolated into a pattern must pass through
/// here first; the literal string always matches a pattern built from its
/// own escaped form.
#[must_use]
pub fn escape_pattern(input: &str) -> String {
    regex::escape(input)
}
