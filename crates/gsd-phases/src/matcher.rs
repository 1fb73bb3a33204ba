//! Directory-side phase search.
//!
//! Phase directories follow the canonical `NN-slug` form. Numeric
//! identifiers match on the zero-padded two-digit prefix; textual
//! identifiers match on the normalized slug. At most one match is expected;
//! the first (sorted) match wins if the tree is malformed enough to hold
//! duplicates.

use gsd_utils::fsx::list_subdirs;
use gsd_utils::paths::PlanningTree;
use gsd_utils::text::{normalize_phase_name, padded_phase_number, phase_number};

/// Find the phase directory entry matching `identifier`, returning the
/// bare directory name (e.g. `"03-api"`).
#[must_use]
pub fn search_phase_dir(tree: &PlanningTree, identifier: &str) -> Option<String> {
    let entries = list_subdirs(&tree.phases_dir());
    if let Some(n) = phase_number(identifier) {
        let padded = padded_phase_number(n);
        let prefix = format!("{padded}-");
        entries
            .into_iter()
            .find(|entry| entry.starts_with(&prefix) || *entry == padded)
    } else {
        let needle = normalize_phase_name(identifier);
        if needle.is_empty() {
            return None;
        }
        entries.into_iter().find(|entry| {
            dir_slug(entry) == needle || normalize_phase_name(entry) == needle
        })
    }
}

/// The slug part of a phase directory name: everything after the numeric
/// prefix, normalized. A name with no numeric prefix normalizes whole.
#[must_use]
pub fn dir_slug(dir_name: &str) -> String {
    let rest = dir_name
        .find(|c: char| !c.is_ascii_digit())
        .map(|idx| &dir_name[idx..])
        .unwrap_or("");
    let slug = normalize_phase_name(rest);
    if slug.is_empty() {
        normalize_phase_name(dir_name)
    } else {
        slug
    }
}

/// The numeric prefix of a phase directory name, if it has one.
#[must_use]
pub fn leading_number(dir_name: &str) -> Option<u32> {
    let digits: String = dir_name.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}
