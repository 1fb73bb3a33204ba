//! Tolerant filesystem primitives.
//!
//! The resolution core never fails on absent or unreadable files: a missing
//! resource is a normal negative result, so every helper here absorbs
//! errors into `None` / empty collections. Listings are sorted for stable
//! output across platforms.

use camino::Utf8Path;

/// Read a file to a string, or `None` if it is absent or unreadable.
#[must_use]
pub fn read_optional(path: &Utf8Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(err) => {
            tracing::debug!(path = %path, error = %err, "read_optional: treating as absent");
            None
        }
    }
}

/// Whether a path exists (file or directory).
#[must_use]
pub fn path_exists(path: &Utf8Path) -> bool {
    path.as_std_path().exists()
}

/// Names of all entries in a directory, sorted. Empty if the directory is
/// absent or unreadable. Entries with non-UTF-8 names are skipped.
#[must_use]
pub fn list_dir(path: &Utf8Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(path) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    names
}

/// Names of all subdirectories of a directory, sorted. Empty if the
/// directory is absent or unreadable.
#[must_use]
pub fn list_subdirs(path: &Utf8Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(path) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    names
}
