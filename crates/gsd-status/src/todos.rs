//! Pending-todo scanning.
//!
//! Each pending todo is one markdown file under `.planning/todos/pending/`
//! carrying simple `key: value` header lines. Parsing is forgiving: every
//! field defaults independently, and a file with no recognizable fields
//! still yields a record rather than being skipped.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

use gsd_utils::fsx::{list_dir, path_exists, read_optional};
use gsd_utils::paths::PlanningTree;

const TODO_EXTENSION: &str = ".md";

const DEFAULT_TITLE: &str = "Untitled";
const DEFAULT_AREA: &str = "general";
const DEFAULT_CREATED: &str = "unknown";

/// One parsed pending-todo file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoRecord {
    /// Bare filename within the pending directory.
    pub file: String,
    pub title: String,
    pub area: String,
    pub created: String,
    /// Path relative to the project root.
    pub path: Utf8PathBuf,
}

/// Result of one todo scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoScan {
    pub todos: Vec<TodoRecord>,
    /// The area filter applied, echoed back for traceability.
    pub area_filter: Option<String>,
    /// Distinguishes an empty pending directory from an absent one.
    pub pending_dir_exists: bool,
}

/// Scan the pending-todos directory, optionally restricted to todos whose
/// `area` exactly matches `area_filter`.
#[must_use]
pub fn scan_todos(project_root: &Utf8Path, area_filter: Option<&str>) -> TodoScan {
    let tree = PlanningTree::new(project_root);
    let pending_dir = tree.pending_todos_dir();
    let pending_dir_exists = path_exists(&pending_dir);
    if !pending_dir_exists {
        tracing::debug!(dir = %pending_dir, "pending todos directory absent");
    }

    let todos = list_dir(&pending_dir)
        .into_iter()
        .filter(|name| name.ends_with(TODO_EXTENSION))
        .map(|name| {
            let content = read_optional(&pending_dir.join(&name)).unwrap_or_default();
            let (title, area, created) = parse_todo_fields(&content);
            TodoRecord {
                path: tree.rel_pending_todo(&name),
                file: name,
                title,
                area,
                created,
            }
        })
        .filter(|todo| area_filter.is_none_or(|area| todo.area == area))
        .collect();

    TodoScan {
        todos,
        area_filter: area_filter.map(str::to_string),
        pending_dir_exists,
    }
}

/// Extract `title`, `area`, and `created` from `key: value` lines, each
/// defaulted independently when absent. First occurrence of a key wins.
fn parse_todo_fields(content: &str) -> (String, String, String) {
    let mut title = None;
    let mut area = None;
    let mut created = None;
    for line in content.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match key.trim() {
            "title" if title.is_none() => title = Some(value.to_string()),
            "area" if area.is_none() => area = Some(value.to_string()),
            "created" if created.is_none() => created = Some(value.to_string()),
            _ => {}
        }
    }
    (
        title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        area.unwrap_or_else(|| DEFAULT_AREA.to_string()),
        created.unwrap_or_else(|| DEFAULT_CREATED.to_string()),
    )
}
