//! Planning-tree path conventions.
//!
//! The on-disk layout is fixed: everything lives under `.planning/` in the
//! project root. Paths are `camino` UTF-8 paths so the JSON records handed
//! to agents always carry forward-slash relative paths regardless of
//! platform.

use camino::{Utf8Path, Utf8PathBuf};

/// Directory holding all planning artifacts, relative to the project root.
pub const PLANNING_DIR: &str = ".planning";

/// Relative paths emitted to agents as convention pointers. These are
/// emitted whether or not the file exists; callers treat them as "where the
/// file lives", not "the file is present".
pub mod rel {
    pub const STATE: &str = ".planning/STATE.md";
    pub const ROADMAP: &str = ".planning/ROADMAP.md";
    pub const PROJECT: &str = ".planning/PROJECT.md";
    pub const REQUIREMENTS: &str = ".planning/REQUIREMENTS.md";
    pub const CONFIG: &str = ".planning/config.json";
}

/// Resolved locations within one project's planning tree.
///
/// Holds the project root and derives every conventional path from it.
/// Constructed once per invocation; all methods are cheap joins.
#[derive(Debug, Clone)]
pub struct PlanningTree {
    root: Utf8PathBuf,
}

impl PlanningTree {
    /// Create a tree rooted at `project_root`. The root is not required to
    /// exist; missing directories surface later as negative results.
    pub fn new(project_root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root: project_root.into(),
        }
    }

    /// The project root this tree was constructed with.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// `<root>/.planning`
    #[must_use]
    pub fn planning_dir(&self) -> Utf8PathBuf {
        self.root.join(PLANNING_DIR)
    }

    /// `<root>/.planning/config.json`
    #[must_use]
    pub fn config_file(&self) -> Utf8PathBuf {
        self.root.join(rel::CONFIG)
    }

    /// `<root>/.planning/ROADMAP.md`
    #[must_use]
    pub fn roadmap_file(&self) -> Utf8PathBuf {
        self.root.join(rel::ROADMAP)
    }

    /// `<root>/.planning/phases`
    #[must_use]
    pub fn phases_dir(&self) -> Utf8PathBuf {
        self.planning_dir().join("phases")
    }

    /// `<root>/.planning/todos/pending`
    #[must_use]
    pub fn pending_todos_dir(&self) -> Utf8PathBuf {
        self.planning_dir().join("todos").join("pending")
    }

    /// `<root>/.planning/archive`
    #[must_use]
    pub fn archive_dir(&self) -> Utf8PathBuf {
        self.planning_dir().join("archive")
    }

    /// Relative path of a phase directory entry (`.planning/phases/<name>`),
    /// as emitted in result records.
    #[must_use]
    pub fn rel_phase_dir(&self, dir_name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from(PLANNING_DIR).join("phases").join(dir_name)
    }

    /// Relative path of a pending todo file, as emitted in result records.
    #[must_use]
    pub fn rel_pending_todo(&self, file_name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from(PLANNING_DIR)
            .join("todos")
            .join("pending")
            .join(file_name)
    }
}
