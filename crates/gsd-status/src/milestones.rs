//! Milestone progress scanning.
//!
//! A phase directory counts as completed when it holds at least one
//! `*-SUMMARY.md` file. Archived milestones are subdirectories of
//! `.planning/archive/`.

use camino::Utf8Path;
use serde::Serialize;

use gsd_utils::fsx::{list_dir, list_subdirs};
use gsd_utils::paths::PlanningTree;

const SUMMARY_SUFFIX: &str = "-SUMMARY.md";

/// Counts of phase and archive progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MilestoneSummary {
    pub phase_count: usize,
    pub completed_phases: usize,
    /// True only when there is at least one phase and every phase is
    /// completed; an empty phases directory is never "all complete".
    pub all_phases_complete: bool,
    pub archive_count: usize,
    pub archived_milestones: Vec<String>,
}

/// Summarize phase completion and archived milestones for a project.
#[must_use]
pub fn scan_milestones(project_root: &Utf8Path) -> MilestoneSummary {
    let tree = PlanningTree::new(project_root);
    let phases_dir = tree.phases_dir();

    let phases = list_subdirs(&phases_dir);
    let phase_count = phases.len();
    let completed_phases = phases
        .iter()
        .filter(|phase| {
            list_dir(&phases_dir.join(phase.as_str()))
                .iter()
                .any(|file| file.ends_with(SUMMARY_SUFFIX))
        })
        .count();

    let archived_milestones = list_subdirs(&tree.archive_dir());

    MilestoneSummary {
        phase_count,
        completed_phases,
        all_phases_complete: phase_count > 0 && completed_phases == phase_count,
        archive_count: archived_milestones.len(),
        archived_milestones,
    }
}
