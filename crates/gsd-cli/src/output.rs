//! Flat result records emitted to stdout.
//!
//! Each command produces exactly one JSON record. Convention paths
//! (`state_path` and friends) are emitted unconditionally as pointers;
//! companion paths are omitted entirely when the file does not exist;
//! contract-null fields (`phase_dir`, `phase_req_ids`, `area_filter`,
//! `model_overrides`) are emitted as explicit `null`.

use std::io::Write;

use camino::Utf8PathBuf;
use serde::Serialize;

use gsd_phases::PhaseMatch;
use gsd_status::{TodoRecord, TodoScan};
use gsd_utils::ToolError;
use gsd_utils::paths::rel;

/// Serialize a record as pretty JSON and write it to stdout.
pub fn emit<T: Serialize>(record: &T) -> Result<(), ToolError> {
    let json = serde_json::to_string_pretty(record)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

/// Record for `init progress`: where the progress-relevant documents live.
#[derive(Debug, Serialize)]
pub struct ProgressRecord {
    pub state_path: &'static str,
    pub roadmap_path: &'static str,
    pub project_path: &'static str,
    pub config_path: &'static str,
}

impl ProgressRecord {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state_path: rel::STATE,
            roadmap_path: rel::ROADMAP,
            project_path: rel::PROJECT,
            config_path: rel::CONFIG,
        }
    }
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Record for the phase-scoped init commands (`plan-phase`,
/// `execute-phase`, `phase-op`).
#[derive(Debug, Serialize)]
pub struct PhaseRecord {
    pub state_path: &'static str,
    pub roadmap_path: &'static str,
    pub requirements_path: &'static str,
    pub config_path: &'static str,

    pub phase_found: bool,
    pub phase_dir: Option<Utf8PathBuf>,
    pub phase_slug: Option<String>,
    pub phase_goal: Option<String>,
    pub phase_req_ids: Option<String>,

    pub has_context: bool,
    pub has_research: bool,
    pub has_verification: bool,
    pub has_uat: bool,
    pub has_plans: bool,
    pub has_summaries: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_path: Option<Utf8PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_path: Option<Utf8PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_path: Option<Utf8PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uat_path: Option<Utf8PathBuf>,
}

impl From<PhaseMatch> for PhaseRecord {
    fn from(m: PhaseMatch) -> Self {
        let (phase_goal, phase_req_ids) = match m.roadmap {
            Some(entry) => (entry.goal, entry.requirement_ids),
            None => (None, None),
        };
        Self {
            state_path: rel::STATE,
            roadmap_path: rel::ROADMAP,
            requirements_path: rel::REQUIREMENTS,
            config_path: rel::CONFIG,
            phase_found: m.found,
            phase_dir: m.directory,
            phase_slug: m.slug,
            phase_goal,
            phase_req_ids,
            has_context: m.flags.has_context,
            has_research: m.flags.has_research,
            has_verification: m.flags.has_verification,
            has_uat: m.flags.has_uat,
            has_plans: m.flags.has_plans,
            has_summaries: m.flags.has_summaries,
            context_path: m.companions.context,
            research_path: m.companions.research,
            verification_path: m.companions.verification,
            uat_path: m.companions.uat,
        }
    }
}

/// Record for `init todos`.
#[derive(Debug, Serialize)]
pub struct TodosRecord {
    pub todo_count: usize,
    pub todos: Vec<TodoRecord>,
    pub area_filter: Option<String>,
    pub pending_dir_exists: bool,
}

impl From<TodoScan> for TodosRecord {
    fn from(scan: TodoScan) -> Self {
        Self {
            todo_count: scan.todos.len(),
            todos: scan.todos,
            area_filter: scan.area_filter,
            pending_dir_exists: scan.pending_dir_exists,
        }
    }
}

/// Record for `resolve-model`.
#[derive(Debug, Serialize)]
pub struct ModelRecord {
    pub agent: String,
    pub model: String,
}
