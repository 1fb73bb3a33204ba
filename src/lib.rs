//! gsd-tools - planning-tree resolution for agent workflows.
//!
//! Resolves identifiers (phase numbers/names, agent names, todo items)
//! against a project's `.planning` tree into structured facts: file paths,
//! existence flags, and extracted metadata. The binary emits one flat JSON
//! record per command; this library surface exposes the same resolution
//! functions for embedding.
//!
//! # Example
//!
//! ```rust,no_run
//! use camino::Utf8Path;
//!
//! let root = Utf8Path::new("/path/to/project");
//! let config = gsd_tools::load_config(root);
//! let phase = gsd_tools::find_phase(root, "3");
//! println!("profile={:?} found={}", config.model_profile, phase.found);
//! ```

pub use gsd_cli as cli;

pub use gsd_config::{
    FALLBACK_MODEL, HIGH_TIER_MODEL, INHERIT_MODEL, ModelProfile, ResolvedConfig, load_config,
    profile_model, resolve_model,
};
pub use gsd_phases::{CompanionFlags, CompanionPaths, PhaseMatch, RoadmapPhase, find_phase};
pub use gsd_status::{MilestoneSummary, TodoRecord, TodoScan, scan_milestones, scan_todos};
pub use gsd_utils::text::{
    compare_phase_number, escape_pattern, generate_slug, normalize_phase_name,
};
pub use gsd_utils::{ExitCode, ToolError};
