//! Metadata extractors over the planning tree.
//!
//! Directory-level scans that summarize pending todos and milestone
//! progress. Like the rest of the resolution core, these never fail: a
//! missing directory is a normal negative result.

pub mod milestones;
pub mod todos;

pub use milestones::{MilestoneSummary, scan_milestones};
pub use todos::{TodoRecord, TodoScan, scan_todos};
