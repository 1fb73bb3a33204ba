//! Command handlers.
//!
//! Each handler resolves facts through the core crates, assembles one flat
//! record, and emits it. Handlers only fail on serialization or stdout
//! faults; resolution itself always succeeds.

use anyhow::{Context, Result};
use camino::Utf8Path;

use gsd_config::{load_config, resolve_model};
use gsd_phases::find_phase;
use gsd_status::{scan_milestones, scan_todos};

use crate::args::{Command, InitOp};
use crate::output::{self, ModelRecord, PhaseRecord, ProgressRecord, TodosRecord};

/// Dispatch a parsed command against a project root.
pub fn dispatch(root: &Utf8Path, command: Command) -> Result<()> {
    match command {
        Command::Init(op) => dispatch_init(root, op),
        Command::Config => output::emit(&load_config(root)).context("emit config record"),
        Command::ResolveModel { agent } => {
            let model = resolve_model(root, &agent);
            output::emit(&ModelRecord { agent, model }).context("emit model record")
        }
    }
}

fn dispatch_init(root: &Utf8Path, op: InitOp) -> Result<()> {
    match op {
        InitOp::Progress => output::emit(&ProgressRecord::new()).context("emit progress record"),
        InitOp::PlanPhase { phase } | InitOp::ExecutePhase { phase } | InitOp::PhaseOp { phase } => {
            let record = PhaseRecord::from(find_phase(root, &phase));
            output::emit(&record).context("emit phase record")
        }
        InitOp::Todos { area } => {
            let record = TodosRecord::from(scan_todos(root, area.as_deref()));
            output::emit(&record).context("emit todos record")
        }
        InitOp::MilestoneOp => {
            output::emit(&scan_milestones(root)).context("emit milestone record")
        }
    }
}
