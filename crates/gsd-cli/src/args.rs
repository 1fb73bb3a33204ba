//! CLI argument surface.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// gsd-tools - planning-tree resolution for agent workflows
#[derive(Debug, Parser)]
#[command(name = "gsd-tools")]
#[command(about = "Resolve phases, config, models, and todos from a .planning tree")]
#[command(long_about = r#"
gsd-tools resolves identifiers against a project's .planning tree and emits
one flat JSON record per command for consumption by calling agents.

EXAMPLES:
  # Paths an agent needs to report progress
  gsd-tools init progress

  # Everything needed to plan phase 3 (directory, roadmap metadata, companion files)
  gsd-tools init plan-phase 3

  # Pending todos, optionally filtered by area
  gsd-tools init todos backend

  # Milestone completion counts and archived milestones
  gsd-tools init milestone-op

  # The resolved planning configuration
  gsd-tools config

  # Concrete model for an agent under the active profile and overrides
  gsd-tools resolve-model gsd-executor

Commands never fail on missing or malformed planning files; absent resources
show up as flags, omitted fields, or defaults in the emitted record.
"#)]
#[command(version)]
pub struct Cli {
    /// Project root holding the .planning tree (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<Utf8PathBuf>,

    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolution records for agent initialization
    #[command(subcommand)]
    Init(InitOp),

    /// Emit the resolved planning configuration
    Config,

    /// Resolve the model for an agent type
    ResolveModel {
        /// Agent type, e.g. gsd-executor
        agent: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum InitOp {
    /// Convention paths for progress reporting
    Progress,

    /// Phase resolution record for planning a phase
    PlanPhase {
        /// Phase identifier: number ("3", "03") or name
        phase: String,
    },

    /// Phase resolution record for executing a phase
    ExecutePhase {
        /// Phase identifier: number ("3", "03") or name
        phase: String,
    },

    /// Phase resolution record for a generic phase operation
    PhaseOp {
        /// Phase identifier: number ("3", "03") or name
        phase: String,
    },

    /// Pending todos, optionally filtered by area
    Todos {
        /// Exact-match area filter
        area: Option<String>,
    },

    /// Milestone completion counts and archived milestones
    MilestoneOp,
}
