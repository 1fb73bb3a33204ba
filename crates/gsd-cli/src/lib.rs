//! gsd-cli - command-line interface for gsd-tools.
//!
//! Argument parsing, command dispatch, and JSON record emission. All
//! resolution logic lives in the core crates; this layer is mechanical
//! glue plus exit-code mapping.

pub mod args;
pub mod commands;
pub mod output;

use camino::Utf8PathBuf;
use clap::Parser;

use gsd_utils::logging::init_tracing;
use gsd_utils::{ExitCode, ToolError};

pub use args::{Cli, Command, InitOp};
pub use output::{ModelRecord, PhaseRecord, ProgressRecord, TodosRecord};

/// Main CLI entry point. Handles all output including errors; the caller
/// only maps the returned code to a process exit.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = match resolve_root(cli.root) {
        Ok(root) => root,
        Err(err) => {
            eprintln!("gsd-tools: {err}");
            return Err(err.to_exit_code());
        }
    };

    tracing::debug!(root = %root, "dispatching command");
    if let Err(err) = commands::dispatch(&root, cli.command) {
        eprintln!("gsd-tools: {err:#}");
        let code = err
            .downcast_ref::<ToolError>()
            .map(ToolError::to_exit_code)
            .unwrap_or(ExitCode::INTERNAL);
        return Err(code);
    }
    Ok(())
}

/// Resolve the project root: explicit `--root`, else the current directory.
fn resolve_root(arg: Option<Utf8PathBuf>) -> Result<Utf8PathBuf, ToolError> {
    match arg {
        Some(root) => Ok(root),
        None => {
            let cwd = std::env::current_dir()?;
            Utf8PathBuf::from_path_buf(cwd)
                .map_err(|p| ToolError::InvalidRoot(p.display().to_string()))
        }
    }
}
