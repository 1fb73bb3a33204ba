//! Foundation utilities for gsd-tools.
//!
//! Text normalization, planning-tree path conventions, tolerant filesystem
//! reads, exit codes, and logging setup shared by every other crate in the
//! workspace.

pub mod error;
pub mod exit_codes;
pub mod fsx;
pub mod logging;
pub mod paths;
pub mod text;

pub use error::ToolError;
pub use exit_codes::ExitCode;
