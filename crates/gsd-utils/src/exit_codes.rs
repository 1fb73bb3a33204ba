//! Exit code constants for gsd-tools.
//!
//! The resolution core has no fatal-error class: every lookup terminates
//! with a well-formed record. Only the CLI layer exits non-zero, and only
//! for faults outside the core's contract.
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `SUCCESS` | Record emitted successfully |
//! | 1 | `INTERNAL` | I/O or serialization fault |
//! | 2 | `CLI_ARGS` | Invalid CLI arguments or project root |

/// Type-safe exit code for `std::process::exit()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Success - record emitted successfully.
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// Internal failure - I/O or serialization fault in the CLI layer.
    pub const INTERNAL: ExitCode = ExitCode(1);

    /// CLI arguments error - invalid arguments or unusable project root.
    pub const CLI_ARGS: ExitCode = ExitCode(2);

    /// Numeric value for `std::process::exit()`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
