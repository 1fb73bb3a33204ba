//! gsd-tools CLI binary
//!
//! Minimal entrypoint; all logic is in the library crates. main only maps
//! the returned code to a process exit.

fn main() {
    if let Err(code) = gsd_cli::run() {
        std::process::exit(code.as_i32());
    }
}
