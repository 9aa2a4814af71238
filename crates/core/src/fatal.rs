//! Fatal-error reporting.
//!
//! Every error this runtime can encounter is fatal (spec.md §7): there is
//! no recovery path, no exception mechanism, no partial result. `fatal`
//! prints a diagnostic to stderr and terminates the process with exit
//! code 1, mirroring the reference implementation's `runtime_error`
//! (`original_source/runtime/source/common.c`):
//!
//! ```c
//! void runtime_error(char *message) {
//!     fprintf(stderr, "Runtime error: %s\n", message);
//!     exit(1);
//! }
//! ```
//!
//! A plain `panic!` doesn't satisfy spec.md §6's exit-code contract (an
//! unwinding panic exits 101, not 1), so every fatal condition in this
//! workspace goes through here instead.

use std::fmt::Display;
use std::process::ExitCode;

/// Report `msg` as a fatal runtime error and terminate the process with
/// exit code 1. Never returns.
pub fn fatal(msg: impl Display) -> ! {
    eprintln!("lazc runtime error: {msg}");
    std::process::exit(1);
}

/// Exit code for a program that completed without a fatal error
/// (spec.md §6: "exit 0 on success").
pub const SUCCESS: ExitCode = ExitCode::SUCCESS;
