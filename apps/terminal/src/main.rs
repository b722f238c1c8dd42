//! # Caldero Counter Entry Point
//!
//! Interactive ticket calculator for the restaurant counter.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Build configuration and the house menu
//! 3. Run one session over stdin/stdout
//! 4. Exit with 0 (ticket printed or no order) or 1 (I/O failure)

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    caldero_terminal::run()
}
