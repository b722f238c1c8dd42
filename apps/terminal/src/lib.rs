//! # Caldero Terminal Library
//!
//! The interactive counter: prompts on stdout, answers from stdin, ticket at
//! the end. All pricing and validation rules live in `caldero-core`.
//!
//! ## Module Organization
//! ```text
//! caldero_terminal/
//! ├── lib.rs      ◄─── You are here (logging setup & run)
//! ├── config.rs   ◄─── TerminalConfig (compiled-in settings)
//! ├── prompt.rs   ◄─── Prompter: integer / decimal / yes-no readers
//! ├── session.rs  ◄─── Session state machine
//! └── error.rs    ◄─── AppError
//! ```

pub mod config;
pub mod error;
pub mod prompt;
pub mod session;

use std::io::IsTerminal;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use config::TerminalConfig;
pub use error::{AppError, AppResult};
pub use prompt::Prompter;
pub use session::{Session, SessionOutcome};

/// Runs the counter on the process's stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ──► stderr, default WARN, RUST_LOG overrides     │
/// │  2. Build Configuration ─► defaults; clear screen only on a real tty    │
/// │  3. Run Session ─────────► menu, selections, tip, ticket                │
/// │  4. Exit Code ───────────► 0 on ticket or no order, 1 on I/O failure    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    init_tracing();

    let config =
        TerminalConfig::default().with_clear_before_ticket(std::io::stdout().is_terminal());

    match session::run_stdio(&config) {
        Ok(outcome) => {
            info!(completed = matches!(outcome, SessionOutcome::Completed(_)), "Session finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Session aborted");
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - Default: WARN, so nothing but problems reach the terminal
/// - `RUST_LOG=caldero_terminal=info` - session milestones
/// - `RUST_LOG=debug` - every state transition, rejected input, receipt JSON
///
/// Logs go to stderr; stdout carries only the conversation and the ticket.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
