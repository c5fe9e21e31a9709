//! Lectern application module: runtime loop, persistence, and terminal control.

/// Persistence of schedule tables.
pub mod persist;
/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::{RunOptions, run};
