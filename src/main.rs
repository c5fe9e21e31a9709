//! Lectern binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use lectern::{app, args};

struct LecternTimer;

impl tracing_subscriber::fmt::time::FormatTime for LecternTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `~/.config/lectern/logs/lectern.log`, or stderr as a fallback.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = lectern::theme::logs_dir();
    log_path.push("lectern.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(LecternTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // The TUI owns stdout; stderr keeps startup from blocking on a bad log path.
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(LecternTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    if cli.search.is_some() {
        if let Err(err) = args::handle_search(&cli).await {
            tracing::error!(error = %err, "Search failed");
            eprintln!("lectern: {err}");
            std::process::exit(1);
        }
        return;
    }

    tracing::info!(table = ?cli.table, "Lectern starting");
    let opts = app::RunOptions {
        catalog: cli.catalog.clone(),
        preselect: cli.preselect(),
    };
    if let Err(err) = app::run(opts).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("lectern: {err}");
        std::process::exit(1);
    }
    tracing::info!("Lectern exited");
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives an ISO-like timestamp
    #[test]
    fn lectern_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::LecternTimer;
        let _ = t.format_time(&mut writer);
        assert_eq!(buf.len(), "2026-01-01T00:00:00".len());
        assert!(buf.contains('T'));
    }
}
