//! Event loop wiring the terminal, workers, and persistence.

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::events::{handle_event, open_search};
use crate::logic::{accept_lecture_batch, maybe_advance_page};
use crate::sources::CatalogClient;
use crate::state::{AppState, SearchInfo};
use crate::ui::ui;

use super::Result;
use super::persist::maybe_flush_schedules;
use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod init;

use background::{spawn_event_thread, spawn_fetch_worker, spawn_tick_worker};
use channels::Channels;
use init::initialize_app_state;

/// Startup choices taken from the command line.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Overrides `catalog_base` from `settings.conf`.
    pub catalog: Option<String>,
    /// Opens the search dialog for this table right away.
    pub preselect: Option<SearchInfo>,
}

/// What: Run the Lectern TUI end-to-end: initialize terminal and state, spawn
/// the fetch, tick, and input workers, drive the event loop, persist tables,
/// and restore the terminal on exit.
///
/// Inputs:
/// - `opts`: Catalog override and optional dialog pre-selection
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal or client errors.
///
/// Details:
/// - Each dialog mount sends its mount id to the fetch worker; replies for a
///   dialog that is no longer mounted are discarded by `accept_lecture_batch`.
/// - After every frame the results sentinel is checked so a tall viewport keeps
///   revealing pages until it is filled.
/// - `LECTERN_TEST_HEADLESS=1` skips terminal setup and the input thread.
pub async fn run(opts: RunOptions) -> Result<()> {
    let headless = std::env::var("LECTERN_TEST_HEADLESS").ok().as_deref() == Some("1");

    let mut prefs = crate::theme::settings();
    if let Some(catalog) = opts.catalog {
        prefs.catalog_base = catalog;
    }
    let client = CatalogClient::from_settings(&prefs)?;
    tracing::info!(catalog = ?client.location(), headless, "[Runtime] Starting");

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::default();
    initialize_app_state(&mut app, &prefs);

    let mut channels = Channels::new();
    if let Some(req_rx) = channels.fetch_req_rx.take() {
        spawn_fetch_worker(client, req_rx, channels.batch_tx.clone());
    }
    spawn_tick_worker(channels.tick_tx.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    if let Some(info) = opts.preselect {
        app.ensure_tables([info.table_id.clone()]);
        if let Some(pos) = app.schedules.keys().position(|k| *k == info.table_id) {
            app.tables_selected = pos;
            app.tables_state.select(Some(pos));
        }
        open_search(&mut app, info, &channels.fetch_req_tx);
    }

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
            if app.dialog_open() && maybe_advance_page(&mut app) {
                let _ = channels.tick_tx.send(());
            }
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if handle_event(ev, &mut app, &channels.fetch_req_tx) {
                    break;
                }
            }
            Some(batch) = channels.batch_rx.recv() => {
                accept_lecture_batch(&mut app, batch);
            }
            Some(()) = channels.tick_rx.recv() => {
                maybe_flush_schedules(&mut app);
            }
            else => break,
        }
    }

    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);
    maybe_flush_schedules(&mut app);

    if !headless {
        restore_terminal()?;
    }
    tracing::info!("[Runtime] Stopped");
    Ok(())
}
