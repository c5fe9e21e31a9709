//! Event handling layer for Lectern's TUI.
//!
//! `handle_event` routes keys to the search dialog when it is open and to the
//! tables screen otherwise.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, SearchInfo};

mod dialog;
mod tables;

/// What: Open the search dialog and request its lectures.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `info`: Target table plus optional day/time pre-selection
/// - `fetch_tx`: Channel to the fetch worker; receives the new mount id
///
/// Details:
/// - The worker tags its reply with the mount id so a reply for a dialog that
///   was closed in the meantime is discarded.
pub fn open_search(app: &mut AppState, info: SearchInfo, fetch_tx: &mpsc::UnboundedSender<u64>) {
    let mount_id = crate::logic::open_dialog(app, info);
    if let Err(e) = fetch_tx.send(mount_id) {
        tracing::warn!(error = %e, mount_id, "[Events] Fetch worker unavailable");
        app.loading = false;
    }
}

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState, fetch_tx: &mpsc::UnboundedSender<u64>) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    app.status_message = None;
    if app.dialog_open() {
        dialog::handle_dialog_key(ke, app);
        false
    } else {
        tables::handle_tables_key(ke, app, fetch_tx)
    }
}

#[cfg(test)]
pub(crate) fn key(code: KeyCode) -> crossterm::event::KeyEvent {
    crossterm::event::KeyEvent::new(code, KeyModifiers::empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Ctrl+C quits from anywhere; key releases are ignored
    ///
    /// - Input: Ctrl+C with the dialog open; a release event for `q`
    /// - Output: Exit requested for Ctrl+C only
    fn ctrl_c_quits_and_releases_ignored() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        app.ensure_tables(["T1"]);
        open_search(&mut app, SearchInfo::for_table("T1"), &tx);

        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert!(!handle_event(CEvent::Key(release), &mut app, &tx));

        let ctrl_c = crossterm::event::KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_event(CEvent::Key(ctrl_c), &mut app, &tx));
    }

    #[test]
    /// What: Opening a search sends the mount id to the fetch worker
    fn open_search_requests_lectures() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        open_search(&mut app, SearchInfo::for_table("T1"), &tx);
        assert_eq!(rx.try_recv().ok(), Some(app.mount_id));
        assert!(app.loading);

        drop(rx);
        close_then_reopen(&mut app, &tx);
        assert!(!app.loading);
    }

    fn close_then_reopen(app: &mut AppState, tx: &mpsc::UnboundedSender<u64>) {
        crate::logic::close_dialog(app);
        open_search(app, SearchInfo::for_table("T1"), tx);
    }
}
