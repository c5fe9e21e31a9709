//! Search dialog lifecycle: open, close, and accepting fetched lectures.

use crate::state::{AppState, Focus, LectureBatch, SearchInfo};

/// What: Open the search dialog for a table.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `info`: Target table plus optional day/time pre-selection
///
/// Output:
/// - The new mount id; the caller tags the lecture fetch with it.
///
/// Details:
/// - Seeds days/times from `info`, keeps the other filter dimensions, resets
///   the page, and focuses the query input.
pub fn open_dialog(app: &mut AppState, info: SearchInfo) -> u64 {
    app.next_mount_id += 1;
    app.mount_id = app.next_mount_id;
    tracing::info!(
        table = %info.table_id,
        day = ?info.day,
        time = ?info.time,
        mount_id = app.mount_id,
        "[Dialog] Opened"
    );
    crate::logic::options::seed_from_search_info(app, Some(&info));
    app.search_info = Some(info);
    app.focus = Focus::Query;
    app.loading = true;
    app.mount_id
}

/// What: Close the dialog; lectures still in flight for it will be dropped.
pub fn close_dialog(app: &mut AppState) {
    if app.search_info.take().is_some() {
        tracing::info!(mount_id = app.mount_id, "[Dialog] Closed");
    }
    app.mount_id = 0;
    app.loading = false;
}

/// What: Commit a fetched lecture batch if it belongs to the live dialog.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `batch`: Worker result tagged with the mount that requested it
///
/// Output:
/// - `true` when the batch was applied (lectures replaced or failure recorded).
///
/// Details:
/// - Batches for a closed or replaced dialog are discarded.
/// - A failed fetch leaves the current lecture list as it is.
pub fn accept_lecture_batch(app: &mut AppState, batch: LectureBatch) -> bool {
    if app.search_info.is_none() || batch.mount_id != app.mount_id {
        tracing::debug!(
            batch_mount = batch.mount_id,
            live_mount = app.mount_id,
            "[Dialog] Dropping lectures for a dialog that is no longer mounted"
        );
        return false;
    }
    app.loading = false;
    match batch.lectures {
        Some(lectures) => {
            tracing::info!(count = lectures.len(), "[Dialog] Lectures loaded");
            crate::logic::filter::replace_lectures(app, lectures);
        }
        None => {
            tracing::warn!(mount_id = batch.mount_id, "[Dialog] Lecture fetch failed");
        }
    }
    true
}
