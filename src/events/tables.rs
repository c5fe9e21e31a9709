use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::state::{AppState, SearchInfo};

/// Handle key events on the tables screen.
///
/// Returns `true` to exit the app, `false` to continue.
pub fn handle_tables_key(
    ke: KeyEvent,
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<u64>,
) -> bool {
    let count = app.schedules.len();
    match ke.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Down | KeyCode::Char('j') if count > 0 => {
            app.tables_selected = (app.tables_selected + 1).min(count - 1);
            app.tables_state.select(Some(app.tables_selected));
        }
        KeyCode::Up | KeyCode::Char('k') if count > 0 => {
            app.tables_selected = app.tables_selected.saturating_sub(1);
            app.tables_state.select(Some(app.tables_selected));
        }
        KeyCode::Enter | KeyCode::Char('/') => {
            if let Some(table_id) = app.selected_table() {
                super::open_search(app, SearchInfo::for_table(table_id), fetch_tx);
            } else {
                app.status_message = Some("Create a table first (n)".to_string());
            }
        }
        KeyCode::Char('n') => {
            let id = app.create_table();
            tracing::info!(table = %id, "[Tables] Created");
            app.status_message = Some(format!("Created {id}"));
        }
        _ => {}
    }
    false
}
