use crate::state::AppState;
use crate::theme::Settings;

use super::super::persist::load_schedules;

/// What: Populate a fresh `AppState` from settings and persisted tables.
///
/// Inputs:
/// - `app`: Application state to initialize
/// - `prefs`: Loaded settings
///
/// Output:
/// - Day labels applied, saved tables loaded, configured tables ensured.
///
/// Details:
/// - Configured table ids that are missing from the saved file are created
///   empty; saved tables that are not configured are kept.
pub fn initialize_app_state(app: &mut AppState, prefs: &Settings) {
    app.day_labels.clone_from(&prefs.day_labels);
    app.schedules = load_schedules(&app.schedules_path);
    app.ensure_tables(prefs.tables.iter().cloned());
    app.tables_selected = 0;
    app.tables_state.select(if app.schedules.is_empty() {
        None
    } else {
        Some(0)
    });
    tracing::info!(
        tables = app.schedules.len(),
        day_labels = app.day_labels.len(),
        "[Runtime] State initialized"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Saved tables are merged with configured ones
    ///
    /// - Input: Saved file with table `A`; settings listing `A` and `B` and custom day labels
    /// - Output: Both tables exist, `A` keeps its entries, day labels applied
    fn init_merges_saved_and_configured_tables() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("schedules.json");
        std::fs::write(
            &path,
            r#"{"A":[{"day":"월","range":[1],"lecture":{"id":"X","title":"t","credits":"1","major":"m","grade":1,"schedule":"월1"}}]}"#,
        )
        .expect("write");
        let mut app = AppState {
            schedules_path: path,
            ..AppState::default()
        };
        let prefs = Settings {
            tables: vec!["A".into(), "B".into()],
            day_labels: vec!["mon".into(), "tue".into()],
            ..Settings::default()
        };
        initialize_app_state(&mut app, &prefs);
        assert_eq!(app.table_ids(), vec!["A".to_string(), "B".to_string()]);
        assert_eq!(app.schedules.get("A").map(Vec::len), Some(1));
        assert_eq!(app.day_labels, vec!["mon".to_string(), "tue".to_string()]);
        assert_eq!(app.selected_table().as_deref(), Some("A"));
    }
}
