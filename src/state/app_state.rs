//! Central `AppState` container.

use std::collections::btree_map::Entry;
use std::path::PathBuf;

use ratatui::widgets::{ListState, TableState};

use crate::logic::Pager;
use crate::state::types::{Focus, Lecture, SchedulesMap, SearchInfo, SearchOption};

/// Global application state shared by the event, fetch, and UI layers.
///
/// Owned by the event loop task and mutated only there. The schedule map is
/// persisted to disk so tables survive restarts.
#[derive(Debug)]
pub struct AppState {
    /// Day labels offered by the day filter.
    pub day_labels: Vec<String>,

    /// Combined catalog list as last fetched.
    pub lectures: Vec<Lecture>,
    /// Subset of `lectures` passing `search_options`.
    pub filtered: Vec<Lecture>,
    /// Distinct majors of `lectures` in first-seen order.
    pub all_majors: Vec<String>,
    /// Live filter selection.
    pub search_options: SearchOption,
    /// Infinite-scroll page counter over `filtered`.
    pub pager: Pager,

    /// Dialog pre-selection; the dialog is open iff this is `Some`.
    pub search_info: Option<SearchInfo>,
    /// Mount id of the open dialog (0 when closed).
    pub mount_id: u64,
    /// Last mount id handed out.
    pub next_mount_id: u64,
    /// Whether the dialog is waiting for its lecture fetch.
    pub loading: bool,
    /// Dialog element receiving keys.
    pub focus: Focus,
    /// Cursor within the grade checkboxes.
    pub grade_cursor: usize,
    /// Cursor within the day checkboxes.
    pub day_cursor: usize,
    /// Cursor within the time-slot checkboxes.
    pub time_cursor: usize,
    /// Cursor within the major checkboxes.
    pub major_cursor: usize,

    /// Highlighted row of the visible results slice.
    pub results_selected: usize,
    /// Table widget state (selection + scroll offset) for the results.
    pub results_state: TableState,
    /// Results viewport height in rows, recorded at render time.
    pub results_rows: u16,

    /// Schedule tables keyed by id.
    pub schedules: SchedulesMap,
    /// Whether `schedules` changed since the last flush.
    pub schedules_dirty: bool,
    /// Where `schedules` is persisted.
    pub schedules_path: PathBuf,
    /// Highlighted table on the main screen.
    pub tables_selected: usize,
    /// List widget state for the tables pane.
    pub tables_state: ListState,

    /// One-line feedback shown in the footer.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            day_labels: crate::schedule::DAY_LABELS
                .iter()
                .map(|d| (*d).to_string())
                .collect(),
            lectures: Vec::new(),
            filtered: Vec::new(),
            all_majors: Vec::new(),
            search_options: SearchOption::default(),
            pager: Pager::default(),
            search_info: None,
            mount_id: 0,
            next_mount_id: 0,
            loading: false,
            focus: Focus::default(),
            grade_cursor: 0,
            day_cursor: 0,
            time_cursor: 0,
            major_cursor: 0,
            results_selected: 0,
            results_state: TableState::default(),
            results_rows: 0,
            schedules: SchedulesMap::new(),
            schedules_dirty: false,
            schedules_path: crate::theme::lists_dir().join("schedules.json"),
            tables_selected: 0,
            tables_state: ListState::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// What: Report whether the search dialog is open.
    #[must_use]
    pub const fn dialog_open(&self) -> bool {
        self.search_info.is_some()
    }

    /// What: Table ids in display order.
    #[must_use]
    pub fn table_ids(&self) -> Vec<String> {
        self.schedules.keys().cloned().collect()
    }

    /// What: Id of the highlighted table on the main screen, if any.
    #[must_use]
    pub fn selected_table(&self) -> Option<String> {
        self.schedules.keys().nth(self.tables_selected).cloned()
    }

    /// What: Ensure each id exists as a (possibly empty) table.
    ///
    /// Details:
    /// - Creating a table marks the tables dirty so it is saved on the next flush.
    pub fn ensure_tables<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            if let Entry::Vacant(slot) = self.schedules.entry(id.into()) {
                slot.insert(Vec::new());
                self.schedules_dirty = true;
            }
        }
        if !self.schedules.is_empty() {
            self.tables_selected = self.tables_selected.min(self.schedules.len() - 1);
            self.tables_state.select(Some(self.tables_selected));
        }
    }

    /// What: Create a new empty table named `schedule-N` with the first free `N`.
    ///
    /// Output:
    /// - The id of the created table, which is also selected.
    pub fn create_table(&mut self) -> String {
        let id = (1..)
            .map(|n| format!("schedule-{n}"))
            .find(|id| !self.schedules.contains_key(id))
            .unwrap_or_else(|| "schedule".to_string());
        self.schedules.insert(id.clone(), Vec::new());
        self.schedules_dirty = true;
        if let Some(pos) = self.schedules.keys().position(|k| *k == id) {
            self.tables_selected = pos;
            self.tables_state.select(Some(pos));
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: New tables take the first free `schedule-N` name and become selected
    fn create_table_picks_free_name() {
        let mut app = AppState::default();
        app.ensure_tables(["schedule-1", "T1"]);
        let id = app.create_table();
        assert_eq!(id, "schedule-2");
        assert_eq!(app.selected_table().as_deref(), Some("schedule-2"));
        assert!(app.schedules_dirty);
    }

    #[test]
    /// What: Ensuring tables never drops existing entries
    fn ensure_tables_is_additive() {
        let mut app = AppState::default();
        app.schedules.insert("T1".into(), Vec::new());
        app.ensure_tables(["T1", "T2"]);
        assert_eq!(app.table_ids(), vec!["T1".to_string(), "T2".to_string()]);
        assert_eq!(app.tables_state.selected(), Some(0));
        assert!(app.schedules_dirty);
    }

    #[test]
    /// What: Ensuring tables that already exist leaves the state clean
    fn ensure_existing_tables_stays_clean() {
        let mut app = AppState::default();
        app.schedules.insert("T1".into(), Vec::new());
        app.ensure_tables(["T1"]);
        assert!(!app.schedules_dirty);
    }
}
