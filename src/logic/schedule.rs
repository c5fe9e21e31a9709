//! Adding lectures to schedule tables.

use crate::schedule::parse_schedule;
use crate::state::{AppState, Lecture, ScheduleEntry, SchedulesMap};

/// What: Append a lecture's meetings to one schedule table.
///
/// Inputs:
/// - `schedules`: Shared schedule map
/// - `table_id`: Target table (created when absent)
/// - `lecture`: Lecture whose schedule string is parsed
///
/// Output:
/// - Number of entries appended (0 for an empty or unparseable schedule).
///
/// Details:
/// - Existing entries of the target table are kept in front; every other table
///   is left untouched. No overlap checking is done here.
pub fn add_schedule(schedules: &mut SchedulesMap, table_id: &str, lecture: &Lecture) -> usize {
    let entries: Vec<ScheduleEntry> = parse_schedule(&lecture.schedule)
        .into_iter()
        .map(|parsed| ScheduleEntry {
            day: parsed.day,
            range: parsed.range,
            room: parsed.room,
            lecture: lecture.clone(),
        })
        .collect();
    let added = entries.len();
    schedules
        .entry(table_id.to_string())
        .or_default()
        .extend(entries);
    tracing::info!(
        table = table_id,
        lecture = %lecture.id,
        entries = added,
        "[Schedule] Lecture added to table"
    );
    added
}

/// What: Add a lecture to the table the search dialog was opened for, then close it.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `lecture`: Lecture chosen in the results table
///
/// Output:
/// - `Some(count)` of appended entries; `None` when no dialog (table id) is active.
pub fn add_lecture_from_dialog(app: &mut AppState, lecture: &Lecture) -> Option<usize> {
    let table_id = app.search_info.as_ref()?.table_id.clone();
    let added = add_schedule(&mut app.schedules, &table_id, lecture);
    app.schedules_dirty = true;
    app.status_message = Some(format!(
        "Added {} {} to {table_id} ({added} meetings)",
        lecture.id, lecture.title
    ));
    crate::logic::dialog::close_dialog(app);
    Some(added)
}

/// What: Add the highlighted result row to the dialog's table.
///
/// Output:
/// - Same as [`add_lecture_from_dialog`]; `None` also when nothing is highlighted.
pub fn add_selected_to_schedule(app: &mut AppState) -> Option<usize> {
    let visible = app.pager.visible(&app.filtered);
    let lecture = visible.get(app.results_selected)?.clone();
    add_lecture_from_dialog(app, &lecture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SearchInfo;

    fn cs101() -> Lecture {
        Lecture {
            id: "CS101".into(),
            title: "Intro".into(),
            credits: "3".into(),
            major: "CS".into(),
            grade: 1,
            schedule: "mon3,4".into(),
        }
    }

    fn entry(day: &str, range: Vec<u8>, lecture: Lecture) -> ScheduleEntry {
        ScheduleEntry {
            day: day.into(),
            range,
            room: None,
            lecture,
        }
    }

    #[test]
    /// What: Adding to an empty table yields exactly the parsed meetings
    ///
    /// - Input: CS101 (`mon3,4`) into empty "T1"; "T2" holds one unrelated entry
    /// - Output: "T1" has one mon [3,4] entry; "T2" is unchanged
    fn add_to_empty_table_keeps_others() {
        let other = Lecture {
            id: "MA201".into(),
            schedule: "화1".into(),
            ..cs101()
        };
        let mut map = SchedulesMap::new();
        map.insert("T1".into(), Vec::new());
        map.insert("T2".into(), vec![entry("화", vec![1], other)]);
        let before_t2 = map["T2"].clone();

        let added = add_schedule(&mut map, "T1", &cs101());
        assert_eq!(added, 1);
        assert_eq!(map["T1"], vec![entry("mon", vec![3, 4], cs101())]);
        assert_eq!(map["T2"], before_t2);
        assert_eq!(map.len(), 2);
    }

    #[test]
    /// What: Appends after existing entries and creates missing tables
    fn add_appends_and_creates() {
        let mut map = SchedulesMap::new();
        add_schedule(&mut map, "T9", &cs101());
        add_schedule(
            &mut map,
            "T9",
            &Lecture {
                id: "CS102".into(),
                schedule: "화1<p>목2".into(),
                ..cs101()
            },
        );
        let days: Vec<&str> = map["T9"].iter().map(|e| e.day.as_str()).collect();
        assert_eq!(days, vec!["mon", "화", "목"]);
    }

    #[test]
    /// What: Dialog-level add requires an open dialog and closes it
    ///
    /// - Input: No dialog, then a dialog for "T1" with CS101 highlighted
    /// - Output: `None` first; then one entry added, dirty flag set, dialog closed
    fn dialog_add_requires_table_and_closes() {
        let mut app = AppState::default();
        crate::logic::filter::replace_lectures(&mut app, vec![cs101()]);
        assert_eq!(add_selected_to_schedule(&mut app), None);

        crate::logic::dialog::open_dialog(&mut app, SearchInfo::for_table("T1"));
        crate::logic::filter::replace_lectures(&mut app, vec![cs101()]);
        assert_eq!(add_selected_to_schedule(&mut app), Some(1));
        assert!(app.schedules_dirty);
        assert!(app.search_info.is_none());
        assert_eq!(app.schedules["T1"].len(), 1);
    }
}
