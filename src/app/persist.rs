//! Loading and flushing `schedules.json`.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{AppState, SchedulesMap};

/// What: Load persisted schedule tables.
///
/// Inputs:
/// - `path`: Location of `schedules.json`
///
/// Output:
/// - The stored map, or an empty map when the file is missing or unreadable.
///
/// Details:
/// - A corrupt file is moved aside to `schedules.json.bak` before starting
///   empty, so the next flush cannot overwrite the saved tables.
pub fn load_schedules(path: &Path) -> SchedulesMap {
    let Ok(s) = fs::read_to_string(path) else {
        tracing::debug!(path = %path.display(), "[Persist] No saved schedules");
        return SchedulesMap::new();
    };
    match serde_json::from_str::<SchedulesMap>(&s) {
        Ok(map) => {
            tracing::info!(
                path = %path.display(),
                tables = map.len(),
                entries = map.values().map(Vec::len).sum::<usize>(),
                "[Persist] Loaded schedules"
            );
            map
        }
        Err(e) => {
            let backup = backup_path(path);
            match fs::rename(path, &backup) {
                Ok(()) => tracing::warn!(
                    path = %path.display(),
                    backup = %backup.display(),
                    error = %e,
                    "[Persist] Saved schedules are not valid JSON, moved aside and starting empty"
                ),
                Err(err) => tracing::error!(
                    path = %path.display(),
                    backup = %backup.display(),
                    error = %e,
                    rename_error = %err,
                    "[Persist] Saved schedules are not valid JSON and could not be moved aside"
                ),
            }
            SchedulesMap::new()
        }
    }
}

/// What: Location a corrupt schedules file is moved to (`<name>.bak`).
fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".bak");
    path.with_file_name(name)
}

/// What: Persist the schedule tables to disk if marked dirty.
///
/// Inputs:
/// - `app`: Application state containing `schedules` and `schedules_path`
///
/// Output:
/// - Writes `schedules` JSON to `schedules_path`; the dirty flag is cleared
///   only once the write succeeds, so a failed write is retried on the next
///   tick and on exit.
pub fn maybe_flush_schedules(app: &mut AppState) {
    if !app.schedules_dirty {
        return;
    }
    match serde_json::to_string_pretty(&app.schedules) {
        Ok(s) => {
            tracing::debug!(
                path = %app.schedules_path.display(),
                bytes = s.len(),
                "[Persist] Writing schedules to disk"
            );
            match fs::write(&app.schedules_path, &s) {
                Ok(()) => app.schedules_dirty = false,
                Err(e) => tracing::warn!(
                    path = %app.schedules_path.display(),
                    error = %e,
                    "[Persist] Failed to write schedules, will retry"
                ),
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "[Persist] Failed to serialize schedules");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Lecture;

    fn lecture() -> Lecture {
        Lecture {
            id: "CS101".into(),
            title: "Intro".into(),
            credits: "3".into(),
            major: "CS".into(),
            grade: 1,
            schedule: "월1~2(A-101)<p>수3".into(),
        }
    }

    #[test]
    /// What: Flushed schedules load back unchanged
    ///
    /// - Input: One lecture added to T1 and flushed to a temp file
    /// - Output: Loaded map equals the in-memory map; dirty flag cleared
    fn flush_then_load_schedules() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = AppState {
            schedules_path: dir.path().join("schedules.json"),
            ..AppState::default()
        };
        crate::logic::add_schedule(&mut app.schedules, "T1", &lecture());
        app.schedules_dirty = true;

        maybe_flush_schedules(&mut app);
        assert!(!app.schedules_dirty);
        let loaded = load_schedules(&app.schedules_path);
        assert_eq!(loaded, app.schedules);
        assert_eq!(loaded.get("T1").map(Vec::len), Some(2));
    }

    #[test]
    /// What: Clean state is not written; missing and corrupt files load empty
    fn clean_state_and_bad_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("schedules.json");
        let mut app = AppState {
            schedules_path: path.clone(),
            ..AppState::default()
        };
        maybe_flush_schedules(&mut app);
        assert!(!path.exists());
        assert!(load_schedules(&path).is_empty());

        fs::write(&path, "{not json").expect("write");
        assert!(load_schedules(&path).is_empty());
    }

    #[test]
    /// What: A failed write keeps the tables dirty and a later flush saves them
    ///
    /// - Input: Lecture added to T1, flushed while the parent directory is missing,
    ///   then flushed again after the directory is created
    /// - Output: Dirty flag survives the failure; the second flush writes T1
    fn failed_write_is_retried() {
        let dir = tempfile::tempdir().expect("tempdir");
        let lists = dir.path().join("lists");
        let mut app = AppState {
            schedules_path: lists.join("schedules.json"),
            ..AppState::default()
        };
        crate::logic::add_schedule(&mut app.schedules, "T1", &lecture());
        app.schedules_dirty = true;

        maybe_flush_schedules(&mut app);
        assert!(app.schedules_dirty);
        assert!(!app.schedules_path.exists());

        fs::create_dir_all(&lists).expect("create lists dir");
        maybe_flush_schedules(&mut app);
        assert!(!app.schedules_dirty);
        let loaded = load_schedules(&app.schedules_path);
        assert_eq!(loaded.get("T1").map(Vec::len), Some(2));
    }

    #[test]
    /// What: A corrupt schedules file is moved aside instead of being overwritten
    ///
    /// - Input: File holding table `A` with a trailing comma; CS101 added to T1 and flushed
    /// - Output: `schedules.json.bak` keeps the original bytes; new file holds only T1
    fn corrupt_file_is_backed_up_before_flush() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("schedules.json");
        let original = r#"{"A":[{"day":"월","range":[1],"lecture":{"id":"X","title":"t","credits":"1","major":"m","grade":1,"schedule":"월1"}}],}"#;
        fs::write(&path, original).expect("write");

        let mut app = AppState {
            schedules_path: path.clone(),
            ..AppState::default()
        };
        app.schedules = load_schedules(&path);
        assert!(app.schedules.is_empty());
        crate::logic::add_schedule(&mut app.schedules, "T1", &lecture());
        app.schedules_dirty = true;
        maybe_flush_schedules(&mut app);

        let backup = dir.path().join("schedules.json.bak");
        assert_eq!(fs::read_to_string(&backup).expect("backup"), original);
        let saved = load_schedules(&path);
        assert!(saved.contains_key("T1"));
        assert!(!saved.contains_key("A"));
    }
}
