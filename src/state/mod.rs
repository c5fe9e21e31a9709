//! Application state and the value types it is built from.

pub mod app_state;
pub mod types;

// Public re-exports to keep short paths under `crate::state::*`
pub use app_state::AppState;
pub use types::{
    Focus, Lecture, LectureBatch, ParsedScheduleEntry, ScheduleEntry, SchedulesMap, SearchInfo,
    SearchOption,
};
