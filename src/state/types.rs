//! Core value types used by Lectern state.

use std::collections::BTreeMap;

/// One course offering as published in the catalog JSON documents.
///
/// Records are immutable once fetched. `major` and `schedule` may embed
/// `<p>` separators between multiple values.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Lecture {
    /// Course code, e.g. `"CS101"`.
    pub id: String,
    /// Human-readable course title.
    pub title: String,
    /// Credit count as published (a string, e.g. `"3"` or `"3(2)"`).
    pub credits: String,
    /// Owning major; may contain `<p>` separators.
    pub major: String,
    /// Grade level the course targets.
    pub grade: u8,
    /// Raw meeting-time description; empty when unscheduled.
    #[serde(default)]
    pub schedule: String,
}

/// A `(day, time-range)` pair parsed from a lecture's raw schedule string.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParsedScheduleEntry {
    /// Day label exactly as written in the schedule (e.g. `"월"` or `"mon"`).
    pub day: String,
    /// Ordered time-slot ids covered by this meeting.
    pub range: Vec<u8>,
    /// Classroom, when the schedule names one in parentheses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

/// A parsed meeting attached to the lecture it came from, as stored in a
/// schedule table.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleEntry {
    /// Day label of the meeting.
    pub day: String,
    /// Time-slot ids of the meeting.
    pub range: Vec<u8>,
    /// Classroom, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    /// The lecture this meeting belongs to.
    pub lecture: Lecture,
}

/// Schedule tables keyed by table id.
pub type SchedulesMap = BTreeMap<String, Vec<ScheduleEntry>>;

/// Live filter selection of the search dialog.
///
/// The multi-select dimensions are kept as vectors without duplicates so that
/// their display order follows the order the user picked them in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOption {
    /// Free-text query matched against code and title.
    pub query: String,
    /// Selected credit count, if any.
    pub credits: Option<u8>,
    /// Selected grade levels.
    pub grades: Vec<u8>,
    /// Selected day labels.
    pub days: Vec<String>,
    /// Selected time-slot ids.
    pub times: Vec<u8>,
    /// Selected majors (exact strings, separators included).
    pub majors: Vec<String>,
}

impl SearchOption {
    /// What: Report whether no filter dimension is active.
    ///
    /// Output:
    /// - `true` when every dimension is empty and the query is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.credits.is_none()
            && self.grades.is_empty()
            && self.days.is_empty()
            && self.times.is_empty()
            && self.majors.is_empty()
    }
}

/// Pre-selection supplied by whoever opens the search dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchInfo {
    /// Table the chosen lecture will be added to.
    pub table_id: String,
    /// Day to seed the day filter with.
    pub day: Option<String>,
    /// Time slot to seed the time filter with.
    pub time: Option<u8>,
}

impl SearchInfo {
    /// What: Build a pre-selection for a table with no day/time seed.
    #[must_use]
    pub fn for_table(table_id: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
            day: None,
            time: None,
        }
    }
}

/// Lectures delivered by the background fetch worker.
#[derive(Clone, Debug)]
pub struct LectureBatch {
    /// Dialog mount that requested the fetch; stale mounts are ignored.
    pub mount_id: u64,
    /// Combined majors + liberal-arts list; `None` when the fetch failed.
    pub lectures: Option<Vec<Lecture>>,
}

/// Which part of the search dialog receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Free-text query input.
    #[default]
    Query,
    /// Credits selector.
    Credits,
    /// Grade checkboxes.
    Grades,
    /// Day checkboxes.
    Days,
    /// Time-slot checkboxes.
    Times,
    /// Major checkboxes.
    Majors,
    /// Results table.
    Results,
}

impl Focus {
    /// Cycle order used by `Tab`.
    pub const ORDER: [Self; 7] = [
        Self::Query,
        Self::Credits,
        Self::Grades,
        Self::Days,
        Self::Times,
        Self::Majors,
        Self::Results,
    ];

    /// What: Return the next focus target in tab order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    /// What: Return the previous focus target in tab order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Catalog records deserialize with and without a schedule field
    ///
    /// - Input: JSON array with one scheduled and one unscheduled lecture
    /// - Output: Missing schedule defaults to the empty string
    fn lecture_deserializes_with_missing_schedule() {
        let json = r#"[
            {"id":"CS101","title":"Intro","credits":"3","major":"CS","grade":1,"schedule":"mon3,4"},
            {"id":"LA200","title":"Writing","credits":"2","major":"교양","grade":2}
        ]"#;
        let lectures: Vec<Lecture> = serde_json::from_str(json).expect("valid catalog json");
        assert_eq!(lectures.len(), 2);
        assert_eq!(lectures[0].schedule, "mon3,4");
        assert!(lectures[1].schedule.is_empty());
    }

    #[test]
    /// What: Focus cycling wraps in both directions
    ///
    /// - Input: Last and first focus targets
    /// - Output: `next` of Results is Query; `prev` of Query is Results
    fn focus_cycles_wrap() {
        assert_eq!(Focus::Results.next(), Focus::Query);
        assert_eq!(Focus::Query.prev(), Focus::Results);
        assert_eq!(Focus::Grades.next(), Focus::Days);
    }

    #[test]
    /// What: Default search option is the identity selection
    fn default_search_option_is_empty() {
        assert!(SearchOption::default().is_empty());
        let opt = SearchOption {
            credits: Some(3),
            ..Default::default()
        };
        assert!(!opt.is_empty());
    }
}
