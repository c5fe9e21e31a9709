use crate::schedule::parse_schedule;
use crate::state::{AppState, Lecture, ParsedScheduleEntry, SearchOption};

/// What: Decide whether one lecture satisfies every active filter.
///
/// Inputs:
/// - `lecture`: Candidate lecture
/// - `options`: Current filter selection
///
/// Output:
/// - `true` when all predicates pass (conjunction).
///
/// Details:
/// - Text: case-insensitive substring of the query in `id` or `title`.
/// - Grades / majors: membership in the selected set; majors compare exactly,
///   `<p>` separators included.
/// - Credits: the credits string must start with the selected number's decimal
///   form, so `1` also accepts `"10"`.
/// - Days / times: at least one parsed meeting on a selected day / touching a
///   selected slot. The schedule is parsed at most once per call.
#[must_use]
pub fn matches(lecture: &Lecture, options: &SearchOption) -> bool {
    if !options.query.is_empty() {
        let q = options.query.to_lowercase();
        if !lecture.title.to_lowercase().contains(&q) && !lecture.id.to_lowercase().contains(&q)
        {
            return false;
        }
    }
    if !options.grades.is_empty() && !options.grades.contains(&lecture.grade) {
        return false;
    }
    if !options.majors.is_empty() && !options.majors.contains(&lecture.major) {
        return false;
    }
    if let Some(credits) = options.credits
        && !lecture.credits.starts_with(&credits.to_string())
    {
        return false;
    }
    if options.days.is_empty() && options.times.is_empty() {
        return true;
    }
    let meetings: Vec<ParsedScheduleEntry> = parse_schedule(&lecture.schedule);
    if !options.days.is_empty() && !meetings.iter().any(|m| options.days.contains(&m.day)) {
        return false;
    }
    if !options.times.is_empty()
        && !meetings
            .iter()
            .any(|m| m.range.iter().any(|slot| options.times.contains(slot)))
    {
        return false;
    }
    true
}

/// What: Derive the filtered subset of `lectures` for `options`.
///
/// Inputs:
/// - `lectures`: Full fetched list
/// - `options`: Current filter selection
///
/// Output:
/// - Matching lectures in their original order; never adds or duplicates records.
#[must_use]
pub fn filter_lectures(lectures: &[Lecture], options: &SearchOption) -> Vec<Lecture> {
    lectures
        .iter()
        .filter(|l| matches(l, options))
        .cloned()
        .collect()
}

/// What: Distinct majors in first-seen order, used to build the major checklist.
#[must_use]
pub fn all_majors(lectures: &[Lecture]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    lectures
        .iter()
        .filter(|l| seen.insert(l.major.as_str()))
        .map(|l| l.major.clone())
        .collect()
}

/// What: Selected time slots in ascending order, for the chip row.
#[must_use]
pub fn sorted_times(options: &SearchOption) -> Vec<u8> {
    let mut times = options.times.clone();
    times.sort_unstable();
    times
}

/// What: Recompute `app.filtered` from `app.lectures` and `app.search_options`.
///
/// Inputs:
/// - `app`: Mutable application state
///
/// Output:
/// - Replaces `app.filtered`; clamps the results selection into the visible slice.
pub fn refresh_filtered(app: &mut AppState) {
    app.filtered = filter_lectures(&app.lectures, &app.search_options);
    let visible = app.pager.visible_len(app.filtered.len());
    if visible == 0 {
        app.results_selected = 0;
        app.results_state.select(None);
    } else {
        app.results_selected = app.results_selected.min(visible - 1);
        app.results_state.select(Some(app.results_selected));
    }
    tracing::debug!(
        total = app.lectures.len(),
        filtered = app.filtered.len(),
        page = app.pager.page(),
        "[Filter] Results refreshed"
    );
}

/// What: Install a freshly fetched lecture list.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `lectures`: Combined catalog list
///
/// Output:
/// - Replaces lectures, rebuilds the major checklist, resets to page 1, refilters.
pub fn replace_lectures(app: &mut AppState, lectures: Vec<Lecture>) {
    app.all_majors = all_majors(&lectures);
    app.major_cursor = app
        .major_cursor
        .min(app.all_majors.len().saturating_sub(1));
    app.lectures = lectures;
    app.pager.reset();
    crate::logic::options::scroll_results_to_top(app);
    refresh_filtered(app);
}
