//! Search-option change handlers.
//!
//! Every change resets the results to page 1, scrolls the table back to the
//! top, and recomputes the filtered list.

use crate::schedule::CREDIT_CHOICES;
use crate::state::{AppState, SearchInfo};

/// What: Move the results table back to its first row.
pub fn scroll_results_to_top(app: &mut AppState) {
    app.results_selected = 0;
    *app.results_state.offset_mut() = 0;
    app.results_state.select(if app.filtered.is_empty() {
        None
    } else {
        Some(0)
    });
}

/// What: Common tail of every option change.
fn options_changed(app: &mut AppState) {
    app.pager.reset();
    scroll_results_to_top(app);
    crate::logic::filter::refresh_filtered(app);
}

/// What: Toggle `value` in a selection list, keeping pick order.
fn toggle<T: PartialEq>(list: &mut Vec<T>, value: T) {
    if let Some(pos) = list.iter().position(|v| *v == value) {
        list.remove(pos);
    } else {
        list.push(value);
    }
}

/// What: Replace the free-text query.
pub fn set_query(app: &mut AppState, text: &str) {
    text.clone_into(&mut app.search_options.query);
    options_changed(app);
}

/// What: Append one typed character to the query.
pub fn push_query_char(app: &mut AppState, ch: char) {
    app.search_options.query.push(ch);
    options_changed(app);
}

/// What: Remove the last query character; no-op on an empty query.
pub fn pop_query_char(app: &mut AppState) {
    if app.search_options.query.pop().is_some() {
        options_changed(app);
    }
}

/// What: Select a credit count, or clear it with `None`.
pub fn set_credits(app: &mut AppState, credits: Option<u8>) {
    app.search_options.credits = credits;
    options_changed(app);
}

/// What: Step the credits selector through `None`, 1, 2, 3 (wrapping).
///
/// Inputs:
/// - `app`: Mutable application state
/// - `forward`: `true` for the next choice, `false` for the previous one
pub fn cycle_credits(app: &mut AppState, forward: bool) {
    let choices: Vec<Option<u8>> = std::iter::once(None)
        .chain(CREDIT_CHOICES.iter().copied().map(Some))
        .collect();
    let idx = choices
        .iter()
        .position(|c| *c == app.search_options.credits)
        .unwrap_or(0);
    let next = if forward {
        (idx + 1) % choices.len()
    } else {
        (idx + choices.len() - 1) % choices.len()
    };
    set_credits(app, choices[next]);
}

/// What: Toggle a grade level.
pub fn toggle_grade(app: &mut AppState, grade: u8) {
    toggle(&mut app.search_options.grades, grade);
    options_changed(app);
}

/// What: Toggle a day label.
pub fn toggle_day(app: &mut AppState, day: &str) {
    toggle(&mut app.search_options.days, day.to_string());
    options_changed(app);
}

/// What: Toggle a time slot.
pub fn toggle_time(app: &mut AppState, time: u8) {
    toggle(&mut app.search_options.times, time);
    options_changed(app);
}

/// What: Toggle a major.
pub fn toggle_major(app: &mut AppState, major: &str) {
    toggle(&mut app.search_options.majors, major.to_string());
    options_changed(app);
}

/// What: Reseed the day/time filters from the dialog's pre-selection.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `info`: Pre-selection, or `None` when the dialog is closed
///
/// Details:
/// - Days and times become exactly the seeded values (or empty); the other
///   dimensions are kept. The page always resets.
pub fn seed_from_search_info(app: &mut AppState, info: Option<&SearchInfo>) {
    app.search_options.days = info
        .and_then(|i| i.day.clone())
        .map(|d| vec![d])
        .unwrap_or_default();
    app.search_options.times = info.and_then(|i| i.time).map(|t| vec![t]).unwrap_or_default();
    options_changed(app);
}
