use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::{self, options};
use crate::schedule::{GRADE_CHOICES, TIME_SLOTS};
use crate::state::{AppState, Focus};

/// What: Handle a key press while the search dialog is open.
///
/// Inputs:
/// - `ke`: Key event (already filtered to presses)
/// - `app`: Mutable application state
///
/// Details:
/// - `Esc` closes; `Tab`/`BackTab` cycle focus; the rest depends on the focused element.
pub fn handle_dialog_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Esc => {
            logic::close_dialog(app);
            return;
        }
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return;
        }
        _ => {}
    }
    match app.focus {
        Focus::Query => handle_query_key(ke, app),
        Focus::Results => handle_results_key(ke, app),
        Focus::Credits | Focus::Grades | Focus::Days | Focus::Times | Focus::Majors => {
            handle_option_key(ke, app);
        }
    }
}

/// What: Edit the query; Down or Enter moves focus to the results.
fn handle_query_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            options::push_query_char(app, ch);
        }
        KeyCode::Backspace => options::pop_query_char(app),
        KeyCode::Down | KeyCode::Enter => app.focus = Focus::Results,
        _ => {}
    }
}

/// What: Move a checkbox cursor one step, clamped to `len`.
fn step(cursor: &mut usize, len: usize, forward: bool) {
    if len == 0 {
        *cursor = 0;
    } else if forward {
        *cursor = (*cursor + 1).min(len - 1);
    } else {
        *cursor = cursor.saturating_sub(1);
    }
}

/// What: Handle keys on an option row.
///
/// Details:
/// - Left/Right move the cursor (or cycle credits), Space toggles, Up/Down change rows.
fn handle_option_key(ke: KeyEvent, app: &mut AppState) {
    let forward = match ke.code {
        KeyCode::Right => Some(true),
        KeyCode::Left => Some(false),
        _ => None,
    };
    if let Some(forward) = forward {
        match app.focus {
            Focus::Credits => options::cycle_credits(app, forward),
            Focus::Grades => step(&mut app.grade_cursor, GRADE_CHOICES.len(), forward),
            Focus::Days => step(&mut app.day_cursor, app.day_labels.len(), forward),
            Focus::Times => step(&mut app.time_cursor, TIME_SLOTS.len(), forward),
            Focus::Majors => step(&mut app.major_cursor, app.all_majors.len(), forward),
            Focus::Query | Focus::Results => {}
        }
        return;
    }
    match ke.code {
        KeyCode::Char(' ') => toggle_under_cursor(app),
        KeyCode::Down => app.focus = app.focus.next(),
        KeyCode::Up => app.focus = app.focus.prev(),
        KeyCode::Enter => app.focus = Focus::Results,
        KeyCode::Backspace if app.focus == Focus::Credits => options::set_credits(app, None),
        _ => {}
    }
}

/// What: Toggle the choice under the focused row's cursor and refilter.
fn toggle_under_cursor(app: &mut AppState) {
    match app.focus {
        Focus::Credits => options::cycle_credits(app, true),
        Focus::Grades => {
            if let Some(g) = GRADE_CHOICES.get(app.grade_cursor).copied() {
                options::toggle_grade(app, g);
            }
        }
        Focus::Days => {
            if let Some(d) = app.day_labels.get(app.day_cursor).cloned() {
                options::toggle_day(app, &d);
            }
        }
        Focus::Times => {
            if let Some((slot, _)) = TIME_SLOTS.get(app.time_cursor).copied() {
                options::toggle_time(app, slot);
            }
        }
        Focus::Majors => {
            if let Some(m) = app.all_majors.get(app.major_cursor).cloned() {
                options::toggle_major(app, &m);
            }
        }
        Focus::Query | Focus::Results => {}
    }
}

/// What: Navigate results, reveal further pages, and add the selection on Enter.
///
/// Details:
/// - Up on the first row returns focus to the majors row; Backspace returns to the query.
fn handle_results_key(ke: KeyEvent, app: &mut AppState) {
    let visible = app.pager.visible_len(app.filtered.len());
    let page = usize::from(app.results_rows).max(1);
    let cur = app.results_selected;
    let target = match ke.code {
        KeyCode::Down | KeyCode::Char('j') => cur.saturating_add(1),
        KeyCode::Up | KeyCode::Char('k') => {
            if cur == 0 {
                app.focus = Focus::Majors;
                return;
            }
            cur - 1
        }
        KeyCode::PageDown => cur.saturating_add(page),
        KeyCode::PageUp => cur.saturating_sub(page),
        KeyCode::Home => 0,
        KeyCode::End => visible.saturating_sub(1),
        KeyCode::Enter => {
            logic::add_selected_to_schedule(app);
            return;
        }
        KeyCode::Backspace => {
            app.focus = Focus::Query;
            options::pop_query_char(app);
            return;
        }
        _ => return,
    };
    if visible == 0 {
        return;
    }
    app.results_selected = target.min(visible - 1);
    app.results_state.select(Some(app.results_selected));
    logic::maybe_advance_page(app);
}
