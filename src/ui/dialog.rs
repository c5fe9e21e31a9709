use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table},
};
use unicode_width::UnicodeWidthStr;

use crate::logic::{Pager, filter::sorted_times};
use crate::schedule::{CREDIT_CHOICES, GRADE_CHOICES, TIME_SLOTS};
use crate::state::{AppState, Focus};
use crate::theme::{Theme, theme};
use crate::ui::helpers::{
    centered_rect, last_major_segment, markup_to_text, truncate_to_width, window_start,
};

/// Columns reserved for the row label ("Credits  ").
const LABEL_W: u16 = 9;

/// What: Render the search dialog overlay.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state; `results_rows` is updated with the viewport height
/// - `area`: Full screen area used to center the dialog
///
/// Output:
/// - Draws filter rows, the result count, and the visible results slice.
///
/// Details:
/// - Records the results viewport height so the event layer can tell when the
///   last visible row (the infinite-scroll sentinel) is on screen.
pub fn render_search_dialog(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let rect = centered_rect(area, 140, 44);
    f.render_widget(Clear, rect);

    let table_id = app
        .search_info
        .as_ref()
        .map(|i| i.table_id.clone())
        .unwrap_or_default();
    let block = Block::default()
        .title(Span::styled(
            format!(" Search lectures · {table_id} "),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(th.mauve))
        .style(Style::default().bg(th.base));
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // query
            Constraint::Length(1), // credits
            Constraint::Length(1), // grades
            Constraint::Length(1), // days
            Constraint::Length(2), // times + chips
            Constraint::Length(2), // majors + chips
            Constraint::Length(1), // count
            Constraint::Min(3),    // results
            Constraint::Length(1), // hints
        ])
        .split(inner);

    render_query_row(f, app, rows[0], &th);
    render_credits_row(f, app, rows[1], &th);
    render_grades_row(f, app, rows[2], &th);
    render_days_row(f, app, rows[3], &th);
    render_times_rows(f, app, rows[4], &th);
    render_majors_rows(f, app, rows[5], &th);
    render_count_row(f, app, rows[6], &th);
    render_results(f, app, rows[7], &th);
    render_hints(f, rows[8], &th);
}

/// What: Label span for an option row, highlighted when the row has focus.
fn label(text: &str, focused: bool, th: &Theme) -> Span<'static> {
    let style = if focused {
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.overlay1)
    };
    Span::styled(format!("{text:<width$}", width = usize::from(LABEL_W)), style)
}

/// What: Checkbox span for one choice.
fn checkbox(text: &str, checked: bool, under_cursor: bool, th: &Theme) -> Span<'static> {
    let mark = if checked { "x" } else { " " };
    let style = if under_cursor {
        Style::default().fg(th.crust).bg(th.lavender)
    } else if checked {
        Style::default().fg(th.green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.subtext0)
    };
    Span::styled(format!("[{mark}]{text}"), style)
}

/// What: Render the query input and place the terminal cursor after the typed text.
fn render_query_row(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let focused = app.focus == Focus::Query;
    let query = &app.search_options.query;
    let line = Line::from(vec![
        label("Query", focused, th),
        Span::styled(
            if query.is_empty() && !focused {
                "code or title".to_string()
            } else {
                query.clone()
            },
            Style::default().fg(if query.is_empty() { th.overlay1 } else { th.text }),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
    if focused {
        let right = area.x + area.width.saturating_sub(1);
        let typed = u16::try_from(query.width()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(LABEL_W).saturating_add(typed).min(right);
        f.set_cursor_position(Position::new(x, area.y));
    }
}

/// What: Render the single-choice credits row.
fn render_credits_row(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let focused = app.focus == Focus::Credits;
    let current = app.search_options.credits;
    let mut spans = vec![label("Credits", focused, th)];
    let choices = std::iter::once((None, "any".to_string()))
        .chain(CREDIT_CHOICES.iter().map(|c| (Some(*c), format!("{c}"))));
    for (value, text) in choices {
        let selected = value == current;
        let style = if selected && focused {
            Style::default().fg(th.crust).bg(th.lavender)
        } else if selected {
            Style::default().fg(th.green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext0)
        };
        let mark = if selected { "(•)" } else { "( )" };
        spans.push(Span::styled(format!("{mark}{text}"), style));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// What: Render grade checkboxes.
fn render_grades_row(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let focused = app.focus == Focus::Grades;
    let mut spans = vec![label("Grades", focused, th)];
    for (i, g) in GRADE_CHOICES.iter().enumerate() {
        let checked = app.search_options.grades.contains(g);
        spans.push(checkbox(
            &format!("{g}학년"),
            checked,
            focused && i == app.grade_cursor,
            th,
        ));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// What: Render day checkboxes using the configured day labels.
fn render_days_row(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let focused = app.focus == Focus::Days;
    let mut spans = vec![label("Days", focused, th)];
    for (i, d) in app.day_labels.iter().enumerate() {
        let checked = app.search_options.days.contains(d);
        spans.push(checkbox(d, checked, focused && i == app.day_cursor, th));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// What: Render the time-slot window and a chip line of selected slots.
fn render_times_rows(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let focused = app.focus == Focus::Times;
    let avail = usize::from(area.width.saturating_sub(LABEL_W));
    let per_row = (avail / 6).max(1);
    let start = window_start(app.time_cursor, TIME_SLOTS.len(), per_row);
    let mut spans = vec![label("Times", focused, th)];
    for (i, (slot, _)) in TIME_SLOTS.iter().enumerate().skip(start).take(per_row) {
        let checked = app.search_options.times.contains(slot);
        spans.push(checkbox(
            &slot.to_string(),
            checked,
            focused && i == app.time_cursor,
            th,
        ));
        spans.push(Span::raw(" "));
    }

    // Selected slots in ascending order; the cursor's clock range while focused.
    let mut chips = vec![Span::raw(" ".repeat(usize::from(LABEL_W)))];
    if focused && let Some((slot, clock)) = TIME_SLOTS.get(app.time_cursor) {
        chips.push(Span::styled(
            format!("{slot}교시 {clock}  "),
            Style::default().fg(th.yellow),
        ));
    }
    for t in sorted_times(&app.search_options) {
        chips.push(Span::styled(
            format!("{t}교시"),
            Style::default().fg(th.crust).bg(th.sapphire),
        ));
        chips.push(Span::raw(" "));
    }
    let lines = vec![Line::from(spans), Line::from(chips)];
    f.render_widget(Paragraph::new(lines), area);
}

/// What: Render the major window and chips showing each picked major's last segment.
fn render_majors_rows(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let focused = app.focus == Focus::Majors;
    let avail = usize::from(area.width.saturating_sub(LABEL_W));
    let item_w = 18;
    let per_row = (avail / item_w).max(1);
    let start = window_start(app.major_cursor, app.all_majors.len(), per_row);
    let mut spans = vec![label("Majors", focused, th)];
    if app.all_majors.is_empty() {
        spans.push(Span::styled(
            if app.loading { "loading…" } else { "none" },
            Style::default().fg(th.overlay1),
        ));
    }
    for (i, m) in app.all_majors.iter().enumerate().skip(start).take(per_row) {
        let checked = app.search_options.majors.contains(m);
        let text = truncate_to_width(&markup_to_text(m), item_w - 4);
        spans.push(checkbox(&text, checked, focused && i == app.major_cursor, th));
        spans.push(Span::raw(" "));
    }
    if start + per_row < app.all_majors.len() {
        spans.push(Span::styled("…", Style::default().fg(th.overlay1)));
    }

    let mut chips = vec![Span::raw(" ".repeat(usize::from(LABEL_W)))];
    for m in &app.search_options.majors {
        chips.push(Span::styled(
            last_major_segment(m),
            Style::default().fg(th.crust).bg(th.sapphire),
        ));
        chips.push(Span::raw(" "));
    }
    let lines = vec![Line::from(spans), Line::from(chips)];
    f.render_widget(Paragraph::new(lines), area);
}

/// What: Render the result count, visible count, page and loading state.
fn render_count_row(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let total = app.filtered.len();
    let mut spans = vec![Span::styled(
        format!("{total} results"),
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    )];
    if total > 0 {
        spans.push(Span::styled(
            format!(
                "  · showing {} · page {}/{}",
                app.pager.visible_len(total),
                app.pager.page(),
                Pager::last_page(total)
            ),
            Style::default().fg(th.overlay1),
        ));
    }
    if app.loading {
        spans.push(Span::styled(
            "  · loading…",
            Style::default().fg(th.yellow),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// What: Render the visible slice as a table and record the viewport height.
///
/// Details:
/// - `results_rows` feeds the sentinel check made after each frame.
fn render_results(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    let focused = app.focus == Focus::Results;
    let visible = app.pager.visible(&app.filtered);
    let rows: Vec<Row> = visible
        .iter()
        .map(|l| {
            Row::new(vec![
                Cell::from(l.id.clone()),
                Cell::from(l.grade.to_string()),
                Cell::from(markup_to_text(&l.title)),
                Cell::from(l.credits.clone()),
                Cell::from(markup_to_text(&l.major)),
                Cell::from(markup_to_text(&l.schedule)),
            ])
            .style(Style::default().fg(th.text))
        })
        .collect();
    let header = Row::new(vec!["Code", "Grade", "Title", "Credits", "Major", "Schedule"])
        .style(Style::default().fg(th.overlay2).add_modifier(Modifier::BOLD));
    let widths = [
        Constraint::Length(10),
        Constraint::Length(5),
        Constraint::Min(16),
        Constraint::Length(7),
        Constraint::Percentage(22),
        Constraint::Percentage(22),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.mauve } else { th.surface2 })),
        )
        .row_highlight_style(if focused {
            Style::default().fg(th.crust).bg(th.lavender)
        } else {
            Style::default().fg(th.text).bg(th.surface2)
        })
        .highlight_symbol("▶ ");

    // Borders (2) and header (1) are not result rows.
    app.results_rows = area.height.saturating_sub(3);
    f.render_stateful_widget(table, area, &mut app.results_state);
}

/// What: Render the key hint line.
fn render_hints(f: &mut Frame, area: Rect, th: &Theme) {
    let keys = Style::default().fg(th.subtext0);
    let line = Line::from(vec![
        Span::styled("Tab/S-Tab", keys),
        Span::styled("=focus  ", Style::default().fg(th.overlay1)),
        Span::styled("←/→ Space", keys),
        Span::styled("=choose  ", Style::default().fg(th.overlay1)),
        Span::styled("↑/↓ PgUp/PgDn Home/End", keys),
        Span::styled("=scroll  ", Style::default().fg(th.overlay1)),
        Span::styled("Enter", keys),
        Span::styled("=add  ", Style::default().fg(th.overlay1)),
        Span::styled("Esc", keys),
        Span::styled("=close", Style::default().fg(th.overlay1)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
