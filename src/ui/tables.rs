//! Schedule tables list and entries pane.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, ScheduleEntry};
use crate::theme::{Theme, theme};
use crate::ui::helpers::{markup_to_text, slot_summary, truncate_to_width};

/// What: Render the main screen: table list on the left, entries of the highlighted table on the right.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (table selection is stateful)
/// - `area`: Region below the title bar and above the footer
pub fn render_tables(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(area);

    let focused = !app.dialog_open();
    let items: Vec<ListItem> = app
        .schedules
        .iter()
        .map(|(id, entries)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    id.clone(),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ({})", entries.len()),
                    Style::default().fg(th.overlay1),
                ),
            ]))
        })
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    format!("Tables ({})", app.schedules.len()),
                    Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.mauve } else { th.surface2 })),
        )
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("▶ ");
    f.render_stateful_widget(list, cols[0], &mut app.tables_state);

    let selected = app.selected_table();
    let entries: &[ScheduleEntry] = selected
        .as_ref()
        .and_then(|id| app.schedules.get(id))
        .map_or(&[], Vec::as_slice);
    let width = usize::from(cols[1].width.saturating_sub(2));
    let lines = entry_lines(entries, width, &th);
    let title = selected.map_or_else(|| "Entries".to_string(), |id| format!("Entries · {id}"));
    let body = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.base))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        );
    f.render_widget(body, cols[1]);
}

/// What: One line per schedule entry: day, slots, room, code, title.
fn entry_lines(entries: &[ScheduleEntry], width: usize, th: &Theme) -> Vec<Line<'static>> {
    if entries.is_empty() {
        return vec![Line::from(Span::styled(
            "No lectures yet. Press Enter to search.",
            Style::default().fg(th.subtext0),
        ))];
    }
    entries
        .iter()
        .map(|e| {
            let room = e
                .room
                .as_deref()
                .map(|r| format!(" ({r})"))
                .unwrap_or_default();
            let lead = format!("{} {}{}  ", e.day, slot_summary(&e.range), room);
            let rest = format!("{}  {}", e.lecture.id, markup_to_text(&e.lecture.title));
            let rest = truncate_to_width(&rest, width.saturating_sub(lead.width() + 1));
            Line::from(vec![
                Span::styled(lead, Style::default().fg(th.sapphire)),
                Span::styled(rest, Style::default().fg(th.text)),
            ])
        })
        .collect()
}
