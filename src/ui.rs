//! Terminal rendering: the schedule tables screen and the search dialog overlay.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{state::AppState, theme::theme};

/// Search dialog overlay.
pub mod dialog;
/// Text and layout helpers.
pub mod helpers;
/// Main screen with schedule tables.
pub mod tables;

/// What: Render one full frame.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (widget states and viewport sizes are recorded)
///
/// Output:
/// - Draws the title bar, the tables screen, the footer, and the dialog when open.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            "Lectern",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  course search", Style::default().fg(th.overlay1)),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    tables::render_tables(f, app, chunks[1]);

    let footer = app.status_message.as_ref().map_or_else(
        || {
            Line::from(vec![
                Span::styled("↑/↓", Style::default().fg(th.subtext0)),
                Span::styled("=table  ", Style::default().fg(th.overlay1)),
                Span::styled("Enter or /", Style::default().fg(th.subtext0)),
                Span::styled("=search  ", Style::default().fg(th.overlay1)),
                Span::styled("n", Style::default().fg(th.subtext0)),
                Span::styled("=new table  ", Style::default().fg(th.overlay1)),
                Span::styled("q", Style::default().fg(th.subtext0)),
                Span::styled("=quit", Style::default().fg(th.overlay1)),
            ])
        },
        |msg| Line::from(Span::styled(msg.clone(), Style::default().fg(th.green))),
    );
    f.render_widget(Paragraph::new(footer), chunks[2]);

    if app.dialog_open() {
        dialog::render_search_dialog(f, app, area);
    }
}

#[cfg(test)]
mod tests {
    use crate::state::{AppState, Lecture, SearchInfo};

    fn lectures(n: usize) -> Vec<Lecture> {
        (0..n)
            .map(|i| Lecture {
                id: format!("C{i:03}"),
                title: format!("Course {i}"),
                credits: "3".into(),
                major: "공과대학<p>컴퓨터공학과".into(),
                grade: 1,
                schedule: "월1~2<p>수3".into(),
            })
            .collect()
    }

    fn screen_text(term: &ratatui::Terminal<ratatui::backend::TestBackend>) -> String {
        term.backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    /// What: Render the tables screen and the open dialog without panicking.
    ///
    /// Inputs:
    /// - 250 lectures loaded into an open dialog on a 120x40 `TestBackend`.
    ///
    /// Output:
    /// - Count line shows all matches, the results viewport height is recorded,
    ///   and markup tags never reach the screen.
    ///
    /// Details:
    /// - Renders once with the dialog closed, then once open.
    fn ui_renders_tables_and_dialog() {
        use ratatui::{Terminal, backend::TestBackend};
        let backend = TestBackend::new(120, 40);
        let mut term = Terminal::new(backend).expect("terminal");
        let mut app = AppState::default();
        app.ensure_tables(["T1"]);

        term.draw(|f| super::ui(f, &mut app)).expect("draw tables");
        assert!(screen_text(&term).contains("T1"));

        crate::logic::open_dialog(&mut app, SearchInfo::for_table("T1"));
        crate::logic::replace_lectures(&mut app, lectures(250));
        app.loading = false;
        term.draw(|f| super::ui(f, &mut app)).expect("draw dialog");

        let text = screen_text(&term);
        assert!(text.contains("250 results"));
        assert!(!text.contains("<p>"));
        assert!(app.results_rows > 0);
    }
}
