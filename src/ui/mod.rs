pub mod notice;
pub mod search;
pub mod stats;
pub mod status_bar;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Phase};

use notice::render_notice;
use search::render_search_row;
use stats::render_stats;
use status_bar::render_status_bar;

const SPINNER: [&str; 10] = [
    "\u{280b}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283c}", "\u{2834}", "\u{2826}", "\u{2827}",
    "\u{2807}", "\u{280f}",
];

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::vertical([
        Constraint::Length(1), // title bar
        Constraint::Length(3), // search row
        Constraint::Min(6),    // stats area
        Constraint::Length(1), // status bar
    ])
    .split(area);

    render_title_bar(frame, layout[0], app);
    render_search_row(frame, layout[1], app);
    render_stats(frame, layout[2], app);

    let hints: &[(&str, &str)] = if app.notice.is_some() {
        &[("Enter/Esc", "Dismiss")]
    } else {
        &[("type", "Username"), ("Enter", "Search"), ("Esc", "Quit")]
    };
    render_status_bar(frame, layout[3], hints);

    if let Some(ref message) = app.notice {
        render_notice(frame, area, message);
    }
}

fn render_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            " LeetCode Stats ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    if app.phase == Phase::Searching {
        let s = SPINNER[app.spinner_frame % SPINNER.len()];
        spans.push(Span::styled(
            format!("{s} Fetching stats..."),
            Style::default().fg(Color::Yellow),
        ));
    }

    let title = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(title, area);
}

pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::LookupOutcome;
    use crate::error::StatsError;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn idle_screen_shows_search_button_and_empty_labels() {
        let screen = draw(&App::new());
        assert!(screen.contains("Search"));
        assert_eq!(screen.matches("0/0").count(), 3);
    }

    #[test]
    fn searching_shows_disabled_button_label() {
        let mut app = App::new();
        app.input = "alice".to_string();
        app.submit().unwrap();
        assert!(draw(&app).contains("Searching..."));
    }

    #[test]
    fn error_replaces_results() {
        let mut app = App::new();
        app.input = "alice".to_string();
        let ticket = app.submit().unwrap();
        app.complete(LookupOutcome {
            seq: ticket.seq,
            result: Err(StatsError::FetchFailed),
        });

        let screen = draw(&app);
        assert!(screen.contains("Unable to fetch the user details"));
        assert!(!screen.contains("0/0"));
    }

    #[test]
    fn notice_is_drawn_over_the_screen() {
        let mut app = App::new();
        app.submit();
        assert!(draw(&app).contains("Username should not be empty"));
    }
}
