use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;

/// Modal box for input errors. Drawn last so it covers everything else.
pub fn render_notice(frame: &mut Frame, area: Rect, message: &str) {
    let width = 40u16.min(area.width.saturating_sub(4));
    let popup_area = centered_rect(width, 5, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Notice ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let body = vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: OK",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(body).block(block).wrap(Wrap { trim: true });
    frame.render_widget(popup, popup_area);
}
