use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub fn render_search_row(frame: &mut Frame, area: Rect, app: &App) {
    let layout = Layout::horizontal([Constraint::Min(20), Constraint::Length(16)]).split(area);

    let editable = app.notice.is_none();
    let input_block = Block::default()
        .title(" Username ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if editable { Color::Cyan } else { Color::DarkGray }));

    let cursor = if editable { "\u{258e}" } else { "" };
    let input = Line::from(vec![
        Span::styled(format!(" {}", app.input), Style::default().fg(Color::White)),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(Paragraph::new(input).block(input_block), layout[0]);

    let button_style = if app.is_search_enabled() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    };
    let button = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", app.button_label()),
        button_style,
    )))
    .centered()
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, layout[1]);
}
