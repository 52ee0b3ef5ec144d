use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::api::types::Difficulty;
use crate::app::App;
use crate::presenter::{ProgressIndicator, StatCard};

fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
        Difficulty::All => Color::Cyan,
    }
}

pub fn render_stats(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(ref err) = app.error_message {
        let error = Paragraph::new(Line::from(Span::styled(
            format!(" {err}"),
            Style::default().fg(Color::Red),
        )))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Stats "));
        frame.render_widget(error, area);
        return;
    }

    let layout = Layout::vertical([
        Constraint::Length(3), // gauges
        Constraint::Length(4), // cards
        Constraint::Min(0),
    ])
    .split(area);

    let gauge_areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(layout[0]);
    for (indicator, gauge_area) in app.presenter.indicators.iter().zip(gauge_areas.iter()) {
        render_gauge(frame, *gauge_area, indicator);
    }

    if !app.presenter.cards.is_empty() {
        let card_areas = Layout::horizontal(vec![
            Constraint::Ratio(1, app.presenter.cards.len() as u32);
            app.presenter.cards.len()
        ])
        .split(layout[1]);
        for (card, card_area) in app.presenter.cards.iter().zip(card_areas.iter()) {
            render_card(frame, *card_area, card);
        }
    }
}

fn render_gauge(frame: &mut Frame, area: Rect, indicator: &ProgressIndicator) {
    let color = difficulty_color(indicator.difficulty);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" {} ", indicator.difficulty.tag()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(indicator.fill_ratio())
        .label(Span::styled(
            indicator.label.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(gauge, area);
}

fn render_card(frame: &mut Frame, area: Rect, card: &StatCard) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", card.label),
            Style::default().fg(Color::Cyan),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let value = Paragraph::new(Line::from(Span::styled(
        card.value.to_string(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .centered()
    .block(block);
    frame.render_widget(value, area);
}
