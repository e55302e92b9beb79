use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use super::MeterView;

/// Gauge colour for an activity level.
#[must_use]
pub fn level_color(level: f64) -> Color {
    match level {
        l if l >= 80.0 => Color::Red,
        l if l >= 60.0 => Color::LightRed,
        l if l >= 30.0 => Color::Yellow,
        _ => Color::Green,
    }
}

pub fn draw_ui(f: &mut Frame, view: &MeterView, trace_lines: Vec<String>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // HUD
            Constraint::Length(3),  // Level gauge
            Constraint::Min(0),     // Trace
            Constraint::Length(12), // Activity log
        ])
        .split(f.area());

    let hud = Paragraph::new(Span::styled(
        view.hud_line(),
        Style::default().add_modifier(Modifier::REVERSED),
    ));
    f.render_widget(hud, chunks[0]);

    let level = view.level.clamp(0.0, 100.0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("EMF"))
        .gauge_style(Style::default().fg(level_color(level)).bg(Color::Black))
        .ratio(level / 100.0)
        .label(format!("{level:.0}%"));
    f.render_widget(gauge, chunks[1]);

    let text: Vec<Line> = trace_lines
        .into_iter()
        .map(|s| Line::from(Span::raw(s)))
        .collect();
    let trace = Paragraph::new(text)
        .block(Block::default().borders(Borders::NONE))
        .style(Style::default().fg(Color::Cyan).bg(Color::Black));
    f.render_widget(trace, chunks[2]);

    let log: Vec<Line> = if view.events.is_empty() {
        vec![Line::from(Span::styled(
            "No activity recorded yet...",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        view.events.iter().map(|e| Line::from(e.as_str())).collect()
    };
    let log = Paragraph::new(log).block(Block::default().borders(Borders::ALL).title("Activity log"));
    f.render_widget(log, chunks[3]);
}
