// Logs panel - the deck's only failure surface
//
// Registry failures, demos that refuse to initialize, stops that throw: all
// of it lands here and nowhere else.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::Level;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" logs ({}) ", app.log_buffer.len()))
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let entries = app.log_buffer.recent(inner.height as usize);
    let lines: Vec<Line> = entries
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:5} ", entry.level),
                    Style::default().fg(level_color(entry.level)),
                ),
                Span::raw(entry.message.clone()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

fn level_color(level: Level) -> Color {
    if level == Level::ERROR {
        Color::Red
    } else if level == Level::WARN {
        Color::Yellow
    } else if level == Level::INFO {
        Color::Green
    } else if level == Level::DEBUG {
        Color::Blue
    } else {
        Color::DarkGray
    }
}
