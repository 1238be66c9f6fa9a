// Source panel - the active demo's own source, highlighted
//
// Demos are not required to publish source; the panel then shows a fixed
// placeholder rather than going blank.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "No source code available";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" source ")
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = match &app.source_view {
        Some(text) => Paragraph::new(text.clone())
            .block(block)
            .scroll((app.source_scroll, 0)),
        None => Paragraph::new(PLACEHOLDER)
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
            .block(block),
    };

    f.render_widget(paragraph, area);
}
