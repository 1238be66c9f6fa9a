// Status bar - position, key hints and transient toasts

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HINTS: &str = "n/p demo │ [/] history │ ↑/↓ scroll │ d/D save │ y copy │ l logs │ q quit";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let position = match app.index {
        Some(index) => format!(" module {}/{} ", index + 1, app.module_count),
        None => format!(" -/{} ", app.module_count),
    };

    let mut spans = vec![
        Span::styled(
            position,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", HINTS), Style::default().fg(Color::DarkGray)),
    ];

    if let Some(toast) = app.toast_text() {
        spans.push(Span::styled(
            format!("  ▸ {}", toast),
            Style::default().fg(Color::Yellow),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
