// Canvas panel - renders the shared surface the active demo paints
//
// Rendering also keeps the surface sized to the panel: the demo side only
// ever reads the size, so this is the one place layout and surface meet.

use crate::demo::Canvas;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, canvas: &Canvas) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" demo ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    canvas.resize(inner.width, inner.height);
    let (cols, rows, cells) = canvas.snapshot();

    let mut lines = Vec::with_capacity(rows as usize);
    for y in 0..rows {
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_color: Option<Color> = None;

        for x in 0..cols {
            let cell = cells[y as usize * cols as usize + x as usize];
            let (ch, color) = match cell {
                Some((ch, color)) => (ch, Some(color)),
                None => (' ', None),
            };
            if color != run_color && !run.is_empty() {
                spans.push(styled(std::mem::take(&mut run), run_color));
            }
            run_color = color;
            run.push(ch);
        }
        if !run.is_empty() {
            spans.push(styled(run, run_color));
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn styled(text: String, color: Option<Color>) -> Span<'static> {
    match color {
        Some(color) => Span::styled(text, Style::default().fg(color)),
        None => Span::raw(text),
    }
}
