// Layout - splits the frame into the deck's panels

use super::app::App;
use super::components::{canvas_panel, logs_panel, source_panel, status_bar, title_bar};
use crate::demo::Canvas;
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

const LOGS_HEIGHT: u16 = 8;

pub fn draw(f: &mut Frame, app: &App, canvas: &Canvas) {
    let logs_height = if app.show_logs { LOGS_HEIGHT } else { 0 };
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(logs_height),
        Constraint::Length(1),
    ])
    .split(f.area());

    title_bar::render(f, rows[0], app);

    let panels = Layout::horizontal([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(rows[1]);
    canvas_panel::render(f, panels[0], canvas);
    source_panel::render(f, panels[1], app);

    if app.show_logs {
        logs_panel::render(f, rows[2], app);
    }
    status_bar::render(f, rows[3], app);
}
