// TUI module - terminal setup, event loop, input handling
//
// The event loop waits on three things at once: keyboard input, the redraw
// tick, and the coordinator's effect channel. Navigation keys only push a
// request into the coordinator's queue - nothing here mutates lifecycle
// state, which keeps the coordinator the single owner of "which demo is
// active".

pub mod app;
pub mod components;
pub mod ui;

use crate::demo::Canvas;
use crate::download::Downloads;
use crate::events::{NavRequest, Outcome, UiEffect};
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI until the user quits or the coordinator requests a reload.
///
/// Sets up the terminal, runs the event loop, and always restores the
/// terminal before returning.
pub async fn run_tui(
    mut app: App,
    mut effects: mpsc::Receiver<UiEffect>,
    nav: mpsc::Sender<NavRequest>,
    canvas: Canvas,
    downloads: Downloads,
    tick_ms: u64,
) -> Result<Outcome> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app, &mut effects, &nav, &canvas, &downloads, tick_ms).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    effects: &mut mpsc::Receiver<UiEffect>,
    nav: &mpsc::Sender<NavRequest>,
    canvas: &Canvas,
    downloads: &Downloads,
    tick_ms: u64,
) -> Result<Outcome> {
    let mut tick = tokio::time::interval(Duration::from_millis(tick_ms.max(10)));

    loop {
        terminal
            .draw(|f| ui::draw(f, app, canvas))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input (poll briefly so the loop stays responsive)
            key = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key)) = event::read() {
                        return Some(key);
                    }
                }
                None
            } => {
                if let Some(key) = key {
                    handle_key(app, key, nav, downloads).await;
                }
            }

            // Periodic tick: demos repaint the canvas from their own tasks,
            // so the deck redraws even with no input or effects pending
            _ = tick.tick() => {}

            // Coordinator effects
            effect = effects.recv() => {
                if let Some(effect) = effect {
                    app.apply_effect(effect);
                }
            }
        }

        if app.reload_requested {
            return Ok(Outcome::Reload);
        }
        if app.should_quit {
            return Ok(Outcome::Quit);
        }
    }
}

async fn handle_key(
    app: &mut App,
    key: KeyEvent,
    nav: &mpsc::Sender<NavRequest>,
    downloads: &Downloads,
) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.should_quit = true;
        }

        // Demo navigation (wraps at both ends)
        KeyCode::Char('n') | KeyCode::Right => {
            let _ = nav.send(NavRequest::Forward).await;
        }
        KeyCode::Char('p') | KeyCode::Left => {
            let _ = nav.send(NavRequest::Backward).await;
        }

        // Browser-style history
        KeyCode::Char('[') => {
            let _ = nav.send(NavRequest::HistoryBack).await;
        }
        KeyCode::Char(']') => {
            let _ = nav.send(NavRequest::HistoryForward).await;
        }

        // Source panel scrolling
        KeyCode::Up | KeyCode::Char('k') => app.scroll_source_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_source_down(1),
        KeyCode::PageUp => app.scroll_source_up(10),
        KeyCode::PageDown => app.scroll_source_down(10),

        KeyCode::Char('l') => app.show_logs = !app.show_logs,

        // Download triggers
        KeyCode::Char('d') => match &app.source_raw {
            Some(source) => match downloads.save_source(&app.title, source) {
                Ok(path) => app.show_toast(format!("saved {}", short_name(&path))),
                Err(e) => {
                    tracing::error!("download failed: {:#}", e);
                    app.show_toast("download failed");
                }
            },
            None => app.show_toast("no source to download"),
        },
        KeyCode::Char('D') => match downloads.save_deck_bundle() {
            Ok(path) => app.show_toast(format!("saved {}", short_name(&path))),
            Err(e) => {
                tracing::error!("bundle download failed: {:#}", e);
                app.show_toast("download failed");
            }
        },

        // Copy displayed source to the clipboard
        KeyCode::Char('y') => match &app.source_raw {
            Some(source) => {
                if copy_to_clipboard(source).is_ok() {
                    app.show_toast("copied to clipboard");
                } else {
                    app.show_toast("copy failed");
                }
            }
            None => app.show_toast("no source to copy"),
        },

        _ => {}
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}

fn short_name(path: &std::path::Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("file")
        .to_string()
}
