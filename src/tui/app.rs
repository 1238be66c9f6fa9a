// TUI application state
//
// The render-side view of the deck: the title, the (pre-highlighted) source
// panel content, the current index for the status bar, and small bits of UI
// state like scroll offsets and toasts. All of it is driven by UiEffect
// values coming off the coordinator's channel - apply_effect is the thin
// rendering collaborator the state machine's outputs land in.

use crate::coordinator::LOADING_TITLE;
use crate::events::UiEffect;
use crate::highlight::{Highlighter, RustHighlighter};
use crate::logging::LogBuffer;
use ratatui::text::Text;
use std::time::{Duration, Instant};

/// How long toasts stay on screen
const TOAST_TTL: Duration = Duration::from_secs(2);

pub struct App {
    /// Title bar text; starts at the transitional label until the first
    /// demo lands
    pub title: String,

    /// Raw source of the displayed demo (clipboard and download reuse it)
    pub source_raw: Option<String>,

    /// Highlighted source, computed once per source change
    pub source_view: Option<Text<'static>>,

    /// Number of lines in the source view, for scroll clamping
    source_lines: usize,

    /// Current module index (None until the first index change arrives)
    pub index: Option<usize>,

    /// Total number of modules in the registry
    pub module_count: usize,

    /// Source panel scroll offset
    pub source_scroll: u16,

    /// Whether the logs panel is visible
    pub show_logs: bool,

    pub should_quit: bool,

    /// Set when the coordinator asks for a full session restart
    pub reload_requested: bool,

    pub log_buffer: LogBuffer,

    toast: Option<(String, Instant)>,

    highlighter: RustHighlighter,
}

impl App {
    pub fn new(log_buffer: LogBuffer, module_count: usize) -> Self {
        Self {
            title: LOADING_TITLE.to_string(),
            source_raw: None,
            source_view: None,
            source_lines: 0,
            index: None,
            module_count,
            source_scroll: 0,
            show_logs: false,
            should_quit: false,
            reload_requested: false,
            log_buffer,
            toast: None,
            highlighter: RustHighlighter,
        }
    }

    /// Apply one coordinator output to the view state.
    pub fn apply_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Title(title) => self.title = title,
            UiEffect::Source(Some(source)) => {
                let view = self.highlighter.highlight(&source);
                self.source_lines = view.lines.len();
                self.source_view = Some(view);
                self.source_raw = Some(source);
                self.source_scroll = 0;
            }
            UiEffect::Source(None) => {
                self.source_raw = None;
                self.source_view = None;
                self.source_lines = 0;
                self.source_scroll = 0;
            }
            UiEffect::IndexChanged(index) => self.index = Some(index),
            UiEffect::Reload => self.reload_requested = true,
        }
    }

    pub fn scroll_source_up(&mut self, lines: u16) {
        self.source_scroll = self.source_scroll.saturating_sub(lines);
    }

    pub fn scroll_source_down(&mut self, lines: u16) {
        let max = self.source_lines.saturating_sub(1) as u16;
        self.source_scroll = (self.source_scroll + lines).min(max);
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some((message.into(), Instant::now()));
    }

    /// The toast to display, if one is still fresh.
    pub fn toast_text(&self) -> Option<&str> {
        match &self.toast {
            Some((message, at)) if at.elapsed() < TOAST_TTL => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(LogBuffer::new(), 4)
    }

    #[test]
    fn starts_on_the_transitional_title() {
        assert_eq!(app().title, LOADING_TITLE);
    }

    #[test]
    fn source_effect_highlights_and_resets_scroll() {
        let mut app = app();
        app.source_scroll = 10;
        app.apply_effect(UiEffect::Source(Some("fn main() {}\nfn other() {}".to_string())));
        assert_eq!(app.source_scroll, 0);
        assert_eq!(app.source_view.as_ref().unwrap().lines.len(), 2);
        assert_eq!(app.source_raw.as_deref(), Some("fn main() {}\nfn other() {}"));
    }

    #[test]
    fn absent_source_clears_the_panel() {
        let mut app = app();
        app.apply_effect(UiEffect::Source(Some("fn main() {}".to_string())));
        app.apply_effect(UiEffect::Source(None));
        assert!(app.source_view.is_none());
        assert!(app.source_raw.is_none());
    }

    #[test]
    fn scroll_is_clamped_to_the_source_length() {
        let mut app = app();
        app.apply_effect(UiEffect::Source(Some("one\ntwo\nthree".to_string())));
        app.scroll_source_down(100);
        assert_eq!(app.source_scroll, 2);
        app.scroll_source_up(100);
        assert_eq!(app.source_scroll, 0);
    }

    #[test]
    fn reload_effect_sets_the_restart_flag() {
        let mut app = app();
        app.apply_effect(UiEffect::Reload);
        assert!(app.reload_requested);
    }
}
