// Logging - in-memory log capture for the TUI
//
// A custom tracing layer stores log events in a bounded ring buffer that the
// logs panel renders each frame. Writing logs straight to stdout would break
// through the alternate screen buffer and garble the display, so nothing in
// this binary logs to the terminal while the TUI is up.
//
// Failures (bad demos, unreachable module lists) surface here and nowhere
// else; the deck itself never shows an error dialog.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Maximum number of log entries to keep in memory
const MAX_LOG_ENTRIES: usize = 500;

/// A single log entry captured from tracing
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub message: String,
}

/// Bounded in-memory log store shared between the tracing layer and the TUI
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, dropping the oldest once the buffer is full
    fn push(&self, entry: LogEntry) {
        let mut entries = self.entries.lock().unwrap();
        if entries.len() >= MAX_LOG_ENTRIES {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// The most recent `n` entries, oldest first
    pub fn recent(&self, n: usize) -> Vec<LogEntry> {
        let entries = self.entries.lock().unwrap();
        let skip = entries.len().saturating_sub(n);
        entries.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

/// Tracing layer that captures events into a [`LogBuffer`]
pub struct DeckLogLayer {
    buffer: LogBuffer,
}

impl DeckLogLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for DeckLogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut message = String::new();
        event.record(&mut MessageVisitor(&mut message));

        self.buffer.push(LogEntry {
            timestamp: Utc::now(),
            level: *event.metadata().level(),
            message,
        });
    }

    fn enabled(&self, _metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        // Filtering happens at the subscriber level (EnvFilter)
        true
    }
}

/// Visitor that pulls the `message` field out of a tracing event
struct MessageVisitor<'a>(&'a mut String);

impl tracing::field::Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{:?}", value);
            // Strip the quotes Debug adds around plain strings
            if self.0.starts_with('"') && self.0.ends_with('"') {
                *self.0 = self.0[1..self.0.len() - 1].to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_is_bounded() {
        let buffer = LogBuffer::new();
        for i in 0..(MAX_LOG_ENTRIES + 10) {
            buffer.push(LogEntry {
                timestamp: Utc::now(),
                level: Level::INFO,
                message: format!("entry {}", i),
            });
        }
        assert_eq!(buffer.len(), MAX_LOG_ENTRIES);
        // Oldest entries were dropped
        let recent = buffer.recent(MAX_LOG_ENTRIES);
        assert_eq!(recent.first().unwrap().message, "entry 10");
    }

    #[test]
    fn recent_returns_tail_in_order() {
        let buffer = LogBuffer::new();
        for i in 0..5 {
            buffer.push(LogEntry {
                timestamp: Utc::now(),
                level: Level::WARN,
                message: format!("{}", i),
            });
        }
        let tail: Vec<String> = buffer.recent(2).into_iter().map(|e| e.message).collect();
        assert_eq!(tail, vec!["3", "4"]);
    }
}
