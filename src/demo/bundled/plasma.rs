// Plasma - interference-pattern shading over the whole canvas
//
// This demo's startup unwinds through the contract's control-flow escape
// rather than returning normally (its setup is modelled on run loops that
// never hand control back), and it publishes no source text, so the deck
// shows the source placeholder while it runs.

use crate::demo::{Canvas, Demo, DemoError};
use async_trait::async_trait;
use ratatui::style::Color;
use std::time::Duration;
use tokio::task::JoinHandle;

const TICK: Duration = Duration::from_millis(60);

/// Shading ramp from faint to bright
const RAMP: [(char, Color); 5] = [
    (' ', Color::Reset),
    ('.', Color::DarkGray),
    (':', Color::Blue),
    ('=', Color::Magenta),
    ('@', Color::LightMagenta),
];

pub struct Plasma {
    canvas: Canvas,
    task: Option<JoinHandle<()>>,
}

impl Plasma {
    pub fn new(canvas: Canvas) -> Self {
        Self { canvas, task: None }
    }
}

#[async_trait]
impl Demo for Plasma {
    async fn initialize(&mut self) -> Result<(), DemoError> {
        self.canvas.clear();
        // Setup is done; unwind through the escape instead of returning.
        Err(DemoError::ControlFlowEscape)
    }

    fn display_name(&self) -> &str {
        "Plasma"
    }

    async fn start(&mut self) -> Result<(), DemoError> {
        if self.task.is_some() {
            return Err(DemoError::Start("already running".to_string()));
        }
        let canvas = self.canvas.clone();
        self.task = Some(tokio::spawn(run(canvas)));
        Ok(())
    }

    fn supports_stop(&self) -> bool {
        true
    }

    async fn stop(&mut self) -> Result<(), DemoError> {
        let Some(task) = self.task.take() else {
            return Err(DemoError::Stop("was not running".to_string()));
        };
        task.abort();
        self.canvas.clear();
        Ok(())
    }
}

async fn run(canvas: Canvas) {
    let mut t: f32 = 0.0;
    let mut ticker = tokio::time::interval(TICK);
    loop {
        ticker.tick().await;
        t += 0.08;

        let (cols, rows) = canvas.size();
        if cols == 0 || rows == 0 {
            continue;
        }

        for y in 0..rows {
            for x in 0..cols {
                let fx = x as f32 / cols as f32;
                let fy = y as f32 / rows as f32;
                let v = ((fx * 9.0 + t).sin()
                    + (fy * 7.0 - t * 0.7).sin()
                    + ((fx + fy) * 5.0 + t * 1.3).sin())
                    / 3.0;
                // v is in [-1, 1]; map onto the shading ramp
                let level = (((v + 1.0) / 2.0) * (RAMP.len() - 1) as f32).round() as usize;
                let (ch, color) = RAMP[level.min(RAMP.len() - 1)];
                canvas.put(x, y, ch, color);
            }
        }
    }
}
