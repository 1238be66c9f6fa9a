// Starfield - stars streaming across the canvas at layered speeds

use crate::demo::{Canvas, Demo, DemoError};
use crate::util::Rng;
use async_trait::async_trait;
use ratatui::style::Color;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const SOURCE: &str = include_str!("starfield.rs");

const STAR_COUNT: usize = 80;
const TICK: Duration = Duration::from_millis(50);

struct Star {
    x: f32,
    y: f32,
    speed: f32,
}

impl Star {
    fn glyph(&self) -> (char, Color) {
        if self.speed > 1.2 {
            ('*', Color::White)
        } else if self.speed > 0.7 {
            ('+', Color::Gray)
        } else {
            ('.', Color::DarkGray)
        }
    }
}

pub struct Starfield {
    canvas: Canvas,
    task: Option<JoinHandle<()>>,
}

impl Starfield {
    pub fn new(canvas: Canvas) -> Self {
        Self { canvas, task: None }
    }
}

#[async_trait]
impl Demo for Starfield {
    async fn initialize(&mut self) -> Result<(), DemoError> {
        self.canvas.clear();
        Ok(())
    }

    fn display_name(&self) -> &str {
        "Starfield"
    }

    fn source_text(&self) -> Option<String> {
        Some(SOURCE.to_string())
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
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.canvas.clear();
        Ok(())
    }
}

async fn run(canvas: Canvas) {
    let mut rng = Rng::seeded();
    let mut stars: Vec<Star> = (0..STAR_COUNT)
        .map(|_| Star {
            x: rng.frac(),
            y: rng.frac(),
            speed: 0.3 + rng.frac() * 1.2,
        })
        .collect();

    let mut ticker = tokio::time::interval(TICK);
    loop {
        ticker.tick().await;
        let (cols, rows) = canvas.size();
        if cols == 0 || rows == 0 {
            continue;
        }

        canvas.clear();
        for star in &mut stars {
            star.x += star.speed / cols as f32;
            if star.x >= 1.0 {
                star.x -= 1.0;
                star.y = rng.frac();
            }
            let (ch, color) = star.glyph();
            let x = (star.x * cols as f32) as u16;
            let y = (star.y * rows as f32) as u16;
            canvas.put(x, y, ch, color);
        }
    }
}
