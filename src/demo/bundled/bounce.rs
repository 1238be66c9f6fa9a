// Bounce - balls under gravity, bouncing off the canvas walls

use crate::demo::{Canvas, Demo, DemoError};
use crate::util::Rng;
use async_trait::async_trait;
use ratatui::style::Color;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const SOURCE: &str = include_str!("bounce.rs");

const BALL_COUNT: usize = 6;
const TICK: Duration = Duration::from_millis(40);
const GRAVITY: f32 = 0.035;
/// Velocity kept after a floor bounce
const RESTITUTION: f32 = 0.92;

const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::Blue,
];

struct Ball {
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    color: Color,
}

pub struct Bounce {
    canvas: Canvas,
    task: Option<JoinHandle<()>>,
}

impl Bounce {
    pub fn new(canvas: Canvas) -> Self {
        Self { canvas, task: None }
    }
}

#[async_trait]
impl Demo for Bounce {
    async fn initialize(&mut self) -> Result<(), DemoError> {
        self.canvas.clear();
        Ok(())
    }

    fn display_name(&self) -> &str {
        "Bouncing Balls"
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
    let mut balls: Vec<Ball> = (0..BALL_COUNT)
        .map(|_| Ball {
            x: rng.frac(),
            y: rng.frac() * 0.4,
            dx: (rng.frac() - 0.5) * 1.6,
            dy: 0.0,
            color: PALETTE[rng.below(PALETTE.len() as u64) as usize],
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
        for ball in &mut balls {
            ball.dy += GRAVITY / rows as f32;
            ball.x += ball.dx / cols as f32;
            ball.y += ball.dy;

            if ball.x <= 0.0 {
                ball.x = 0.0;
                ball.dx = ball.dx.abs();
            } else if ball.x >= 1.0 {
                ball.x = 1.0;
                ball.dx = -ball.dx.abs();
            }
            if ball.y >= 1.0 {
                ball.y = 1.0;
                ball.dy = -ball.dy.abs() * RESTITUTION;
            }

            let x = (ball.x * (cols - 1) as f32) as u16;
            let y = (ball.y * (rows - 1) as f32) as u16;
            canvas.put(x, y, 'O', ball.color);
        }
    }
}
