// Conway's Game of Life on the canvas
//
// This demo does not implement stop: its generation task owns no handle the
// lifecycle can reclaim, so once started it keeps painting until the whole
// session is rebuilt. Demos of this class are the reason the deck prefers a
// full session restart over in-place re-activation.

use crate::demo::{Canvas, Demo, DemoError};
use crate::util::Rng;
use async_trait::async_trait;
use ratatui::style::Color;
use std::time::Duration;

pub const SOURCE: &str = include_str!("conway.rs");

const TICK: Duration = Duration::from_millis(120);
/// Fraction of cells alive in the initial soup
const SEED_DENSITY: f32 = 0.22;

pub struct Conway {
    canvas: Canvas,
    initialized: bool,
}

impl Conway {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            initialized: false,
        }
    }
}

#[async_trait]
impl Demo for Conway {
    async fn initialize(&mut self) -> Result<(), DemoError> {
        if self.initialized {
            // One-time setup; without stop support there is no clean slate
            // to set up again
            return Err(DemoError::Init("already initialized".to_string()));
        }
        self.initialized = true;
        self.canvas.clear();
        Ok(())
    }

    fn display_name(&self) -> &str {
        "Game of Life"
    }

    fn source_text(&self) -> Option<String> {
        Some(SOURCE.to_string())
    }

    async fn start(&mut self) -> Result<(), DemoError> {
        let canvas = self.canvas.clone();
        // Detached on purpose: the handle is dropped, so nothing can abort
        // the generation loop later.
        tokio::spawn(run(canvas));
        Ok(())
    }
}

struct Grid {
    cols: usize,
    rows: usize,
    alive: Vec<bool>,
}

impl Grid {
    fn seeded(cols: usize, rows: usize, rng: &mut Rng) -> Self {
        let alive = (0..cols * rows).map(|_| rng.frac() < SEED_DENSITY).collect();
        Self { cols, rows, alive }
    }

    fn neighbors(&self, x: usize, y: usize) -> usize {
        let mut count = 0;
        for dy in [self.rows - 1, 0, 1] {
            for dx in [self.cols - 1, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = (x + dx) % self.cols;
                let ny = (y + dy) % self.rows;
                if self.alive[ny * self.cols + nx] {
                    count += 1;
                }
            }
        }
        count
    }

    fn step(&self) -> Vec<bool> {
        let mut next = vec![false; self.alive.len()];
        for y in 0..self.rows {
            for x in 0..self.cols {
                let n = self.neighbors(x, y);
                let idx = y * self.cols + x;
                next[idx] = matches!((self.alive[idx], n), (true, 2) | (_, 3));
            }
        }
        next
    }
}

async fn run(canvas: Canvas) {
    let mut rng = Rng::seeded();
    let mut grid: Option<Grid> = None;

    let mut ticker = tokio::time::interval(TICK);
    loop {
        ticker.tick().await;
        let (cols, rows) = canvas.size();
        if cols == 0 || rows == 0 {
            continue;
        }

        // Reseed whenever the panel size changes
        let needs_seed = grid
            .as_ref()
            .map(|g| g.cols != cols as usize || g.rows != rows as usize)
            .unwrap_or(true);
        if needs_seed {
            grid = Some(Grid::seeded(cols as usize, rows as usize, &mut rng));
        }
        let Some(g) = grid.as_mut() else { continue };

        g.alive = g.step();

        canvas.clear();
        for y in 0..g.rows {
            for x in 0..g.cols {
                if g.alive[y * g.cols + x] {
                    canvas.put(x as u16, y as u16, '#', Color::Green);
                }
            }
        }
    }
}
