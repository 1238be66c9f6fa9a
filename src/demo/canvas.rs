// Shared canvas surface
//
// The one display surface all demos draw into, mirroring how the original
// modules shared a single rendering context. Demos paint cells from their own
// tasks; the TUI snapshots the surface each frame. A demo that keeps painting
// after it was supposed to be gone is exactly the leaked-resource situation
// the reload guard exists for.

use ratatui::style::Color;
use std::sync::{Arc, Mutex};

/// One painted cell: glyph plus foreground color.
pub type CanvasCell = (char, Color);

#[derive(Debug, Default)]
struct Surface {
    cols: u16,
    rows: u16,
    cells: Vec<Option<CanvasCell>>,
}

/// Cheap-to-clone handle to the shared surface.
#[derive(Clone, Default)]
pub struct Canvas {
    surface: Arc<Mutex<Surface>>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current size as (cols, rows). (0, 0) until the TUI sizes the panel.
    pub fn size(&self) -> (u16, u16) {
        let surface = self.surface.lock().unwrap();
        (surface.cols, surface.rows)
    }

    /// Resize to match the panel area. Clears all cells.
    pub fn resize(&self, cols: u16, rows: u16) {
        let mut surface = self.surface.lock().unwrap();
        if surface.cols == cols && surface.rows == rows {
            return;
        }
        surface.cols = cols;
        surface.rows = rows;
        surface.cells = vec![None; cols as usize * rows as usize];
    }

    pub fn clear(&self) {
        let mut surface = self.surface.lock().unwrap();
        for cell in &mut surface.cells {
            *cell = None;
        }
    }

    /// Paint one cell. Out-of-bounds coordinates are ignored, so demos can
    /// paint without re-checking the size on every tick.
    pub fn put(&self, x: u16, y: u16, ch: char, color: Color) {
        let mut surface = self.surface.lock().unwrap();
        if x >= surface.cols || y >= surface.rows {
            return;
        }
        let idx = y as usize * surface.cols as usize + x as usize;
        surface.cells[idx] = Some((ch, color));
    }

    /// Copy of the surface for rendering: (cols, rows, row-major cells).
    pub fn snapshot(&self) -> (u16, u16, Vec<Option<CanvasCell>>) {
        let surface = self.surface.lock().unwrap();
        (surface.cols, surface.rows, surface.cells.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_and_snapshot_round_trip() {
        let canvas = Canvas::new();
        canvas.resize(4, 2);
        canvas.put(1, 0, '*', Color::Yellow);
        canvas.put(3, 1, 'o', Color::Cyan);

        let (cols, rows, cells) = canvas.snapshot();
        assert_eq!((cols, rows), (4, 2));
        assert_eq!(cells[1], Some(('*', Color::Yellow)));
        assert_eq!(cells[1 * 4 + 3], Some(('o', Color::Cyan)));
    }

    #[test]
    fn out_of_bounds_put_is_ignored() {
        let canvas = Canvas::new();
        canvas.resize(2, 2);
        canvas.put(5, 5, 'x', Color::Red);
        let (_, _, cells) = canvas.snapshot();
        assert!(cells.iter().all(Option::is_none));
    }

    #[test]
    fn resize_clears_and_clear_empties() {
        let canvas = Canvas::new();
        canvas.resize(2, 2);
        canvas.put(0, 0, 'x', Color::Red);
        canvas.resize(3, 3);
        let (_, _, cells) = canvas.snapshot();
        assert!(cells.iter().all(Option::is_none));

        canvas.put(0, 0, 'x', Color::Red);
        canvas.clear();
        let (_, _, cells) = canvas.snapshot();
        assert!(cells.iter().all(Option::is_none));
    }
}
