//! Horizontal scan line sweeping top to bottom.

use vigil_core::{Point, Rgba, Surface};

/// Downward movement per frame.
pub const SCAN_SPEED: f64 = 0.5;

const LINE_WIDTH: f64 = 2.0;
const GLOW_WIDTH: f64 = 20.0;

/// Vertical position of the scan line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScanLine {
    pub y: f64,
}

impl ScanLine {
    /// Draw the crisp line and its wide glow at the current offset.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let width = surface.size().width;
        let from = Point::new(0.0, self.y);
        let to = Point::new(width, self.y);

        surface.stroke_line(from, to, LINE_WIDTH, Rgba::hsla(200.0, 1.0, 0.5, 0.1));
        surface.stroke_line(from, to, GLOW_WIDTH, Rgba::hsla(200.0, 1.0, 0.6, 0.05));
    }

    /// Move down one frame, restarting at the top once past `height`.
    pub fn advance(&mut self, height: f64) {
        self.y += SCAN_SPEED;
        if self.y > height {
            self.y = 0.0;
        }
    }
}
