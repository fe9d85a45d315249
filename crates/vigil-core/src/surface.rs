//! The drawing surface abstraction hosts implement.

use crate::color::Rgba;
use crate::paint::{ColorStop, Paint, Point, Size};

/// A 2D surface the animation paints into.
///
/// The model is a canvas 2D context: every fill or stroke is composited
/// source-over, with the colour's own alpha multiplied by the surface's
/// global alpha at the time of the call.
pub trait Surface {
    /// Current dimensions in logical units.
    fn size(&self) -> Size;

    fn global_alpha(&self) -> f64;

    /// Set the alpha multiplier applied to subsequent draws.
    fn set_global_alpha(&mut self, alpha: f64);

    fn fill_rect(&mut self, origin: Point, size: Size, paint: &Paint<'_>);

    fn fill_circle(&mut self, center: Point, radius: f64, paint: &Paint<'_>);

    fn stroke_circle(&mut self, center: Point, radius: f64, line_width: f64, color: Rgba);

    fn stroke_line(&mut self, from: Point, to: Point, line_width: f64, color: Rgba);
}

/// Owned copy of a [`Paint`], as kept by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedPaint {
    Solid(Rgba),
    Linear {
        from: Point,
        to: Point,
        stops: Vec<ColorStop>,
    },
    Radial {
        center: Point,
        radius: f64,
        stops: Vec<ColorStop>,
    },
}

impl From<&Paint<'_>> for RecordedPaint {
    fn from(paint: &Paint<'_>) -> Self {
        match *paint {
            Paint::Solid(color) => Self::Solid(color),
            Paint::Linear { from, to, stops } => Self::Linear {
                from,
                to,
                stops: stops.to_vec(),
            },
            Paint::Radial {
                center,
                radius,
                stops,
            } => Self::Radial {
                center,
                radius,
                stops: stops.to_vec(),
            },
        }
    }
}

/// A single recorded draw call, with the global alpha in effect at the time.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        origin: Point,
        size: Size,
        paint: RecordedPaint,
        alpha: f64,
    },
    FillCircle {
        center: Point,
        radius: f64,
        paint: RecordedPaint,
        alpha: f64,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        line_width: f64,
        color: Rgba,
        alpha: f64,
    },
    StrokeLine {
        from: Point,
        to: Point,
        line_width: f64,
        color: Rgba,
        alpha: f64,
    },
}

/// Headless surface that records every draw call instead of rasterising.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    global_alpha: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            global_alpha: 1.0,
            commands: Vec::new(),
        }
    }

    /// Resize the surface. Like a canvas, resizing discards its contents.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the surface empty.
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn global_alpha(&self) -> f64 {
        self.global_alpha
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.global_alpha = alpha.clamp(0.0, 1.0);
    }

    fn fill_rect(&mut self, origin: Point, size: Size, paint: &Paint<'_>) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            size,
            paint: paint.into(),
            alpha: self.global_alpha,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, paint: &Paint<'_>) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            paint: paint.into(),
            alpha: self.global_alpha,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, line_width: f64, color: Rgba) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            line_width,
            color,
            alpha: self.global_alpha,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, line_width: f64, color: Rgba) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            line_width,
            color,
            alpha: self.global_alpha,
        });
    }
}
