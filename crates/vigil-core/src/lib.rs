//! Core drawing types for vigil.
//!
//! The animation crates never talk to a terminal or a browser directly. They
//! paint through the [`Surface`] trait using the colour and paint types
//! defined here, and each host provides its own surface implementation.

mod color;
mod paint;
mod surface;

pub use color::{Rgba, hsl_to_rgb};
pub use paint::{ColorStop, Paint, Point, Size};
pub use surface::{DrawCommand, RecordedPaint, RecordingSurface, Surface};
