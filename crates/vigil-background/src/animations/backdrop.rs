//! Fading trail overlay and background tint.

use vigil_core::{ColorStop, Paint, Point, Rgba, Surface};

/// Slate tone shared by the overlay and the background gradient.
const SLATE: (u8, u8, u8) = (15, 23, 42);

/// Opacity of the per-frame overlay. Anything drawn earlier fades by this
/// fraction each frame instead of being cleared.
pub const TRAIL_FADE: f64 = 0.1;

/// Paint the fading overlay followed by the vertical background gradient.
pub fn draw<S: Surface + ?Sized>(surface: &mut S) {
    let size = surface.size();
    let (r, g, b) = SLATE;

    surface.fill_rect(
        Point::default(),
        size,
        &Paint::Solid(Rgba::new(r, g, b, TRAIL_FADE)),
    );

    let stops = [
        ColorStop::new(0.0, Rgba::new(r, g, b, 0.02)),
        ColorStop::new(1.0, Rgba::new(r, g, b, 0.05)),
    ];
    surface.fill_rect(
        Point::default(),
        size,
        &Paint::Linear {
            from: Point::new(0.0, 0.0),
            to: Point::new(0.0, size.height),
            stops: &stops,
        },
    );
}
