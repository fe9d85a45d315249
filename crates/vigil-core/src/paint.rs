//! Geometry and paint primitives.

use crate::color::Rgba;

/// A position on a surface, in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Dimensions of a surface, in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a size. Negative or non-finite dimensions collapse to zero.
    pub fn new(width: f64, height: f64) -> Self {
        let sanitize = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A colour at a given offset (`0.0..=1.0`) along a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

impl ColorStop {
    pub fn new(offset: f64, color: Rgba) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// How a filled shape is coloured.
///
/// Gradients borrow their stops so building one per frame never allocates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint<'a> {
    Solid(Rgba),
    /// Gradient along the line `from -> to`, extended flat past both ends.
    Linear {
        from: Point,
        to: Point,
        stops: &'a [ColorStop],
    },
    /// Gradient from `center` (offset 0) to `radius` (offset 1).
    Radial {
        center: Point,
        radius: f64,
        stops: &'a [ColorStop],
    },
}

impl Paint<'_> {
    /// Colour of this paint at a point.
    ///
    /// Degenerate gradients (zero length or zero radius) sample as fully
    /// transparent, matching canvas behaviour.
    pub fn sample(&self, at: Point) -> Rgba {
        match *self {
            Paint::Solid(color) => color,
            Paint::Linear { from, to, stops } => {
                let dx = to.x - from.x;
                let dy = to.y - from.y;
                let len_sq = dx * dx + dy * dy;
                if len_sq <= f64::EPSILON {
                    return Rgba::new(0, 0, 0, 0.0);
                }
                let t = ((at.x - from.x) * dx + (at.y - from.y) * dy) / len_sq;
                sample_stops(stops, t)
            }
            Paint::Radial {
                center,
                radius,
                stops,
            } => {
                if radius <= f64::EPSILON {
                    return Rgba::new(0, 0, 0, 0.0);
                }
                sample_stops(stops, at.distance(center) / radius)
            }
        }
    }
}

/// Interpolate a colour from sorted gradient stops.
fn sample_stops(stops: &[ColorStop], t: f64) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Rgba::new(0, 0, 0, 0.0);
    };
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= f64::EPSILON {
                return b.color;
            }
            return a.color.lerp(b.color, (t - a.offset) / span);
        }
    }
    last.color
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops() -> [ColorStop; 2] {
        [
            ColorStop::new(0.0, Rgba::new(0, 0, 0, 1.0)),
            ColorStop::new(1.0, Rgba::new(200, 200, 200, 0.0)),
        ]
    }

    #[test]
    fn test_size_sanitizes() {
        assert_eq!(Size::new(-3.0, f64::NAN), Size::new(0.0, 0.0));
        assert!(Size::new(0.0, 10.0).is_empty());
        assert!(!Size::new(800.0, 600.0).is_empty());
    }

    #[test]
    fn test_linear_sample() {
        let stops = stops();
        let paint = Paint::Linear {
            from: Point::new(0.0, 0.0),
            to: Point::new(0.0, 100.0),
            stops: &stops,
        };
        assert_eq!(paint.sample(Point::new(50.0, -10.0)), stops[0].color);
        assert_eq!(paint.sample(Point::new(50.0, 500.0)), stops[1].color);
        assert_eq!(
            paint.sample(Point::new(3.0, 50.0)),
            Rgba::new(100, 100, 100, 0.5)
        );
    }

    #[test]
    fn test_radial_sample() {
        let stops = stops();
        let paint = Paint::Radial {
            center: Point::new(10.0, 10.0),
            radius: 20.0,
            stops: &stops,
        };
        assert_eq!(paint.sample(Point::new(10.0, 10.0)), stops[0].color);
        assert_eq!(paint.sample(Point::new(30.0, 10.0)), stops[1].color);
    }

    #[test]
    fn test_degenerate_gradients_are_transparent() {
        let stops = stops();
        let radial = Paint::Radial {
            center: Point::default(),
            radius: 0.0,
            stops: &stops,
        };
        assert_eq!(radial.sample(Point::default()).a, 0.0);
        let linear = Paint::Linear {
            from: Point::default(),
            to: Point::default(),
            stops: &stops,
        };
        assert_eq!(linear.sample(Point::new(1.0, 1.0)).a, 0.0);
    }
}
