//! Software rasteriser rendered with half-block characters.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
use vigil_core::{Paint, Point, Rgba, Size, Surface};

/// Pixel buffer where every terminal cell holds two square pixels stacked
/// vertically. Drawing happens in logical units, `pixel_size` per pixel.
#[derive(Debug, Clone)]
pub struct Raster {
    width: u16,
    height: u16,
    pixel_size: f64,
    pixels: Vec<[f64; 3]>,
    global_alpha: f64,
}

impl Raster {
    /// Create a cleared raster of `width` x `height` pixels.
    pub fn new(width: u16, height: u16, pixel_size: f64) -> Self {
        Self {
            width,
            height,
            pixel_size,
            pixels: vec![[0.0; 3]; width as usize * height as usize],
            global_alpha: 1.0,
        }
    }

    /// Change the pixel dimensions, clearing the contents.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.pixels = vec![[0.0; 3]; width as usize * height as usize];
    }

    pub fn pixel_dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Colour of a pixel, or `None` outside the raster.
    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let [r, g, b] = self.pixels[y as usize * self.width as usize + x as usize];
        Some(Color::Rgb(r.round() as u8, g.round() as u8, b.round() as u8))
    }

    fn center(&self, x: usize, y: usize) -> Point {
        Point::new(
            (x as f64 + 0.5) * self.pixel_size,
            (y as f64 + 0.5) * self.pixel_size,
        )
    }

    /// Pixel ranges covering the logical box `min..max`, clipped to the raster.
    fn span(&self, min: Point, max: Point) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let clip = |v: f64, limit: u16| (v / self.pixel_size).floor().clamp(0.0, limit as f64) as usize;
        let clip_end =
            |v: f64, limit: u16| (v / self.pixel_size).ceil().clamp(0.0, limit as f64) as usize;
        (
            clip(min.x, self.width)..clip_end(max.x, self.width),
            clip(min.y, self.height)..clip_end(max.y, self.height),
        )
    }

    fn blend(&mut self, x: usize, y: usize, color: Rgba) {
        let alpha = color.a * self.global_alpha;
        if alpha <= 0.0 {
            return;
        }
        let pixel = &mut self.pixels[y * self.width as usize + x];
        for (channel, source) in pixel.iter_mut().zip([color.r, color.g, color.b]) {
            *channel = *channel * (1.0 - alpha) + source as f64 * alpha;
        }
    }

    /// Strokes thinner than a pixel still light one pixel.
    fn half_stroke(&self, line_width: f64) -> f64 {
        (line_width / 2.0).max(self.pixel_size / 2.0)
    }
}

impl Surface for Raster {
    fn size(&self) -> Size {
        Size::new(
            self.width as f64 * self.pixel_size,
            self.height as f64 * self.pixel_size,
        )
    }

    fn global_alpha(&self) -> f64 {
        self.global_alpha
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.global_alpha = alpha.clamp(0.0, 1.0);
    }

    fn fill_rect(&mut self, origin: Point, size: Size, paint: &Paint<'_>) {
        let max = Point::new(origin.x + size.width, origin.y + size.height);
        let (xs, ys) = self.span(origin, max);
        for y in ys {
            for x in xs.clone() {
                let at = self.center(x, y);
                if at.x >= origin.x && at.x < max.x && at.y >= origin.y && at.y < max.y {
                    self.blend(x, y, paint.sample(at));
                }
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, paint: &Paint<'_>) {
        if radius * 2.0 < self.pixel_size {
            let x = (center.x / self.pixel_size).floor();
            let y = (center.y / self.pixel_size).floor();
            if x >= 0.0 && y >= 0.0 && x < self.width as f64 && y < self.height as f64 {
                self.blend(x as usize, y as usize, paint.sample(center));
            }
            return;
        }

        let reach = Point::new(radius, radius);
        let (xs, ys) = self.span(
            Point::new(center.x - reach.x, center.y - reach.y),
            Point::new(center.x + reach.x, center.y + reach.y),
        );
        for y in ys {
            for x in xs.clone() {
                let at = self.center(x, y);
                if at.distance(center) <= radius {
                    self.blend(x, y, paint.sample(at));
                }
            }
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, line_width: f64, color: Rgba) {
        let half = self.half_stroke(line_width);
        let reach = radius + half;
        let (xs, ys) = self.span(
            Point::new(center.x - reach, center.y - reach),
            Point::new(center.x + reach, center.y + reach),
        );
        for y in ys {
            for x in xs.clone() {
                if (self.center(x, y).distance(center) - radius).abs() <= half {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, line_width: f64, color: Rgba) {
        let half = self.half_stroke(line_width);
        let (xs, ys) = self.span(
            Point::new(from.x.min(to.x) - half, from.y.min(to.y) - half),
            Point::new(from.x.max(to.x) + half, from.y.max(to.y) + half),
        );
        for y in ys {
            for x in xs.clone() {
                if distance_to_segment(self.center(x, y), from, to) <= half {
                    self.blend(x, y, color);
                }
            }
        }
    }
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= f64::EPSILON {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + t * dx, a.y + t * dy))
}

/// Top pixel in the foreground, bottom pixel in the background of `▀`.
impl Widget for &Raster {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                let (Some(top), Some(bottom)) = (self.pixel(col, row * 2), self.pixel(col, row * 2 + 1))
                else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char('▀').set_fg(top).set_bg(bottom);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(raster: &Raster, x: u16, y: u16) -> (u8, u8, u8) {
        match raster.pixel(x, y) {
            Some(Color::Rgb(r, g, b)) => (r, g, b),
            other => panic!("unexpected pixel {other:?}"),
        }
    }

    #[test]
    fn test_logical_size() {
        let raster = Raster::new(10, 8, 6.0);
        assert_eq!(raster.size(), Size::new(60.0, 48.0));
    }

    #[test]
    fn test_fill_rect_blends_with_alpha() {
        let mut raster = Raster::new(4, 4, 1.0);
        raster.fill_rect(
            Point::default(),
            raster.size(),
            &Paint::Solid(Rgba::new(200, 100, 0, 0.5)),
        );
        assert_eq!(rgb(&raster, 3, 3), (100, 50, 0));

        raster.set_global_alpha(0.0);
        raster.fill_rect(
            Point::default(),
            raster.size(),
            &Paint::Solid(Rgba::rgb(255, 255, 255)),
        );
        assert_eq!(rgb(&raster, 0, 0), (100, 50, 0));
    }

    #[test]
    fn test_tiny_circle_lights_one_pixel() {
        let mut raster = Raster::new(4, 4, 8.0);
        raster.fill_circle(
            Point::new(13.0, 27.0),
            1.0,
            &Paint::Solid(Rgba::rgb(0, 255, 255)),
        );
        assert_eq!(rgb(&raster, 1, 3), (0, 255, 255));
        assert_eq!(rgb(&raster, 0, 0), (0, 0, 0));
        assert_eq!(rgb(&raster, 2, 3), (0, 0, 0));
    }

    #[test]
    fn test_circle_on_far_edge_is_clipped() {
        let mut raster = Raster::new(4, 4, 8.0);
        raster.fill_circle(
            Point::new(32.0, 32.0),
            1.0,
            &Paint::Solid(Rgba::rgb(255, 0, 0)),
        );
        raster.stroke_circle(Point::new(100.0, 100.0), 3.0, 2.0, Rgba::rgb(255, 0, 0));
        assert_eq!(rgb(&raster, 3, 3), (0, 0, 0));
    }

    #[test]
    fn test_horizontal_line_spans_width() {
        let mut raster = Raster::new(5, 5, 2.0);
        raster.stroke_line(
            Point::new(0.0, 5.0),
            Point::new(10.0, 5.0),
            1.0,
            Rgba::rgb(0, 0, 255),
        );
        for x in 0..5 {
            assert_eq!(rgb(&raster, x, 2), (0, 0, 255));
            assert_eq!(rgb(&raster, x, 0), (0, 0, 0));
        }
    }

    #[test]
    fn test_resize_clears() {
        let mut raster = Raster::new(2, 2, 1.0);
        raster.fill_rect(
            Point::default(),
            raster.size(),
            &Paint::Solid(Rgba::rgb(255, 255, 255)),
        );
        raster.resize(3, 2);
        assert_eq!(raster.pixel_dimensions(), (3, 2));
        assert_eq!(rgb(&raster, 0, 0), (0, 0, 0));
    }

    #[test]
    fn test_widget_uses_half_blocks() {
        let mut raster = Raster::new(1, 2, 1.0);
        raster.fill_rect(
            Point::default(),
            Size::new(1.0, 1.0),
            &Paint::Solid(Rgba::rgb(255, 0, 0)),
        );
        let area = Rect::new(0, 0, 1, 1);
        let mut buf = Buffer::empty(area);
        (&raster).render(area, &mut buf);

        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 0));
    }
}
