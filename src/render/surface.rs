//! Pixel drawing surface backed by an `image` RGB buffer
//!
//! A pixel is painted when its center falls inside the shape, so edges are hard
//! at native resolution. Smooth edges come from drawing on a larger surface and
//! shrinking it with [`ImageSurface::resized`].

use image::{Rgb, RgbImage, imageops};
use std::ops::Range;

use crate::algorithm::commands::Color;
use crate::spatial::geometry::{Point, Rect};

/// Drawing operations the generator needs from an imaging backend
pub trait Surface {
    /// Fill `rect`, rounding its corners when `corner_radius` is positive
    fn fill_rect(&mut self, rect: &Rect, corner_radius: f64, color: Color);

    /// Fill a circle
    fn fill_ellipse(&mut self, center: Point, radius: f64, color: Color);

    /// Stroke a segment `width` pixels wide with round caps
    fn draw_line(&mut self, from: Point, to: Point, width: f64, color: Color);
}

/// In-memory RGB surface
#[derive(Debug, Clone)]
pub struct ImageSurface {
    image: RgbImage,
}

impl ImageSurface {
    /// Create a surface filled with `background`
    pub fn blank(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb(background)),
        }
    }

    /// Area-averaged copy at a smaller size
    #[must_use]
    pub fn resized(&self, width: u32, height: u32) -> Self {
        Self {
            image: imageops::thumbnail(&self.image, width, height),
        }
    }

    /// Borrow the pixel buffer
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Take the pixel buffer
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    // Pixel indices whose centers may fall within [start, end)
    fn span(start: f64, end: f64, limit: u32) -> Range<u32> {
        let clamp = |v: f64| v.clamp(0.0, f64::from(limit)) as u32;
        clamp(start.floor())..clamp(end.ceil())
    }

    fn paint_where<F>(&mut self, columns: Range<u32>, rows: Range<u32>, color: Color, inside: F)
    where
        F: Fn(f64, f64) -> bool,
    {
        for py in rows {
            let cy = f64::from(py) + 0.5;
            for px in columns.clone() {
                let cx = f64::from(px) + 0.5;
                if inside(cx, cy) {
                    self.image.put_pixel(px, py, Rgb(color));
                }
            }
        }
    }
}

impl Surface for ImageSurface {
    fn fill_rect(&mut self, rect: &Rect, corner_radius: f64, color: Color) {
        // Rounded to whole pixels only here, at draw time
        let x0 = rect.x.round();
        let y0 = rect.y.round();
        let x1 = rect.x1().round();
        let y1 = rect.y1().round();
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        let r = corner_radius.clamp(0.0, (x1 - x0).min(y1 - y0) / 2.0);
        let columns = Self::span(x0, x1, self.image.width());
        let rows = Self::span(y0, y1, self.image.height());
        self.paint_where(columns, rows, color, |cx, cy| {
            if cx < x0 || cx > x1 || cy < y0 || cy > y1 {
                return false;
            }
            if r <= 0.0 {
                return true;
            }
            let dx = cx - cx.clamp(x0 + r, x1 - r);
            let dy = cy - cy.clamp(y0 + r, y1 - r);
            dx.mul_add(dx, dy * dy) <= r * r
        });
    }

    fn fill_ellipse(&mut self, center: Point, radius: f64, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let columns = Self::span(center.x - radius, center.x + radius, self.image.width());
        let rows = Self::span(center.y - radius, center.y + radius, self.image.height());
        self.paint_where(columns, rows, color, |cx, cy| {
            let dx = cx - center.x;
            let dy = cy - center.y;
            dx.mul_add(dx, dy * dy) <= radius * radius
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, width: f64, color: Color) {
        let half = width / 2.0;
        if half <= 0.0 {
            return;
        }
        let columns = Self::span(
            from.x.min(to.x) - half,
            from.x.max(to.x) + half,
            self.image.width(),
        );
        let rows = Self::span(
            from.y.min(to.y) - half,
            from.y.max(to.y) + half,
            self.image.height(),
        );
        self.paint_where(columns, rows, color, |cx, cy| {
            distance_to_segment(Point::new(cx, cy), from, to) <= half
        });
    }
}

/// Euclidean distance from `p` to the segment `a`-`b`
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let length_sq = abx.mul_add(abx, aby * aby);
    let t = if length_sq > 0.0 {
        ((p.x - a.x).mul_add(abx, (p.y - a.y) * aby) / length_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let dx = t.mul_add(abx, a.x) - p.x;
    let dy = t.mul_add(aby, a.y) - p.y;
    dx.hypot(dy)
}
