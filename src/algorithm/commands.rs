//! Drawing primitives produced by the synthesizer and consumed by the rasterizer

use crate::spatial::geometry::{Point, Rect};

/// Validated RGB colour triple
pub type Color = [u8; 3];

/// One primitive to rasterize
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle, rounded when `corner_radius` is positive
    FilledRect {
        /// Area to fill
        rect: Rect,
        /// Fill colour
        color: Color,
        /// Corner radius, never above half the shorter side
        corner_radius: f64,
    },
    /// Filled circle
    Ellipse {
        /// Circle center
        center: Point,
        /// Circle radius
        radius: f64,
        /// Fill colour
        color: Color,
    },
    /// Straight line segment with a stroke width
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke width
        width: f64,
        /// Stroke colour
        color: Color,
    },
}

impl DrawCommand {
    /// Rounded rectangle with the corner radius clamped to the shape
    ///
    /// Returns `None` for zero-area rectangles.
    pub fn filled_rect(rect: Rect, color: Color, corner_radius: f64) -> Option<Self> {
        if rect.is_degenerate() {
            return None;
        }
        Some(Self::FilledRect {
            rect,
            color,
            corner_radius: clamp_radius(corner_radius, &rect),
        })
    }

    /// Circle, or `None` when the radius is not positive
    pub fn ellipse(center: Point, radius: f64, color: Color) -> Option<Self> {
        (radius > 0.0).then_some(Self::Ellipse {
            center,
            radius,
            color,
        })
    }

    /// Line segment, or `None` when the stroke width is not positive
    pub fn line(from: Point, to: Point, width: f64, color: Color) -> Option<Self> {
        (width > 0.0).then_some(Self::Line {
            from,
            to,
            width,
            color,
        })
    }

    /// Colour of the primitive
    pub const fn color(&self) -> Color {
        match self {
            Self::FilledRect { color, .. }
            | Self::Ellipse { color, .. }
            | Self::Line { color, .. } => *color,
        }
    }

    /// Whether the primitive's anchor geometry lies within `bounds`
    ///
    /// Rectangles must fit entirely, circles by their center and lines by both
    /// endpoints; stroke width and dot radius may spill into the gap.
    pub fn anchored_within(&self, bounds: &Rect, tolerance: f64) -> bool {
        match self {
            Self::FilledRect { rect, .. } => bounds.contains_rect(rect, tolerance),
            Self::Ellipse { center, .. } => bounds.contains_point(*center, tolerance),
            Self::Line { from, to, .. } => {
                bounds.contains_point(*from, tolerance) && bounds.contains_point(*to, tolerance)
            }
        }
    }

    /// Same primitive with every length multiplied by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        match *self {
            Self::FilledRect {
                rect,
                color,
                corner_radius,
            } => Self::FilledRect {
                rect: rect.scaled(factor),
                color,
                corner_radius: corner_radius * factor,
            },
            Self::Ellipse {
                center,
                radius,
                color,
            } => Self::Ellipse {
                center: center.scaled(factor),
                radius: radius * factor,
                color,
            },
            Self::Line {
                from,
                to,
                width,
                color,
            } => Self::Line {
                from: from.scaled(factor),
                to: to.scaled(factor),
                width: width * factor,
                color,
            },
        }
    }
}

/// Clamp a corner radius into `[0, shorter_side / 2]`
pub fn clamp_radius(radius: f64, rect: &Rect) -> f64 {
    radius.clamp(0.0, (rect.shorter_side() / 2.0).max(0.0))
}
