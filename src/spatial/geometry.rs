//! Rectangle and point value types used throughout partitioning and drawing
//!
//! All coordinates are floating point pixels (or supersampled pixels) while the
//! partition walk runs. Rounding to integers only happens at draw time.

/// A point in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both coordinates by `factor`
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

/// Axis-aligned rectangle with origin at its top-left corner
///
/// Width and height are never negative. Zero-area rectangles are valid values;
/// they are terminal states that draw nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width (non-negative)
    pub w: f64,
    /// Height (non-negative)
    pub h: f64,
}

impl Rect {
    /// Create a rectangle, clamping negative sizes to zero
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x,
            y,
            w: w.max(0.0),
            h: h.max(0.0),
        }
    }

    /// Right edge (`x + w`)
    pub fn x1(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge (`y + h`)
    pub fn y1(&self) -> f64 {
        self.y + self.h
    }

    /// Geometric center
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Length of the shorter side
    pub fn shorter_side(&self) -> f64 {
        self.w.min(self.h)
    }

    /// True when the rectangle covers no area
    pub fn is_degenerate(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Shrink every side by `amount`
    ///
    /// Sizes clamp at zero and the origin never moves past the far edge.
    #[must_use]
    pub fn inset(&self, amount: f64) -> Self {
        let w = (self.w - 2.0 * amount).max(0.0);
        let h = (self.h - 2.0 * amount).max(0.0);
        Self::new(
            (self.x + amount).min(self.x1()),
            (self.y + amount).min(self.y1()),
            w,
            h,
        )
    }

    /// Multiply origin and size by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.x * factor,
            self.y * factor,
            self.w * factor,
            self.h * factor,
        )
    }

    /// Check whether `other` lies within this rectangle, allowing `tolerance`
    pub fn contains_rect(&self, other: &Self, tolerance: f64) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.x1() <= self.x1() + tolerance
            && other.y1() <= self.y1() + tolerance
    }

    /// Check whether a point lies within this rectangle (edges inclusive)
    pub fn contains_point(&self, point: Point, tolerance: f64) -> bool {
        point.x >= self.x - tolerance
            && point.x <= self.x1() + tolerance
            && point.y >= self.y - tolerance
            && point.y <= self.y1() + tolerance
    }
}

/// The usable screen area once the status bar and outer gaps are removed
///
/// Built once per generation pass and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    rect: Rect,
}

impl Container {
    /// Derive the container from screen size, bar height and outer gap
    ///
    /// Returns `None` when the bar and gaps leave no usable area.
    pub fn from_screen(width: f64, height: f64, bar_height: f64, outer_gap: f64) -> Option<Self> {
        let w = width - 2.0 * outer_gap;
        let h = height - bar_height - 2.0 * outer_gap;
        (w > 0.0 && h > 0.0).then(|| Self {
            rect: Rect::new(outer_gap, bar_height + outer_gap, w, h),
        })
    }

    /// Wrap an arbitrary rectangle as a container
    pub const fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }

    /// The container area
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Container scaled for supersampled rendering
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            rect: self.rect.scaled(factor),
        }
    }
}
