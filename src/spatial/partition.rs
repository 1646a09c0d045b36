//! Recursive rectangle subdivision into binary halves or quadrants
//!
//! The walk is depth-first and fully deterministic: binary split positions come
//! from a fixed [`RatioCycle`] rather than a random stream, so the same inputs
//! always produce the same tree. Nothing is materialised; each split and leaf is
//! reported to a [`PartitionVisitor`] as the walk passes it.

use serde::Deserialize;

use crate::io::configuration::DEFAULT_SPLIT_RATIOS;
use crate::spatial::geometry::Rect;

/// Orientation of a split line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAxis {
    /// Line parallel to the y axis; divides width
    Vertical,
    /// Line parallel to the x axis; divides height
    Horizontal,
}

impl SplitAxis {
    /// Axis used at a given depth when alternating (vertical on even depths)
    pub const fn for_depth(depth: usize) -> Self {
        if depth % 2 == 0 {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }
}

/// How binary BSP chooses the axis at each level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AxisPolicy {
    /// One split per level, vertical on even depths and horizontal on odd ones
    Alternating,
    /// A vertical and a horizontal split per level, yielding four gapped children
    #[default]
    Both,
}

/// Shape of a single subdivision step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// Two children along the given axis, separated by the gap
    Binary(SplitAxis),
    /// Four equal children sharing the exact midpoint
    Quadrant,
}

/// Fixed repeating sequence of split ratios
#[derive(Debug, Clone)]
pub struct RatioCycle {
    ratios: Vec<f64>,
    cursor: usize,
}

impl Default for RatioCycle {
    fn default() -> Self {
        Self::new(DEFAULT_SPLIT_RATIOS.to_vec())
    }
}

impl RatioCycle {
    /// Create a cycle over `ratios`
    ///
    /// Ratios are clamped into `[0, 1]`. An empty list behaves as a constant 0.5.
    pub fn new(ratios: Vec<f64>) -> Self {
        let ratios = if ratios.is_empty() {
            vec![0.5]
        } else {
            ratios.into_iter().map(|r| r.clamp(0.0, 1.0)).collect()
        };
        Self { ratios, cursor: 0 }
    }

    /// Next ratio in the cycle
    pub fn next_ratio(&mut self) -> f64 {
        let ratio = self
            .ratios
            .get(self.cursor % self.ratios.len())
            .copied()
            .unwrap_or(0.5);
        self.cursor = self.cursor.wrapping_add(1);
        ratio
    }

    /// Rewind to the first ratio
    pub const fn reset(&mut self) {
        self.cursor = 0;
    }
}

/// Split `rect` once along `axis` at `position + size * ratio`
///
/// Each child gives up `gap / 2` on the shared side. A child whose size would go
/// negative collapses to zero width or height.
pub fn split_binary(rect: &Rect, axis: SplitAxis, ratio: f64, gap: f64) -> [Rect; 2] {
    let half_gap = gap / 2.0;
    match axis {
        SplitAxis::Vertical => {
            let split = split_coordinate(rect, axis, ratio);
            let right_x = (split + half_gap).min(rect.x1());
            [
                Rect::new(rect.x, rect.y, split - half_gap - rect.x, rect.h),
                Rect::new(right_x, rect.y, rect.x1() - right_x, rect.h),
            ]
        }
        SplitAxis::Horizontal => {
            let split = split_coordinate(rect, axis, ratio);
            let bottom_y = (split + half_gap).min(rect.y1());
            [
                Rect::new(rect.x, rect.y, rect.w, split - half_gap - rect.y),
                Rect::new(rect.x, bottom_y, rect.w, rect.y1() - bottom_y),
            ]
        }
    }
}

/// Split `rect` into quadrants ordered top-left, top-right, bottom-left, bottom-right
pub fn split_quadrants(rect: &Rect) -> [Rect; 4] {
    let half_w = rect.w / 2.0;
    let half_h = rect.h / 2.0;
    let mid_x = rect.x + half_w;
    let mid_y = rect.y + half_h;
    [
        Rect::new(rect.x, rect.y, half_w, half_h),
        Rect::new(mid_x, rect.y, half_w, half_h),
        Rect::new(rect.x, mid_y, half_w, half_h),
        Rect::new(mid_x, mid_y, half_w, half_h),
    ]
}

/// Single subdivision step in either mode
///
/// `ratio` and `gap` only apply to binary splits.
pub fn split(rect: &Rect, mode: SplitMode, ratio: f64, gap: f64) -> Vec<Rect> {
    match mode {
        SplitMode::Binary(axis) => split_binary(rect, axis, ratio, gap).to_vec(),
        SplitMode::Quadrant => split_quadrants(rect).to_vec(),
    }
}

/// Receives split lines and terminal leaves as a partition walk proceeds
pub trait PartitionVisitor {
    /// A split line at `coordinate` was placed inside `parent`
    fn on_split(&mut self, _axis: SplitAxis, _coordinate: f64, _parent: &Rect) {}

    /// Recursion stopped at `rect`
    fn on_leaf(&mut self, _rect: &Rect) {}
}

/// Depth-bounded recursive subdivider
#[derive(Debug, Clone)]
pub struct Partitioner {
    gap: f64,
    border_size: f64,
    policy: AxisPolicy,
    ratios: RatioCycle,
}

impl Partitioner {
    /// Create a partitioner with the given inter-cell gap and border size
    pub fn new(gap: f64, border_size: f64, policy: AxisPolicy, ratios: RatioCycle) -> Self {
        Self {
            gap: gap.max(0.0),
            border_size: border_size.max(0.0),
            policy,
            ratios,
        }
    }

    /// Smallest side a binary split still accepts
    pub fn min_splittable_size(&self) -> f64 {
        2.0f64.mul_add(self.border_size, self.gap)
    }

    /// Whether a rectangle is large enough for another binary split
    pub fn can_subdivide(&self, rect: &Rect) -> bool {
        let min = self.min_splittable_size();
        rect.w >= min && rect.h >= min
    }

    /// Binary BSP walk over `levels` levels of splitting
    ///
    /// The ratio cycle restarts at the beginning of every walk so repeated walks
    /// over the same rectangle are identical.
    pub fn walk_binary<V: PartitionVisitor>(&mut self, rect: Rect, levels: usize, visitor: &mut V) {
        self.ratios.reset();
        self.binary_step(rect, levels, 0, visitor);
    }

    fn binary_step<V: PartitionVisitor>(
        &mut self,
        rect: Rect,
        levels: usize,
        depth: usize,
        visitor: &mut V,
    ) {
        if levels == 0 || !self.can_subdivide(&rect) {
            visitor.on_leaf(&rect);
            return;
        }

        match self.policy {
            AxisPolicy::Alternating => {
                let axis = SplitAxis::for_depth(depth);
                let ratio = self.ratios.next_ratio();
                visitor.on_split(axis, split_coordinate(&rect, axis, ratio), &rect);
                for child in split_binary(&rect, axis, ratio, self.gap) {
                    self.binary_step(child, levels - 1, depth + 1, visitor);
                }
            }
            AxisPolicy::Both => {
                let ratio_x = self.ratios.next_ratio();
                let ratio_y = self.ratios.next_ratio();
                visitor.on_split(
                    SplitAxis::Vertical,
                    split_coordinate(&rect, SplitAxis::Vertical, ratio_x),
                    &rect,
                );
                visitor.on_split(
                    SplitAxis::Horizontal,
                    split_coordinate(&rect, SplitAxis::Horizontal, ratio_y),
                    &rect,
                );

                let [left, right] = split_binary(&rect, SplitAxis::Vertical, ratio_x, self.gap);
                let [top_left, bottom_left] =
                    split_binary(&left, SplitAxis::Horizontal, ratio_y, self.gap);
                let [top_right, bottom_right] =
                    split_binary(&right, SplitAxis::Horizontal, ratio_y, self.gap);
                for child in [top_left, top_right, bottom_left, bottom_right] {
                    self.binary_step(child, levels - 1, depth + 1, visitor);
                }
            }
        }
    }

    /// Quadrant walk over `levels` levels of splitting
    ///
    /// Reports the section's mid lines as splits before descending into the
    /// quadrants in top-left, top-right, bottom-left, bottom-right order.
    pub fn walk_quadrants<V: PartitionVisitor>(&self, rect: Rect, levels: usize, visitor: &mut V) {
        if levels == 0 {
            visitor.on_leaf(&rect);
            return;
        }

        let center = rect.center();
        visitor.on_split(SplitAxis::Vertical, center.x, &rect);
        visitor.on_split(SplitAxis::Horizontal, center.y, &rect);
        for child in split_quadrants(&rect) {
            self.walk_quadrants(child, levels - 1, visitor);
        }
    }
}

fn split_coordinate(rect: &Rect, axis: SplitAxis, ratio: f64) -> f64 {
    match axis {
        SplitAxis::Vertical => rect.w.mul_add(ratio, rect.x),
        SplitAxis::Horizontal => rect.h.mul_add(ratio, rect.y),
    }
}
