//! Mirrored split-line accumulation for the BSP line and lattice modes
//!
//! Every recorded coordinate is inserted together with its reflection about the
//! container center, which makes the final lattice bilaterally symmetric no
//! matter how lopsided the ratio cycle is.

use crate::io::configuration::COORDINATE_TOLERANCE;
use crate::spatial::geometry::{Container, Point, Rect};
use crate::spatial::partition::{PartitionVisitor, SplitAxis};

/// Retained split lines after filtering
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineSet {
    /// Sorted vertical line x coordinates
    pub xs: Vec<f64>,
    /// Sorted horizontal line y coordinates
    pub ys: Vec<f64>,
}

impl LineSet {
    /// Cartesian product of retained coordinates, row by row
    pub fn intersections(&self) -> impl Iterator<Item = Point> + '_ {
        self.ys
            .iter()
            .flat_map(move |&y| self.xs.iter().map(move |&x| Point::new(x, y)))
    }
}

/// Accumulates unique split coordinates with their mirror images
#[derive(Debug, Clone)]
pub struct SymmetricLineCollector {
    bounds: Rect,
    min_separation: f64,
    verticals: Vec<f64>,
    horizontals: Vec<f64>,
}

impl SymmetricLineCollector {
    /// Create a collector seeded with the container's four edges
    pub fn new(container: &Container, min_separation: f64) -> Self {
        let bounds = container.rect();
        Self {
            bounds,
            min_separation: min_separation.max(0.0),
            verticals: vec![bounds.x, bounds.x1()],
            horizontals: vec![bounds.y, bounds.y1()],
        }
    }

    /// Record a vertical split line and its horizontal mirror
    pub fn record_vertical(&mut self, x: f64) {
        insert_mirrored(&mut self.verticals, x, self.bounds.x, self.bounds.x1());
    }

    /// Record a horizontal split line and its vertical mirror
    pub fn record_horizontal(&mut self, y: f64) {
        insert_mirrored(&mut self.horizontals, y, self.bounds.y, self.bounds.y1());
    }

    /// Sorted, deduplicated and separation-filtered line coordinates
    pub fn lines(&self) -> LineSet {
        LineSet {
            xs: symmetric_filter(
                &self.verticals,
                self.bounds.x,
                self.bounds.x1(),
                self.min_separation,
            ),
            ys: symmetric_filter(
                &self.horizontals,
                self.bounds.y,
                self.bounds.y1(),
                self.min_separation,
            ),
        }
    }
}

impl PartitionVisitor for SymmetricLineCollector {
    fn on_split(&mut self, axis: SplitAxis, coordinate: f64, _parent: &Rect) {
        match axis {
            SplitAxis::Vertical => self.record_vertical(coordinate),
            SplitAxis::Horizontal => self.record_horizontal(coordinate),
        }
    }
}

fn within(value: f64, start: f64, end: f64) -> bool {
    value >= start - COORDINATE_TOLERANCE && value <= end + COORDINATE_TOLERANCE
}

// Out-of-range values are dropped rather than clamped; clamping would stack
// false duplicates on the container edge.
fn insert_mirrored(values: &mut Vec<f64>, value: f64, start: f64, end: f64) {
    if within(value, start, end) {
        values.push(value);
    }
    let mirror = start + end - value;
    if within(mirror, start, end) {
        values.push(mirror);
    }
}

/// Sort, deduplicate exact repeats, and keep values at least `min_separation` apart
///
/// Greedy in ascending order: a value survives only if it is far enough from the
/// previously kept one. The first value is always kept.
pub fn filter_min_separation(values: &[f64], min_separation: f64) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();

    let mut kept: Vec<f64> = Vec::with_capacity(sorted.len());
    for value in sorted {
        match kept.last() {
            Some(&last) if value - last < min_separation => {}
            _ => kept.push(value),
        }
    }
    kept
}

/// Separation filter that keeps the result symmetric about the span center
///
/// The lower half is filtered greedily and reflected onto the upper half. If the
/// innermost kept value sits too close to its own reflection it is dropped, and
/// the exact center takes its place when present and far enough from the rest.
///
/// The span's own endpoints always survive, so a span narrower than
/// `min_separation` keeps both edges closer together than the minimum.
/// [`GenerationConfig::validate`](crate::algorithm::config::GenerationConfig::validate)
/// rejects such containers for the line modes.
pub fn symmetric_filter(values: &[f64], start: f64, end: f64, min_separation: f64) -> Vec<f64> {
    let center = (start + end) / 2.0;
    let lower: Vec<f64> = values
        .iter()
        .copied()
        .filter(|&v| within(v, start, end) && v <= center)
        .collect();
    let has_center = lower
        .iter()
        .any(|&v| (v - center).abs() <= COORDINATE_TOLERANCE);

    let mut kept = filter_min_separation(&lower, min_separation);

    if let Some(&innermost) = kept.last() {
        let across = 2.0 * (center - innermost);
        if across > COORDINATE_TOLERANCE && across < min_separation && kept.len() > 1 {
            kept.pop();
            let reaches_center = kept
                .last()
                .is_none_or(|&last| center - last >= min_separation);
            if has_center && reaches_center {
                kept.push(center);
            }
        }
    }

    let mut result = kept.clone();
    for &value in kept.iter().rev() {
        if center - value > COORDINATE_TOLERANCE {
            result.push(start + end - value);
        }
    }
    result
}
