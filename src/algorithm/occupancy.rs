use bitvec::prelude::*;
use std::fmt;

use crate::spatial::geometry::{Container, Rect};

/// Grid position of a terminal unit cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellKey {
    /// Column, counted from the container's left edge
    pub col: usize,
    /// Row, counted from the container's top edge
    pub row: usize,
}

impl CellKey {
    /// Create a cell key
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Regular lattice of unit cells at the terminal partition depth
///
/// Quadrant walks produce `2^levels` cells per side, each exactly the same size,
/// so a leaf rectangle maps to a cell key by rounding its offset from the origin.
#[derive(Debug, Clone, Copy)]
pub struct CellLattice {
    origin: Rect,
    unit_w: f64,
    unit_h: f64,
    cols: usize,
    rows: usize,
}

impl CellLattice {
    /// Lattice of `2^levels` by `2^levels` cells over the container
    pub fn for_quadrants(container: &Container, levels: usize) -> Self {
        let per_side = 1usize << levels.min(usize::BITS as usize - 1);
        let origin = container.rect();
        Self {
            origin,
            unit_w: origin.w / per_side as f64,
            unit_h: origin.h / per_side as f64,
            cols: per_side,
            rows: per_side,
        }
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Cell key of a terminal leaf rectangle
    pub fn key_for(&self, leaf: &Rect) -> CellKey {
        let col = if self.unit_w > 0.0 {
            ((leaf.x - self.origin.x) / self.unit_w).round().max(0.0) as usize
        } else {
            0
        };
        let row = if self.unit_h > 0.0 {
            ((leaf.y - self.origin.y) / self.unit_h).round().max(0.0) as usize
        } else {
            0
        };
        CellKey::new(col.min(self.cols - 1), row.min(self.rows - 1))
    }

    /// Rectangle covered by a `span_w` by `span_h` footprint starting at `origin`
    pub fn footprint_rect(&self, origin: CellKey, span_w: usize, span_h: usize) -> Rect {
        Rect::new(
            (origin.col as f64).mul_add(self.unit_w, self.origin.x),
            (origin.row as f64).mul_add(self.unit_h, self.origin.y),
            span_w as f64 * self.unit_w,
            span_h as f64 * self.unit_h,
        )
    }
}

/// Claimed-cell set for merge-enabled fill passes
///
/// One tracker belongs to exactly one generation pass. A cell enters the set
/// either by being filled directly or by being swallowed into a neighbour's
/// merge footprint; once claimed it is never filled again.
#[derive(Clone, Debug)]
pub struct OccupancyTracker {
    claimed: BitVec,
    cols: usize,
    rows: usize,
}

impl OccupancyTracker {
    /// Create a tracker with no claimed cells over a `cols` by `rows` grid
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            claimed: bitvec![0; cols * rows],
            cols,
            rows,
        }
    }

    /// Tracker sized to a cell lattice
    pub fn for_lattice(lattice: &CellLattice) -> Self {
        Self::new(lattice.cols(), lattice.rows())
    }

    const fn bit_index(&self, key: CellKey) -> Option<usize> {
        if key.col < self.cols && key.row < self.rows {
            Some(key.row * self.cols + key.col)
        } else {
            None
        }
    }

    /// Test whether a cell has been claimed
    ///
    /// Cells outside the grid count as claimed so they are never drawn into.
    pub fn is_claimed(&self, key: CellKey) -> bool {
        self.bit_index(key)
            .is_none_or(|i| self.claimed.get(i).as_deref() == Some(&true))
    }

    /// Try to claim a `merge_w` by `merge_h` footprint anchored at `origin`
    ///
    /// Rejected when the origin is already claimed, when the footprint runs past
    /// the grid's far edges, or when any covered cell is already claimed. On
    /// acceptance every covered cell is claimed at once. Zero spans count as one.
    pub fn try_claim(&mut self, origin: CellKey, merge_w: usize, merge_h: usize) -> bool {
        if self.is_claimed(origin) {
            return false;
        }

        let merge_w = merge_w.max(1);
        let merge_h = merge_h.max(1);
        if origin.col + merge_w > self.cols || origin.row + merge_h > self.rows {
            return false;
        }

        let footprint = move || {
            (origin.row..origin.row + merge_h).flat_map(move |row| {
                (origin.col..origin.col + merge_w).map(move |col| CellKey::new(col, row))
            })
        };

        if footprint().any(|key| self.is_claimed(key)) {
            return false;
        }

        for key in footprint() {
            if let Some(i) = self.bit_index(key) {
                self.claimed.set(i, true);
            }
        }
        true
    }

    /// Count claimed cells
    pub fn claimed_count(&self) -> usize {
        self.claimed.count_ones()
    }
}

impl fmt::Display for OccupancyTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OccupancyTracker({}/{} cells claimed)",
            self.claimed_count(),
            self.cols * self.rows
        )
    }
}
