//! Mode dispatch from a container to an ordered list of draw commands
//!
//! Synthesis is pure: it never touches a drawing surface, and all randomness comes
//! from the injected [`RandomSelector`]. For a given seed the command list is
//! identical on every run.
//!
//! Random draws per filled cell happen in a fixed order (fill decision, colour,
//! merge width, merge height), and quadrant leaves are visited depth-first in
//! top-left, top-right, bottom-left, bottom-right order. Changing either changes
//! which cells win contested merges.

use crate::algorithm::commands::{Color, DrawCommand};
use crate::algorithm::config::{GenerationConfig, Mode};
use crate::algorithm::occupancy::{CellLattice, OccupancyTracker};
use crate::algorithm::symmetry::{LineSet, SymmetricLineCollector};
use crate::io::configuration::COORDINATE_TOLERANCE;
use crate::math::random::RandomSelector;
use crate::spatial::geometry::{Container, Point, Rect};
use crate::spatial::partition::{AxisPolicy, PartitionVisitor, Partitioner, SplitAxis};

/// Collects terminal leaves in walk order
#[derive(Debug, Default)]
struct LeafCollector {
    leaves: Vec<Rect>,
}

impl PartitionVisitor for LeafCollector {
    fn on_leaf(&mut self, rect: &Rect) {
        self.leaves.push(*rect);
    }
}

/// Turns every split into a line spanning its parent section
struct SectionLines {
    width: f64,
    color: Color,
    commands: Vec<DrawCommand>,
}

impl PartitionVisitor for SectionLines {
    fn on_split(&mut self, axis: SplitAxis, coordinate: f64, parent: &Rect) {
        let (from, to) = match axis {
            SplitAxis::Vertical => (
                Point::new(coordinate, parent.y),
                Point::new(coordinate, parent.y1()),
            ),
            SplitAxis::Horizontal => (
                Point::new(parent.x, coordinate),
                Point::new(parent.x1(), coordinate),
            ),
        };
        self.commands
            .extend(DrawCommand::line(from, to, self.width, self.color));
    }
}

/// Drives partitioning and collection for one generation pass
pub struct GridSynthesizer<'a> {
    config: &'a GenerationConfig,
}

impl<'a> GridSynthesizer<'a> {
    /// Create a synthesizer for an already validated configuration
    pub const fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }

    /// Produce the draw commands for `container` in the configured mode
    pub fn generate(&self, container: &Container, rng: &mut RandomSelector) -> Vec<DrawCommand> {
        let commands = match self.config.mode {
            Mode::UniformDotLattice => self.uniform_dot_lattice(container),
            Mode::IrregularBspLattice => self.lattice_dots(&self.symmetric_lines(container)),
            Mode::BspLines => self.full_span_lines(container, &self.symmetric_lines(container)),
            Mode::BinaryFill => self.binary_fill(container, rng),
            Mode::QuadrantFill => self.quadrant_fill(container, rng),
            Mode::QuadrantFillWithMerge => self.quadrant_fill_with_merge(container, rng),
            Mode::LineGrid => self.line_grid(container),
        };

        tracing::debug!(
            mode = self.config.mode.label(),
            commands = commands.len(),
            "synthesized draw commands"
        );
        commands
    }

    /// Mirrored, separation-filtered BSP split lines over `container`
    pub fn symmetric_lines(&self, container: &Container) -> LineSet {
        let mut partitioner = Partitioner::new(
            self.config.inner_gap,
            self.config.border_size,
            self.config.axis_policy,
            self.config.ratio_cycle(),
        );
        let mut collector = SymmetricLineCollector::new(container, self.config.min_separation);
        partitioner.walk_binary(container.rect(), self.config.levels(), &mut collector);
        collector.lines()
    }

    fn uniform_dot_lattice(&self, container: &Container) -> Vec<DrawCommand> {
        let bounds = container.rect();
        let spacing = self.config.grid_spacing;
        let steps = |extent: f64| (extent / spacing + COORDINATE_TOLERANCE).floor() as usize;
        let radius = self.config.dot_diameter / 2.0;

        let mut commands = Vec::new();
        for row in 0..=steps(bounds.h) {
            let y = (row as f64).mul_add(spacing, bounds.y);
            for col in 0..=steps(bounds.w) {
                let x = (col as f64).mul_add(spacing, bounds.x);
                commands.extend(DrawCommand::ellipse(
                    Point::new(x, y),
                    radius,
                    self.config.line_color,
                ));
            }
        }
        commands
    }

    fn lattice_dots(&self, lines: &LineSet) -> Vec<DrawCommand> {
        let radius = self.config.dot_diameter / 2.0;
        lines
            .intersections()
            .filter_map(|center| DrawCommand::ellipse(center, radius, self.config.line_color))
            .collect()
    }

    fn full_span_lines(&self, container: &Container, lines: &LineSet) -> Vec<DrawCommand> {
        let bounds = container.rect();
        let width = self.config.line_width;
        let color = self.config.line_color;

        let verticals = lines.xs.iter().filter_map(|&x| {
            DrawCommand::line(
                Point::new(x, bounds.y),
                Point::new(x, bounds.y1()),
                width,
                color,
            )
        });
        let horizontals = lines.ys.iter().filter_map(|&y| {
            DrawCommand::line(
                Point::new(bounds.x, y),
                Point::new(bounds.x1(), y),
                width,
                color,
            )
        });
        verticals.chain(horizontals).collect()
    }

    fn line_grid(&self, container: &Container) -> Vec<DrawCommand> {
        let partitioner = Partitioner::new(0.0, 0.0, AxisPolicy::Both, self.config.ratio_cycle());
        let mut lines = SectionLines {
            width: self.config.line_width,
            color: self.config.line_color,
            commands: Vec::new(),
        };
        partitioner.walk_quadrants(container.rect(), self.config.levels(), &mut lines);
        lines.commands
    }

    // Fill decision first, colour second; a declined cell draws no colour
    fn fill_color(&self, rng: &mut RandomSelector) -> Option<Color> {
        if !rng.chance(self.config.fill_probability) {
            return None;
        }
        rng.choose(&self.config.palette).copied()
    }

    fn binary_fill(&self, container: &Container, rng: &mut RandomSelector) -> Vec<DrawCommand> {
        let mut partitioner = Partitioner::new(
            self.config.inner_gap,
            self.config.border_size,
            self.config.axis_policy,
            self.config.ratio_cycle(),
        );
        let mut leaves = LeafCollector::default();
        partitioner.walk_binary(container.rect(), self.config.levels(), &mut leaves);

        let mut commands = Vec::new();
        for leaf in leaves.leaves {
            if let Some(color) = self.fill_color(rng) {
                commands.extend(DrawCommand::filled_rect(
                    leaf.inset(self.config.border_size),
                    color,
                    self.config.corner_radius,
                ));
            }
        }
        commands
    }

    fn quadrant_leaves(&self, container: &Container) -> Vec<Rect> {
        let partitioner = Partitioner::new(0.0, 0.0, AxisPolicy::Both, self.config.ratio_cycle());
        let mut leaves = LeafCollector::default();
        partitioner.walk_quadrants(container.rect(), self.config.levels(), &mut leaves);
        leaves.leaves
    }

    fn quadrant_fill(&self, container: &Container, rng: &mut RandomSelector) -> Vec<DrawCommand> {
        let mut commands = Vec::new();
        for leaf in self.quadrant_leaves(container) {
            if let Some(color) = self.fill_color(rng) {
                commands.extend(DrawCommand::filled_rect(
                    leaf.inset(self.config.padding),
                    color,
                    self.config.corner_radius,
                ));
            }
        }
        commands
    }

    fn quadrant_fill_with_merge(
        &self,
        container: &Container,
        rng: &mut RandomSelector,
    ) -> Vec<DrawCommand> {
        let lattice = CellLattice::for_quadrants(container, self.config.levels());
        let mut tracker = OccupancyTracker::for_lattice(&lattice);

        let mut commands = Vec::new();
        for leaf in self.quadrant_leaves(container) {
            let key = lattice.key_for(&leaf);
            // Swallowed by an earlier merge
            if tracker.is_claimed(key) {
                continue;
            }
            let Some(color) = self.fill_color(rng) else {
                continue;
            };

            let merge_w = rng.inclusive(1, self.config.max_merge);
            let merge_h = rng.inclusive(1, self.config.max_merge);
            let span = if tracker.try_claim(key, merge_w, merge_h) {
                Some((merge_w, merge_h))
            } else if (merge_w, merge_h) != (1, 1) && tracker.try_claim(key, 1, 1) {
                Some((1, 1))
            } else {
                None
            };

            if let Some((span_w, span_h)) = span {
                let footprint = lattice.footprint_rect(key, span_w, span_h);
                commands.extend(DrawCommand::filled_rect(
                    footprint.inset(self.config.padding),
                    color,
                    self.config.corner_radius,
                ));
            }
        }

        tracing::trace!(%tracker, "merge pass complete");
        commands
    }
}
