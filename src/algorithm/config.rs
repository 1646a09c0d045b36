//! Per-pass generation parameters and their validation

use serde::Deserialize;

use crate::algorithm::commands::Color;
use crate::io::configuration::{
    COORDINATE_TOLERANCE, DEFAULT_BACKGROUND, DEFAULT_CORNER_RADIUS, DEFAULT_DOT_DIAMETER,
    DEFAULT_FILL_PROBABILITY, DEFAULT_GRID_SPACING, DEFAULT_LINE_COLOR, DEFAULT_LINE_WIDTH,
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_MERGE, DEFAULT_MIN_DEPTH, DEFAULT_MIN_SEPARATION,
    DEFAULT_PALETTE, DEFAULT_SPLIT_RATIOS, DEFAULT_SUPERSAMPLE, MAX_LATTICE_POINTS,
    MAX_PARTITION_LEVELS, MAX_SUPERSAMPLE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::geometry::Container;
use crate::spatial::partition::{AxisPolicy, RatioCycle};

/// Wallpaper variant produced by a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Evenly spaced dots starting at the container's top-left corner
    UniformDotLattice,
    /// Dots at the intersections of mirrored BSP split lines
    IrregularBspLattice,
    /// Full-span mirrored BSP split lines
    BspLines,
    /// Filled binary BSP leaves
    BinaryFill,
    /// Filled quadrant leaves
    #[default]
    QuadrantFill,
    /// Filled quadrant leaves with probabilistic merging of neighbours
    QuadrantFillWithMerge,
    /// Mid lines of every quadrant section down to the floor
    LineGrid,
}

impl Mode {
    /// Kebab-case name used on the command line and in config files
    pub const fn label(self) -> &'static str {
        match self {
            Self::UniformDotLattice => "uniform-dot-lattice",
            Self::IrregularBspLattice => "irregular-bsp-lattice",
            Self::BspLines => "bsp-lines",
            Self::BinaryFill => "binary-fill",
            Self::QuadrantFill => "quadrant-fill",
            Self::QuadrantFillWithMerge => "quadrant-fill-with-merge",
            Self::LineGrid => "line-grid",
        }
    }

    /// Whether the mode draws palette-coloured filled shapes
    pub const fn is_fill(self) -> bool {
        matches!(
            self,
            Self::BinaryFill | Self::QuadrantFill | Self::QuadrantFillWithMerge
        )
    }
}

/// Everything one generation pass needs, in physical pixels
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Height reserved for the status bar at the top
    pub bar_height: f64,
    /// Gap between the screen edge and the container
    pub outer_gap: f64,
    /// Gap between neighbouring binary BSP cells
    pub inner_gap: f64,
    /// Border kept inside each cell; bounds the smallest splittable size
    pub border_size: f64,
    /// Inset applied to every side of filled quadrant shapes
    pub padding: f64,
    /// Level at which recursion stops
    pub min_depth: usize,
    /// Level at which recursion starts
    pub max_depth: usize,
    /// Probability that a terminal cell is filled
    pub fill_probability: f64,
    /// Largest merge footprint side in unit cells
    pub max_merge: usize,
    /// Corner radius of filled shapes
    pub corner_radius: f64,
    /// Integer supersampling factor
    pub supersample: u32,
    /// Colours drawn uniformly for filled shapes
    pub palette: Vec<Color>,
    /// Background colour
    pub background: Color,
    /// Colour of lines and dots
    pub line_color: Color,
    /// Stroke width of lines
    pub line_width: f64,
    /// Diameter of dots
    pub dot_diameter: f64,
    /// Spacing of the uniform dot lattice
    pub grid_spacing: f64,
    /// Minimum distance between retained split lines
    pub min_separation: f64,
    /// Axis choice for binary BSP
    pub axis_policy: AxisPolicy,
    /// Repeating split ratios for binary BSP
    pub split_ratios: Vec<f64>,
    /// Seed for the random stream; entropy when absent
    pub seed: Option<u64>,
    /// Wallpaper variant
    pub mode: Mode,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            bar_height: 38.0,
            outer_gap: 12.0,
            inner_gap: 12.0,
            border_size: 0.0,
            padding: 9.0,
            min_depth: DEFAULT_MIN_DEPTH,
            max_depth: DEFAULT_MAX_DEPTH,
            fill_probability: DEFAULT_FILL_PROBABILITY,
            max_merge: DEFAULT_MAX_MERGE,
            corner_radius: DEFAULT_CORNER_RADIUS,
            supersample: DEFAULT_SUPERSAMPLE,
            palette: DEFAULT_PALETTE.to_vec(),
            background: DEFAULT_BACKGROUND,
            line_color: DEFAULT_LINE_COLOR,
            line_width: DEFAULT_LINE_WIDTH,
            dot_diameter: DEFAULT_DOT_DIAMETER,
            grid_spacing: DEFAULT_GRID_SPACING,
            min_separation: DEFAULT_MIN_SEPARATION,
            axis_policy: AxisPolicy::default(),
            split_ratios: DEFAULT_SPLIT_RATIOS.to_vec(),
            seed: None,
            mode: Mode::default(),
        }
    }
}

impl GenerationConfig {
    /// Number of subdivision levels between `max_depth` and the floor
    pub const fn levels(&self) -> usize {
        self.max_depth.saturating_sub(self.min_depth)
    }

    /// Ratio cycle for binary BSP walks
    pub fn ratio_cycle(&self) -> RatioCycle {
        RatioCycle::new(self.split_ratios.clone())
    }

    /// Usable area after the bar and outer gaps
    ///
    /// # Errors
    ///
    /// Returns an error if the bar and gaps leave no area
    pub fn container(&self) -> Result<Container> {
        Container::from_screen(
            f64::from(self.width),
            f64::from(self.height),
            self.bar_height,
            self.outer_gap,
        )
        .ok_or_else(|| {
            invalid_parameter(
                "outer_gap",
                &self.outer_gap,
                &format!(
                    "bar {} and gaps leave no usable area in {}x{}",
                    self.bar_height, self.width, self.height
                ),
            )
        })
    }

    /// Copy with every pixel length multiplied by `factor`
    ///
    /// Used to synthesize directly at supersampled resolution.
    #[must_use]
    pub fn scaled_lengths(&self, factor: f64) -> Self {
        Self {
            bar_height: self.bar_height * factor,
            outer_gap: self.outer_gap * factor,
            inner_gap: self.inner_gap * factor,
            border_size: self.border_size * factor,
            padding: self.padding * factor,
            corner_radius: self.corner_radius * factor,
            line_width: self.line_width * factor,
            dot_diameter: self.dot_diameter * factor,
            grid_spacing: self.grid_spacing * factor,
            min_separation: self.min_separation * factor,
            ..self.clone()
        }
    }

    /// Reject configurations that cannot produce a wallpaper
    ///
    /// Runs before any partitioning so bad input never surfaces mid-recursion.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of range
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(invalid_parameter("width", &self.width, &"must be positive"));
        }
        if self.height == 0 {
            return Err(invalid_parameter("height", &self.height, &"must be positive"));
        }

        let lengths = [
            ("bar_height", self.bar_height),
            ("outer_gap", self.outer_gap),
            ("inner_gap", self.inner_gap),
            ("border_size", self.border_size),
            ("padding", self.padding),
            ("corner_radius", self.corner_radius),
            ("line_width", self.line_width),
            ("dot_diameter", self.dot_diameter),
            ("min_separation", self.min_separation),
        ];
        for (parameter, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must be a finite non-negative length",
                ));
            }
        }

        if self.max_depth == 0 {
            return Err(invalid_parameter(
                "max_depth",
                &self.max_depth,
                &"recursion depth must be positive",
            ));
        }
        if self.min_depth >= self.max_depth {
            return Err(invalid_parameter(
                "min_depth",
                &self.min_depth,
                &format!("must be below max_depth {}", self.max_depth),
            ));
        }
        if self.levels() > MAX_PARTITION_LEVELS {
            return Err(invalid_parameter(
                "max_depth",
                &self.max_depth,
                &format!("at most {MAX_PARTITION_LEVELS} levels above min_depth"),
            ));
        }

        if !(0.0..=1.0).contains(&self.fill_probability) {
            return Err(invalid_parameter(
                "fill_probability",
                &self.fill_probability,
                &"must be within [0, 1]",
            ));
        }
        if self.max_merge == 0 {
            return Err(invalid_parameter(
                "max_merge",
                &self.max_merge,
                &"merge footprint must be at least one cell",
            ));
        }
        if self.supersample == 0 || self.supersample > MAX_SUPERSAMPLE {
            return Err(invalid_parameter(
                "supersample",
                &self.supersample,
                &format!("must be within 1..={MAX_SUPERSAMPLE}"),
            ));
        }
        if self.mode.is_fill() && self.palette.is_empty() {
            return Err(invalid_parameter(
                "palette",
                &"[]",
                &"fill modes need at least one colour",
            ));
        }
        if self.mode == Mode::UniformDotLattice
            && (!self.grid_spacing.is_finite() || self.grid_spacing <= 0.0)
        {
            return Err(invalid_parameter(
                "grid_spacing",
                &self.grid_spacing,
                &"must be a positive length",
            ));
        }
        if self
            .split_ratios
            .iter()
            .any(|r| !r.is_finite() || *r <= 0.0 || *r >= 1.0)
        {
            return Err(invalid_parameter(
                "split_ratios",
                &format!("{:?}", self.split_ratios),
                &"every ratio must lie strictly between 0 and 1",
            ));
        }

        let bounds = self.container()?.rect();
        if self.mode == Mode::UniformDotLattice {
            let points = lattice_steps(bounds.w, self.grid_spacing)
                * lattice_steps(bounds.h, self.grid_spacing);
            if points > MAX_LATTICE_POINTS as f64 {
                return Err(invalid_parameter(
                    "grid_spacing",
                    &self.grid_spacing,
                    &format!("would place {points} dots, above {MAX_LATTICE_POINTS}"),
                ));
            }
        }
        if matches!(self.mode, Mode::IrregularBspLattice | Mode::BspLines)
            && self.min_separation > bounds.shorter_side()
        {
            return Err(invalid_parameter(
                "min_separation",
                &self.min_separation,
                &format!(
                    "container edges {}x{} are closer than the separation",
                    bounds.w, bounds.h
                ),
            ));
        }
        Ok(())
    }
}

/// Dots along one side of a uniform lattice, edges included
fn lattice_steps(extent: f64, spacing: f64) -> f64 {
    (extent / spacing + COORDINATE_TOLERANCE).floor() + 1.0
}
