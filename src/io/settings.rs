//! Monitor descriptions and the optional TOML settings file
//!
//! ```toml
//! [[monitor]]
//! name = "DP-1"
//! width = 3840
//! height = 2160
//! scale = 1.5
//! bar_logical_height = 38
//! gap_logical = 12
//!
//! [style]
//! mode = "quadrant-fill-with-merge"
//! palette = [[240, 113, 120], [130, 170, 255]]
//! ```
//!
//! Every `[style]` field has a default, and the monitor list falls back to
//! [`default_monitors`] when absent. Style lengths are logical pixels and get
//! multiplied by each monitor's scale.

use serde::Deserialize;
use std::path::Path;

use crate::algorithm::commands::Color;
use crate::algorithm::config::{GenerationConfig, Mode};
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_CORNER_RADIUS, DEFAULT_DOT_DIAMETER, DEFAULT_FILL_PROBABILITY,
    DEFAULT_GRID_SPACING, DEFAULT_LINE_COLOR, DEFAULT_LINE_WIDTH, DEFAULT_MAX_DEPTH,
    DEFAULT_MAX_MERGE, DEFAULT_MIN_DEPTH, DEFAULT_MIN_SEPARATION, DEFAULT_PALETTE,
    DEFAULT_SPLIT_RATIOS, DEFAULT_SUPERSAMPLE, FILL_PADDING_RATIO,
};
use crate::io::error::{Result, WallpaperError};
use crate::spatial::partition::AxisPolicy;

/// One display to generate a wallpaper for
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Monitor {
    /// Output name, used in the wallpaper filename
    pub name: String,
    /// Physical width in pixels
    pub width: u32,
    /// Physical height in pixels
    pub height: u32,
    /// Logical to physical pixel ratio
    pub scale: f64,
    /// Status bar height in logical pixels
    pub bar_logical_height: f64,
    /// Tiling gap in logical pixels
    pub gap_logical: f64,
}

impl Monitor {
    /// Physical bar height, truncated to whole pixels
    pub fn bar_px(&self) -> f64 {
        (self.bar_logical_height * self.scale).floor()
    }

    /// Physical gap, truncated to whole pixels
    pub fn gap_px(&self) -> f64 {
        (self.gap_logical * self.scale).floor()
    }

    /// Per-side inset of filled shapes
    pub fn fill_padding(&self) -> f64 {
        (self.gap_px() * FILL_PADDING_RATIO).floor()
    }

    /// Generation parameters for this monitor under `style`
    pub fn generation_config(&self, style: &StyleConfig, seed: Option<u64>) -> GenerationConfig {
        let scale = self.scale;
        GenerationConfig {
            width: self.width,
            height: self.height,
            bar_height: self.bar_px(),
            outer_gap: self.gap_px(),
            inner_gap: self.gap_px(),
            border_size: style.border_size * scale,
            padding: self.fill_padding(),
            min_depth: style.min_depth,
            max_depth: style.max_depth,
            fill_probability: style.fill_probability,
            max_merge: style.max_merge,
            corner_radius: style.corner_radius * scale,
            supersample: style.supersample,
            palette: style.palette.clone(),
            background: style.background,
            line_color: style.line_color,
            line_width: style.line_width * scale,
            dot_diameter: style.dot_diameter * scale,
            grid_spacing: style.grid_spacing * scale,
            min_separation: style.min_separation * scale,
            axis_policy: style.axis_policy,
            split_ratios: style.split_ratios.clone(),
            seed,
            mode: style.mode,
        }
    }
}

/// The built-in display set: a 4K panel at 1.5x and a 1920x1200 laptop panel
pub fn default_monitors() -> Vec<Monitor> {
    vec![
        Monitor {
            name: "DP-1".to_string(),
            width: 3840,
            height: 2160,
            scale: 1.5,
            bar_logical_height: 38.0,
            gap_logical: 12.0,
        },
        Monitor {
            name: "eDP-1".to_string(),
            width: 1920,
            height: 1200,
            scale: 1.0,
            bar_logical_height: 38.0,
            gap_logical: 12.0,
        },
    ]
}

/// Shared look of every generated wallpaper
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Wallpaper variant
    pub mode: Mode,
    /// Level at which recursion stops
    pub min_depth: usize,
    /// Level at which recursion starts
    pub max_depth: usize,
    /// Probability that a terminal cell is filled
    pub fill_probability: f64,
    /// Largest merge footprint side in unit cells
    pub max_merge: usize,
    /// Corner radius of filled shapes, logical pixels
    pub corner_radius: f64,
    /// Integer supersampling factor
    pub supersample: u32,
    /// Fill colours
    pub palette: Vec<Color>,
    /// Background colour
    pub background: Color,
    /// Colour of lines and dots
    pub line_color: Color,
    /// Stroke width, logical pixels
    pub line_width: f64,
    /// Dot diameter, logical pixels
    pub dot_diameter: f64,
    /// Uniform lattice spacing, logical pixels
    pub grid_spacing: f64,
    /// Minimum distance between retained split lines, logical pixels
    pub min_separation: f64,
    /// Border kept inside binary BSP cells, logical pixels
    pub border_size: f64,
    /// Axis choice for binary BSP
    pub axis_policy: AxisPolicy,
    /// Repeating split ratios for binary BSP
    pub split_ratios: Vec<f64>,
    /// Global seed; passes derive their own from it
    pub seed: Option<u64>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
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
            border_size: 0.0,
            axis_policy: AxisPolicy::default(),
            split_ratios: DEFAULT_SPLIT_RATIOS.to_vec(),
            seed: None,
        }
    }
}

/// Contents of a settings file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WallpaperSettings {
    /// Displays to generate for
    #[serde(rename = "monitor", default = "default_monitors")]
    pub monitors: Vec<Monitor>,
    /// Shared style
    #[serde(default)]
    pub style: StyleConfig,
}

impl Default for WallpaperSettings {
    fn default() -> Self {
        Self {
            monitors: default_monitors(),
            style: StyleConfig::default(),
        }
    }
}

impl WallpaperSettings {
    /// Parse settings from TOML text; `origin` names the source in errors
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid settings TOML, including colour
    /// components outside 0-255
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| WallpaperError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load settings from a TOML file on disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| WallpaperError::FileSystem {
            path: path.to_path_buf(),
            operation: "read settings",
            source,
        })?;
        Self::from_toml_str(&text, path)
    }
}
