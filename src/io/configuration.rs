//! Generation constants and runtime configuration defaults

// Partition behaviour
/// Repeating split ratios used by binary BSP modes
pub const DEFAULT_SPLIT_RATIOS: [f64; 7] = [0.5, 0.618, 0.382, 0.55, 0.45, 0.667, 0.333];

/// Starting recursion level for partition walks
pub const DEFAULT_MAX_DEPTH: usize = 6;
/// Level at which partition walks stop
pub const DEFAULT_MIN_DEPTH: usize = 2;
/// Most subdivision levels a single pass may request
pub const MAX_PARTITION_LEVELS: usize = 10;

// Fill modes
/// Probability that a terminal cell is filled
pub const DEFAULT_FILL_PROBABILITY: f64 = 0.7;
/// Corner radius of filled shapes in physical pixels
pub const DEFAULT_CORNER_RADIUS: f64 = 20.0;
/// Largest merge footprint side, in unit cells
pub const DEFAULT_MAX_MERGE: usize = 2;
/// Fraction of the physical gap used as per-side shape padding
pub const FILL_PADDING_RATIO: f64 = 0.8;

// Line and dot modes
/// Width of grid lines in physical pixels
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
/// Diameter of lattice dots in physical pixels
pub const DEFAULT_DOT_DIAMETER: f64 = 2.0;
/// Spacing of the uniform dot lattice in physical pixels
pub const DEFAULT_GRID_SPACING: f64 = 12.0;
/// Minimum distance between neighbouring retained split lines
pub const DEFAULT_MIN_SEPARATION: f64 = 24.0;

// Colours
/// Palette used by fill modes
pub const DEFAULT_PALETTE: [[u8; 3]; 6] = [
    [240, 113, 120],
    [195, 232, 141],
    [255, 203, 107],
    [130, 170, 255],
    [199, 146, 234],
    [137, 221, 255],
];
/// Background colour of every wallpaper
pub const DEFAULT_BACKGROUND: [u8; 3] = [0, 0, 0];
/// Colour of lines and dots
pub const DEFAULT_LINE_COLOR: [u8; 3] = [80, 80, 80];

// Rendering
/// Supersampling factor applied before downsampling
pub const DEFAULT_SUPERSAMPLE: u32 = 2;
/// Supersampling factor above which rendering is refused
pub const MAX_SUPERSAMPLE: u32 = 8;

// Safety limit to prevent excessive memory allocation
/// Maximum number of dots a uniform lattice may place
pub const MAX_LATTICE_POINTS: u64 = 4_000_000;
/// Maximum number of pixels in a supersampled surface
pub const MAX_SURFACE_PIXELS: u64 = 16_384 * 16_384;

/// Slack allowed when comparing floating point coordinates
pub const COORDINATE_TOLERANCE: f64 = 1e-6;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Prefix of generated wallpaper filenames
pub const OUTPUT_PREFIX: &str = "wallpaper_";
/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "tilewall=info";
