//! Procedural wallpapers aligned to a tiling window manager's layout
//!
//! A container rectangle (the screen minus status bar and outer gaps) is
//! recursively partitioned into quadrants or binary halves. The partition drives
//! dot lattices, line grids, and filled shapes, which are rasterized with
//! optional supersampling.

#![forbid(unsafe_code)]

/// Partition-driven synthesis of draw commands and per-pass orchestration
pub mod algorithm;
/// Configuration, settings files, CLI, export and error handling
pub mod io;
/// Mathematical utilities for seeded randomness
pub mod math;
/// Surface drawing and supersampled rasterization
pub mod render;
/// Geometry primitives and recursive partitioning
pub mod spatial;

pub use io::error::{Result, WallpaperError};
