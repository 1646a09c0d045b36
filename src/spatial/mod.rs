//! Spatial data structures and partitioning
//!
//! This module contains spatial-related functionality including:
//! - Rectangle, point and container geometry
//! - Binary and quadrant subdivision with gap handling

/// Rectangle, point and container value types
pub mod geometry;
/// Recursive binary and quadrant partitioning
pub mod partition;

pub use geometry::{Container, Point, Rect};
