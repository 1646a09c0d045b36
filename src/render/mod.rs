//! Rasterization of draw commands

/// Supersampled command application and downsampling
pub mod rasterizer;
/// Drawing surface abstraction and its `image` implementation
pub mod surface;

pub use rasterizer::Rasterizer;
