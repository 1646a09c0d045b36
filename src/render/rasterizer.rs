//! Applies draw commands to a surface with optional supersampling

use image::RgbImage;

use crate::algorithm::commands::{Color, DrawCommand};
use crate::io::configuration::MAX_SURFACE_PIXELS;
use crate::io::error::{Result, WallpaperError};
use crate::render::surface::{ImageSurface, Surface};

/// Renders command lists into pixel buffers of a fixed size
///
/// With a supersampling factor above one the commands must already be expressed
/// in supersampled coordinates; the surface is allocated at `size * factor` and
/// shrunk back with area averaging once every command is drawn.
#[derive(Debug, Clone, Copy)]
pub struct Rasterizer {
    width: u32,
    height: u32,
    supersample: u32,
    background: Color,
}

impl Rasterizer {
    /// Create a rasterizer for a `width` by `height` output
    pub fn new(width: u32, height: u32, supersample: u32, background: Color) -> Self {
        Self {
            width,
            height,
            supersample: supersample.max(1),
            background,
        }
    }

    /// Supersampling factor
    pub const fn supersample(&self) -> u32 {
        self.supersample
    }

    /// Size of the working surface before downsampling
    pub fn surface_dimensions(&self) -> (u64, u64) {
        let factor = u64::from(self.supersample);
        (
            u64::from(self.width) * factor,
            u64::from(self.height) * factor,
        )
    }

    /// Draw `commands` and return the final `width` by `height` buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the supersampled surface exceeds the pixel limit
    pub fn render(&self, commands: &[DrawCommand]) -> Result<RgbImage> {
        let (surface_w, surface_h) = self.surface_dimensions();
        if surface_w.saturating_mul(surface_h) > MAX_SURFACE_PIXELS {
            return Err(WallpaperError::SurfaceTooLarge {
                width: surface_w,
                height: surface_h,
                limit: MAX_SURFACE_PIXELS,
            });
        }
        let to_u32 = |v: u64| {
            u32::try_from(v).map_err(|_overflow| WallpaperError::SurfaceTooLarge {
                width: surface_w,
                height: surface_h,
                limit: MAX_SURFACE_PIXELS,
            })
        };

        let mut surface =
            ImageSurface::blank(to_u32(surface_w)?, to_u32(surface_h)?, self.background);
        apply(&mut surface, commands);

        if self.supersample > 1 {
            surface = surface.resized(self.width, self.height);
        }
        Ok(surface.into_image())
    }
}

/// Apply every command to `surface` in order
pub fn apply<S: Surface>(surface: &mut S, commands: &[DrawCommand]) {
    for command in commands {
        match *command {
            DrawCommand::FilledRect {
                rect,
                color,
                corner_radius,
            } => surface.fill_rect(&rect, corner_radius, color),
            DrawCommand::Ellipse {
                center,
                radius,
                color,
            } => surface.fill_ellipse(center, radius, color),
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => surface.draw_line(from, to, width, color),
        }
    }
}
