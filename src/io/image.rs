//! PNG export of rendered wallpapers

use image::RgbImage;
use std::path::{Path, PathBuf};

use crate::io::configuration::OUTPUT_PREFIX;
use crate::io::error::{Result, WallpaperError};

/// Filename for a monitor's wallpaper inside `directory`
pub fn wallpaper_path(directory: &Path, monitor_name: &str) -> PathBuf {
    let sanitized: String = monitor_name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    directory.join(format!("{OUTPUT_PREFIX}{sanitized}.png"))
}

/// Save an image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_png(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| WallpaperError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| WallpaperError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(path = %output_path.display(), "saved wallpaper");
    Ok(())
}
