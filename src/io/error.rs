//! Error types and context management for wallpaper generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum WallpaperError {
    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Configuration file could not be parsed
    ConfigParse {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Supersampled surface would exceed the allocation limit
    SurfaceTooLarge {
        /// Requested surface width
        width: u64,
        /// Requested surface height
        height: u64,
        /// Maximum number of pixels allowed
        limit: u64,
    },

    /// Failed to save generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A single monitor pass failed
    Pass {
        /// Monitor name
        name: String,
        /// What went wrong inside the pass
        source: Box<Self>,
    },

    /// One or more passes failed in a multi-monitor run
    PassesFailed {
        /// Number of failed passes
        failed: usize,
        /// Number of passes attempted
        total: usize,
    },
}

impl fmt::Display for WallpaperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ConfigParse { path, source } => {
                write!(f, "Failed to parse config '{}': {source}", path.display())
            }
            Self::SurfaceTooLarge {
                width,
                height,
                limit,
            } => {
                write!(
                    f,
                    "Surface of {width}x{height} pixels exceeds the limit of {limit} pixels"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Pass { name, source } => write!(f, "Pass '{name}' failed: {source}"),
            Self::PassesFailed { failed, total } => {
                write!(f, "{failed} of {total} passes failed")
            }
        }
    }
}

impl std::error::Error for WallpaperError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigParse { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Pass { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, WallpaperError>;

/// Attaches the monitor a failure belongs to
pub trait WithPassContext<T> {
    /// Wrap any error in a [`WallpaperError::Pass`] naming the monitor
    ///
    /// # Errors
    ///
    /// Propagates the original error with the pass name applied
    fn in_pass(self, name: &str) -> Result<T>;
}

impl<T, E> WithPassContext<T> for std::result::Result<T, E>
where
    E: Into<WallpaperError>,
{
    fn in_pass(self, name: &str) -> Result<T> {
        self.map_err(|e| match e.into() {
            // Already attributed errors keep their original pass
            already @ WallpaperError::Pass { .. } => already,
            other => WallpaperError::Pass {
                name: name.to_string(),
                source: Box::new(other),
            },
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WallpaperError {
    WallpaperError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
