//! Command-line interface for generating one wallpaper per monitor

use crate::algorithm::config::Mode;
use crate::algorithm::executor::WallpaperPass;
use crate::io::configuration::DEFAULT_SEED;
use crate::io::error::{Result, WallpaperError, WithPassContext};
use crate::io::image::{export_png, wallpaper_path};
use crate::io::progress::ProgressManager;
use crate::io::settings::{Monitor, WallpaperSettings};
use crate::math::random::derive_pass_seed;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tilewall")]
#[command(
    author,
    version,
    about = "Generate wallpapers aligned to tiling window manager gaps"
)]
/// Command-line arguments for the wallpaper generator
pub struct Cli {
    /// TOML settings file with monitors and style
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory that receives the generated wallpapers
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Wallpaper variant, overriding the settings file
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Random seed for reproducible generation
    #[arg(short, long, conflicts_with = "random")]
    pub seed: Option<u64>,

    /// Draw randomness from the operating system instead of a seed
    #[arg(short, long)]
    pub random: bool,

    /// Supersampling factor
    #[arg(short = 'S', long)]
    pub supersample: Option<u32>,

    /// Level at which recursion stops
    #[arg(long)]
    pub min_depth: Option<usize>,

    /// Level at which recursion starts
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Regenerate wallpapers even if the output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Global seed after applying `--seed`, `--random` and the settings file
    pub fn resolve_seed(&self, settings: &WallpaperSettings) -> Option<u64> {
        if self.random {
            return None;
        }
        Some(self.seed.or(settings.style.seed).unwrap_or(DEFAULT_SEED))
    }

    /// Apply command-line overrides to loaded settings
    pub fn apply_overrides(&self, settings: &mut WallpaperSettings) {
        let style = &mut settings.style;
        if let Some(mode) = self.mode {
            style.mode = mode;
        }
        if let Some(factor) = self.supersample {
            style.supersample = factor;
        }
        if let Some(depth) = self.min_depth {
            style.min_depth = depth;
        }
        if let Some(depth) = self.max_depth {
            style.max_depth = depth;
        }
    }
}

/// Runs one generation pass per configured monitor
pub struct WallpaperRunner {
    cli: Cli,
}

impl WallpaperRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Settings from the file named on the command line, or built-in defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be read or parsed
    pub fn load_settings(&self) -> Result<WallpaperSettings> {
        let mut settings = match &self.cli.config {
            Some(path) => WallpaperSettings::from_toml_file(path)?,
            None => WallpaperSettings::default(),
        };
        self.cli.apply_overrides(&mut settings);
        Ok(settings)
    }

    /// Generate every wallpaper
    ///
    /// A failing pass is logged and does not stop the others.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be loaded or any pass failed
    pub fn process(&self) -> Result<()> {
        let settings = self.load_settings()?;
        let seed = self.cli.resolve_seed(&settings);
        let total = settings.monitors.len();

        let mut progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(total));
        let mut failed = 0;

        for (index, monitor) in settings.monitors.iter().enumerate() {
            if let Some(ref pm) = progress {
                pm.start_pass(&monitor.name);
            }

            let pass_seed = seed.map(|s| derive_pass_seed(s, index));
            let outcome = self.process_monitor(monitor, &settings, pass_seed);
            if let Err(ref error) = outcome {
                failed += 1;
                tracing::error!(monitor = %monitor.name, %error, "pass failed");
            }

            if let Some(ref mut pm) = progress {
                pm.complete_pass(outcome.is_ok());
            }
        }

        if let Some(ref pm) = progress {
            pm.finish();
        }

        if failed > 0 {
            return Err(WallpaperError::PassesFailed { failed, total });
        }
        Ok(())
    }

    fn process_monitor(
        &self,
        monitor: &Monitor,
        settings: &WallpaperSettings,
        seed: Option<u64>,
    ) -> Result<()> {
        let output_path = wallpaper_path(&self.cli.output, &monitor.name);
        if self.cli.skip_existing() && output_path.exists() {
            tracing::info!(
                monitor = %monitor.name,
                path = %output_path.display(),
                "skipping, output exists"
            );
            return Ok(());
        }

        let config = monitor.generation_config(&settings.style, seed);
        let pass = WallpaperPass::new(config).in_pass(&monitor.name)?;
        let image = pass.run().in_pass(&monitor.name)?;
        export_png(&image, &output_path).in_pass(&monitor.name)
    }
}
