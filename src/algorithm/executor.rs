use crate::{
    algorithm::commands::DrawCommand,
    algorithm::config::GenerationConfig,
    algorithm::synthesizer::GridSynthesizer,
    io::error::Result,
    math::random::RandomSelector,
    render::Rasterizer,
    spatial::geometry::Container,
};
use image::RgbImage;

/// One validated generation pass: synthesis followed by rasterization
///
/// Passes hold no shared state. Several can run side by side as long as each
/// gets its own [`RandomSelector`].
#[derive(Debug, Clone)]
pub struct WallpaperPass {
    config: GenerationConfig,
    container: Container,
}

impl WallpaperPass {
    /// Validate `config` and prepare a pass
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of range or the container is empty
    pub fn new(config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        let container = config.container()?;
        Ok(Self { config, container })
    }

    /// Configuration in physical pixels
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Container in physical pixels
    pub const fn container(&self) -> Container {
        self.container
    }

    /// Random stream implied by the configured seed
    pub fn selector(&self) -> RandomSelector {
        RandomSelector::from_optional_seed(self.config.seed)
    }

    /// Draw commands at supersampled scale
    pub fn commands(&self, rng: &mut RandomSelector) -> Vec<DrawCommand> {
        let factor = f64::from(self.config.supersample);
        let scaled = self.config.scaled_lengths(factor);
        GridSynthesizer::new(&scaled).generate(&self.container.scaled(factor), rng)
    }

    /// Run the pass with the configured seed
    ///
    /// # Errors
    ///
    /// Returns an error if the supersampled surface cannot be allocated
    pub fn run(&self) -> Result<RgbImage> {
        self.run_with(&mut self.selector())
    }

    /// Run the pass drawing randomness from `rng`
    ///
    /// # Errors
    ///
    /// Returns an error if the supersampled surface cannot be allocated
    pub fn run_with(&self, rng: &mut RandomSelector) -> Result<RgbImage> {
        let rect = self.container.rect();
        tracing::info!(
            mode = self.config.mode.label(),
            width = self.config.width,
            height = self.config.height,
            container_x = rect.x,
            container_y = rect.y,
            container_w = rect.w,
            container_h = rect.h,
            "starting pass"
        );

        let commands = self.commands(rng);
        let rasterizer = Rasterizer::new(
            self.config.width,
            self.config.height,
            self.config.supersample,
            self.config.background,
        );
        let image = rasterizer.render(&commands)?;

        tracing::info!(commands = commands.len(), "pass rendered");
        Ok(image)
    }
}
