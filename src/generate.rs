//! Image generation pipeline.

use std::path::PathBuf;

use image::RgbImage;
use indicatif::{ProgressBar, ProgressStyle};

use crate::color::ALL_COLORS_COUNT;
use crate::error::{Error, Result};
use crate::fill::{
    ColorFeed, FillStrategy, MandalaFill, Mode, OrnamentFill, PatternFill, PatternStyle,
    RandomFill, TrivialFill,
};
use crate::image::save_image;

/// Configuration for the image generator.
#[derive(Debug, Clone)]
pub struct Config {
    /// Image width in pixels.
    pub width: u32,

    /// Image height in pixels.
    pub height: u32,

    /// Output file path.
    pub output: PathBuf,

    /// Fill strategy.
    pub mode: Mode,

    /// Random seed for reproducibility. None for random.
    pub seed: Option<u64>,

    /// Traversal style for pattern mode.
    pub pattern_style: PatternStyle,

    /// Block size for the blocks pattern.
    pub block_size: u32,

    /// Number of mandala arms.
    pub arms: u32,

    /// Mandala center. None for the image center.
    pub center: Option<(u32, u32)>,

    /// Ornament recursion depth.
    pub ornament_depth: u32,

    /// Ornament minimum region size.
    pub ornament_min_size: u32,

    /// Output JPEG quality (1-100).
    pub quality: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 4096,
            height: 4096,
            output: PathBuf::from("allrgb.png"),
            mode: Mode::Trivial,
            seed: None,
            pattern_style: PatternStyle::Snake,
            block_size: 64,
            arms: 8,
            center: None,
            ornament_depth: 5,
            ornament_min_size: 16,
            quality: 95,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions cannot hold every color or any
    /// parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::UnsupportedDimensions {
                width: self.width,
                height: self.height,
                reason: "width and height must be positive".to_string(),
            });
        }

        let pixel_count = u64::from(self.width) * u64::from(self.height);
        if pixel_count < ALL_COLORS_COUNT as u64 {
            return Err(Error::UnsupportedDimensions {
                width: self.width,
                height: self.height,
                reason: format!("needs at least {ALL_COLORS_COUNT} pixels (got {pixel_count})"),
            });
        }

        if !(1..=100).contains(&self.quality) {
            return Err(Error::InvalidParameter {
                name: "quality".to_string(),
                reason: "must be between 1 and 100".to_string(),
            });
        }

        Ok(())
    }

    fn strategy(&self) -> Box<dyn FillStrategy> {
        match self.mode {
            Mode::Trivial => Box::new(TrivialFill),
            Mode::Random => Box::new(RandomFill::new(self.seed)),
            Mode::Pattern => Box::new(PatternFill::new(self.pattern_style, self.block_size)),
            Mode::Mandala => Box::new(MandalaFill::new(self.arms, self.center)),
            Mode::Ornament => Box::new(OrnamentFill::new(
                self.ornament_depth,
                self.ornament_min_size,
            )),
        }
    }
}

/// Generator for all-RGB images.
pub struct Generator {
    config: Config,
}

impl Generator {
    /// Create a generator with a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Fill the image and write it to the configured output path.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file cannot be written.
    pub fn run(&self) -> Result<()> {
        let config = &self.config;

        tracing::info!(
            "Generating {}x{} image in {:?} mode",
            config.width,
            config.height,
            config.mode
        );

        let mut image = RgbImage::new(config.width, config.height);

        let total = u64::from(config.width) * u64::from(config.height);
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} Filling [{bar:40.cyan/blue}] {pos}/{len}")
                .expect("valid template")
                .progress_chars("#>-"),
        );

        let mut feed = ColorFeed::new(Some(pb.clone()));
        config.strategy().fill(&mut image, &mut feed);
        pb.finish_with_message("Fill complete");

        tracing::info!("Saving output to: {}", config.output.display());
        save_image(&image, &config.output, config.quality)?;

        tracing::info!("Generation complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let config = Config {
            width: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::UnsupportedDimensions { .. })
        ));
    }

    #[test]
    fn test_too_few_pixels_rejected() {
        let config = Config {
            width: 100,
            height: 100,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::UnsupportedDimensions { .. })
        ));
    }

    #[test]
    fn test_quality_out_of_range_rejected() {
        let config = Config {
            quality: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_wide_image_is_enough() {
        // 2^24 pixels exactly, in a single row's worth of area
        let config = Config {
            width: 16_777_216,
            height: 1,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
