//! Fill strategies for enumerating all 24-bit colors into a pixel grid.
//!
//! Every strategy walks the whole image, writing one color per pixel from a
//! shared [`ColorFeed`]. The feed hands out each of the 2^24 colors exactly
//! once, so any image with at least that many pixels ends up containing the
//! full color space.

mod mandala;
mod ornament;
mod pattern;
mod random;
mod trivial;

pub use mandala::MandalaFill;
pub use ornament::OrnamentFill;
pub use pattern::PatternFill;
pub use random::RandomFill;
pub use trivial::TrivialFill;

use clap::ValueEnum;
use image::{Rgb, RgbImage};
use indicatif::ProgressBar;

use crate::color::{color_from_index, ALL_COLORS_COUNT};

/// Pixel fill strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Row-major sweep in color-index order.
    Trivial,
    /// Row-major sweep in shuffled color order.
    Random,
    /// Structured traversal patterns.
    Pattern,
    /// Radial arms around a center point.
    Mandala,
    /// Recursive bordered quadrants.
    Ornament,
}

/// Traversal styles for [`Mode::Pattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PatternStyle {
    /// Serpentine rows.
    Snake,
    /// Anti-diagonal stripes, zigzagging per diagonal.
    Diagonal,
    /// Outer border spiraling inward.
    Spiral,
    /// Tiled blocks with alternating sweeps.
    Blocks,
}

/// A strategy that writes a color to every pixel of the image.
pub trait FillStrategy {
    fn fill(&self, image: &mut RgbImage, feed: &mut ColorFeed);
}

/// Sequential source of fill colors.
///
/// Yields each of the 2^24 colors once, in index order or in a permutation
/// installed with [`ColorFeed::set_order`]. Once the color space is spent,
/// the last color repeats for any remaining pixels.
pub struct ColorFeed {
    order: Option<Vec<u32>>,
    cursor: usize,
    last: Rgb<u8>,
    progress: Option<ProgressBar>,
}

impl ColorFeed {
    /// Create a feed walking colors in index order.
    pub fn new(progress: Option<ProgressBar>) -> Self {
        Self {
            order: None,
            cursor: 0,
            last: Rgb([0, 0, 0]),
            progress,
        }
    }

    /// Replace the index order with a custom permutation. The permutation
    /// must contain every color index once.
    pub fn set_order(&mut self, order: Vec<u32>) {
        self.order = Some(order);
    }

    /// Next fill color.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_color(&mut self) -> Rgb<u8> {
        if self.cursor < ALL_COLORS_COUNT {
            let index = match &self.order {
                Some(order) => order[self.cursor],
                None => self.cursor as u32,
            };
            self.last = color_from_index(index);
            self.cursor += 1;
        }

        if let Some(pb) = &self.progress {
            pb.inc(1);
        }

        self.last
    }
}
