//! Row-major fill in shuffled color order.

use image::RgbImage;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{ColorFeed, FillStrategy};
use crate::color::ALL_COLORS_COUNT;

/// Scatters the color sequence across the image with a Fisher-Yates shuffle.
/// A fixed seed makes the output reproducible.
pub struct RandomFill {
    seed: Option<u64>,
}

impl RandomFill {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

impl FillStrategy for RandomFill {
    #[allow(clippy::cast_possible_truncation)]
    fn fill(&self, image: &mut RgbImage, feed: &mut ColorFeed) {
        let mut rng = self
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let mut order: Vec<u32> = (0..ALL_COLORS_COUNT as u32).collect();
        order.shuffle(&mut rng);
        feed.set_order(order);

        let (width, height) = image.dimensions();
        for y in 0..height {
            for x in 0..width {
                image.put_pixel(x, y, feed.next_color());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_reproducible() {
        let mut first = RgbImage::new(16, 8);
        let mut second = RgbImage::new(16, 8);

        RandomFill::new(Some(42)).fill(&mut first, &mut ColorFeed::new(None));
        RandomFill::new(Some(42)).fill(&mut second, &mut ColorFeed::new(None));

        assert_eq!(first, second);
    }

    #[test]
    fn test_pixels_are_distinct() {
        let mut image = RgbImage::new(16, 8);
        RandomFill::new(Some(7)).fill(&mut image, &mut ColorFeed::new(None));

        let distinct: std::collections::HashSet<[u8; 3]> =
            image.pixels().map(|p| p.0).collect();
        assert_eq!(distinct.len(), 16 * 8);
    }
}
