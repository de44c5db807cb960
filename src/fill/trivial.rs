//! Row-major fill in color-index order.

use image::RgbImage;

use super::{ColorFeed, FillStrategy};

/// The straightforward solution: color 0 at the top-left pixel, counting up
/// left to right, top to bottom.
pub struct TrivialFill;

impl FillStrategy for TrivialFill {
    fn fill(&self, image: &mut RgbImage, feed: &mut ColorFeed) {
        let (width, height) = image.dimensions();

        for y in 0..height {
            for x in 0..width {
                image.put_pixel(x, y, feed.next_color());
            }
        }
    }
}
