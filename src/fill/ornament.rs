//! Recursive ornament fill.

use image::RgbImage;

use super::{ColorFeed, FillStrategy};

/// Draws nested rectangular borders, splitting each region into quadrants
/// until the depth or minimum size bottoms out, then floods the leaf
/// interiors row-major.
pub struct OrnamentFill {
    depth: u32,
    min_size: i64,
}

impl OrnamentFill {
    /// Depths below 1 and minimum sizes below 8 are clamped up.
    pub fn new(depth: u32, min_size: u32) -> Self {
        Self {
            depth: depth.max(1),
            min_size: i64::from(min_size.max(8)),
        }
    }

    fn fill_region(
        &self,
        image: &mut RgbImage,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        depth: u32,
        feed: &mut ColorFeed,
    ) {
        if w <= 0 || h <= 0 {
            return;
        }

        draw_border(image, x, y, w, h, feed);

        if depth <= 1 || w <= self.min_size || h <= self.min_size {
            for yy in (y + 1)..(y + h - 1) {
                for xx in (x + 1)..(x + w - 1) {
                    put(image, xx, yy, feed);
                }
            }
            return;
        }

        let w2 = w / 2;
        let h2 = h / 2;

        self.fill_region(image, x + 1, y + 1, w2 - 1, h2 - 1, depth - 1, feed);
        self.fill_region(image, x + w2, y + 1, w - w2 - 1, h2 - 1, depth - 1, feed);
        self.fill_region(image, x + 1, y + h2, w2 - 1, h - h2 - 1, depth - 1, feed);
        self.fill_region(image, x + w2, y + h2, w - w2 - 1, h - h2 - 1, depth - 1, feed);
    }
}

impl FillStrategy for OrnamentFill {
    fn fill(&self, image: &mut RgbImage, feed: &mut ColorFeed) {
        let (width, height) = image.dimensions();
        self.fill_region(
            image,
            0,
            0,
            i64::from(width),
            i64::from(height),
            self.depth,
            feed,
        );
    }
}

/// Trace the border of a region: top and bottom rows, then the two side
/// columns without their corners.
fn draw_border(image: &mut RgbImage, x: i64, y: i64, w: i64, h: i64, feed: &mut ColorFeed) {
    let x2 = x + w - 1;
    let y2 = y + h - 1;

    for xx in x..=x2 {
        put(image, xx, y, feed);
        if y2 != y {
            put(image, xx, y2, feed);
        }
    }

    for yy in (y + 1)..y2 {
        put(image, x, yy, feed);
        if x2 != x {
            put(image, x2, yy, feed);
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn put(image: &mut RgbImage, x: i64, y: i64, feed: &mut ColorFeed) {
    image.put_pixel(x as u32, y as u32, feed.next_color());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn distinct_after_fill(width: u32, height: u32, depth: u32, min_size: u32) -> usize {
        let mut image = RgbImage::new(width, height);
        let mut feed = ColorFeed::new(None);
        OrnamentFill::new(depth, min_size).fill(&mut image, &mut feed);

        image.pixels().map(|p| p.0).collect::<HashSet<_>>().len()
    }

    #[test]
    fn test_covers_every_pixel_once() {
        assert_eq!(distinct_after_fill(32, 20, 3, 8), 32 * 20);
    }

    #[test]
    fn test_odd_dimensions_cover() {
        assert_eq!(distinct_after_fill(33, 21, 4, 8), 33 * 21);
    }

    #[test]
    fn test_shallow_depth_covers() {
        assert_eq!(distinct_after_fill(16, 16, 1, 8), 16 * 16);
    }
}
