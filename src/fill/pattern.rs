//! Structured traversal patterns.

use image::RgbImage;

use super::{ColorFeed, FillStrategy, PatternStyle};

/// Walks the image along a decorative path, assigning colors in feed order.
pub struct PatternFill {
    style: PatternStyle,
    block_size: u32,
}

impl PatternFill {
    /// Block sizes below 4 are clamped up.
    pub fn new(style: PatternStyle, block_size: u32) -> Self {
        Self {
            style,
            block_size: block_size.max(4),
        }
    }

    /// Serpentine rows: even rows left to right, odd rows right to left.
    fn fill_snake(image: &mut RgbImage, feed: &mut ColorFeed) {
        let (width, height) = image.dimensions();

        for y in 0..height {
            if y % 2 == 0 {
                for x in 0..width {
                    image.put_pixel(x, y, feed.next_color());
                }
            } else {
                for x in (0..width).rev() {
                    image.put_pixel(x, y, feed.next_color());
                }
            }
        }
    }

    /// Anti-diagonal stripes, zigzagging per diagonal.
    fn fill_diagonal(image: &mut RgbImage, feed: &mut ColorFeed) {
        let (width, height) = image.dimensions();
        let max_k = (width - 1) + (height - 1);

        for k in 0..=max_k {
            let x_start = k.saturating_sub(height - 1);
            let x_end = (width - 1).min(k);

            if k % 2 == 0 {
                for x in x_start..=x_end {
                    image.put_pixel(x, k - x, feed.next_color());
                }
            } else {
                for x in (x_start..=x_end).rev() {
                    image.put_pixel(x, k - x, feed.next_color());
                }
            }
        }
    }

    /// Outer border spiraling inward.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn fill_spiral(image: &mut RgbImage, feed: &mut ColorFeed) {
        let (width, height) = image.dimensions();
        let (mut left, mut right) = (0i64, i64::from(width) - 1);
        let (mut top, mut bottom) = (0i64, i64::from(height) - 1);

        while left <= right && top <= bottom {
            for x in left..=right {
                image.put_pixel(x as u32, top as u32, feed.next_color());
            }
            top += 1;

            for y in top..=bottom {
                image.put_pixel(right as u32, y as u32, feed.next_color());
            }
            right -= 1;

            if top > bottom || left > right {
                break;
            }

            for x in (left..=right).rev() {
                image.put_pixel(x as u32, bottom as u32, feed.next_color());
            }
            bottom -= 1;

            for y in (top..=bottom).rev() {
                image.put_pixel(left as u32, y as u32, feed.next_color());
            }
            left += 1;
        }
    }

    /// Tiled blocks, alternating serpentine and bottom-up sweeps per block.
    fn fill_blocks(image: &mut RgbImage, feed: &mut ColorFeed, block_size: u32) {
        let (width, height) = image.dimensions();

        let mut by = 0;
        while by < height {
            let mut bx = 0;
            while bx < width {
                let bw = block_size.min(width - bx);
                let bh = block_size.min(height - by);
                let serpentine = (bx / block_size + by / block_size) % 2 == 0;

                if serpentine {
                    for yy in 0..bh {
                        if yy % 2 == 0 {
                            for xx in 0..bw {
                                image.put_pixel(bx + xx, by + yy, feed.next_color());
                            }
                        } else {
                            for xx in (0..bw).rev() {
                                image.put_pixel(bx + xx, by + yy, feed.next_color());
                            }
                        }
                    }
                } else {
                    for yy in (0..bh).rev() {
                        for xx in 0..bw {
                            image.put_pixel(bx + xx, by + yy, feed.next_color());
                        }
                    }
                }

                bx += block_size;
            }
            by += block_size;
        }
    }
}

impl FillStrategy for PatternFill {
    fn fill(&self, image: &mut RgbImage, feed: &mut ColorFeed) {
        match self.style {
            PatternStyle::Snake => Self::fill_snake(image, feed),
            PatternStyle::Diagonal => Self::fill_diagonal(image, feed),
            PatternStyle::Spiral => Self::fill_spiral(image, feed),
            PatternStyle::Blocks => Self::fill_blocks(image, feed, self.block_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn distinct_after_fill(style: PatternStyle, width: u32, height: u32) -> usize {
        let mut image = RgbImage::new(width, height);
        let mut feed = ColorFeed::new(None);
        PatternFill::new(style, 4).fill(&mut image, &mut feed);

        image.pixels().map(|p| p.0).collect::<HashSet<_>>().len()
    }

    #[test]
    fn test_snake_covers_every_pixel_once() {
        assert_eq!(distinct_after_fill(PatternStyle::Snake, 7, 5), 35);
    }

    #[test]
    fn test_diagonal_covers_every_pixel_once() {
        assert_eq!(distinct_after_fill(PatternStyle::Diagonal, 7, 5), 35);
        assert_eq!(distinct_after_fill(PatternStyle::Diagonal, 1, 6), 6);
    }

    #[test]
    fn test_spiral_covers_every_pixel_once() {
        assert_eq!(distinct_after_fill(PatternStyle::Spiral, 6, 4), 24);
        assert_eq!(distinct_after_fill(PatternStyle::Spiral, 5, 5), 25);
    }

    #[test]
    fn test_blocks_cover_every_pixel_once() {
        // 10x7 does not divide evenly into 4x4 blocks
        assert_eq!(distinct_after_fill(PatternStyle::Blocks, 10, 7), 70);
    }

    #[test]
    fn test_snake_reverses_odd_rows() {
        let mut image = RgbImage::new(3, 2);
        let mut feed = ColorFeed::new(None);
        PatternFill::new(PatternStyle::Snake, 4).fill(&mut image, &mut feed);

        // second row is written right to left
        assert_eq!(image.get_pixel(2, 1).0, [0, 0, 3]);
        assert_eq!(image.get_pixel(0, 1).0, [0, 0, 5]);
    }
}
