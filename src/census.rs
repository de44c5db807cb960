//! Distinct color counting.

use std::collections::HashSet;

use bitvec::vec::BitVec;
use image::{DynamicImage, RgbImage, RgbaImage};

use crate::color::{index_from_color, ALL_COLORS_COUNT};

/// Count the distinct colors of a decoded image.
///
/// Alpha-free images count distinct (R,G,B) triples; images with an alpha
/// channel count full (R,G,B,A) tuples, so the same RGB value under two
/// alphas is two colors. At most [`ALL_COLORS_COUNT`] distinct colors are
/// considered; colors encountered past that cap are not counted separately.
pub fn distinct_colors(image: &DynamicImage) -> usize {
    if image.color().has_alpha() {
        distinct_rgba(&image.to_rgba8())
    } else {
        distinct_rgb(&image.to_rgb8())
    }
}

/// Count distinct RGB triples with a fixed 2^24-entry presence mask.
fn distinct_rgb(image: &RgbImage) -> usize {
    let mut seen: BitVec = BitVec::repeat(false, ALL_COLORS_COUNT);

    for pixel in image.pixels() {
        seen.set(index_from_color(*pixel) as usize, true);
    }

    seen.count_ones()
}

/// Count distinct RGBA tuples, saturating at [`ALL_COLORS_COUNT`].
fn distinct_rgba(image: &RgbaImage) -> usize {
    let mut seen: HashSet<u32> = HashSet::new();

    for pixel in image.pixels() {
        if seen.len() == ALL_COLORS_COUNT {
            break;
        }
        seen.insert(u32::from_be_bytes(pixel.0));
    }

    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Rgb, Rgba};

    #[test]
    fn test_solid_image_has_one_color() {
        let image = RgbImage::from_pixel(10, 10, Rgb([7, 7, 7]));
        assert_eq!(distinct_colors(&DynamicImage::ImageRgb8(image)), 1);
    }

    #[test]
    fn test_duplicates_are_not_double_counted() {
        let mut image = RgbImage::new(4, 1);
        image.put_pixel(0, 0, Rgb([1, 2, 3]));
        image.put_pixel(1, 0, Rgb([1, 2, 3]));
        image.put_pixel(2, 0, Rgb([3, 2, 1]));
        image.put_pixel(3, 0, Rgb([0, 0, 0]));
        assert_eq!(distinct_colors(&DynamicImage::ImageRgb8(image)), 3);
    }

    #[test]
    fn test_count_is_position_invariant() {
        let colors = [Rgb([1, 0, 0]), Rgb([0, 1, 0]), Rgb([0, 0, 1]), Rgb([1, 0, 0])];

        let mut forward = RgbImage::new(2, 2);
        let mut backward = RgbImage::new(2, 2);
        for (i, color) in colors.iter().enumerate() {
            let i = i as u32;
            forward.put_pixel(i % 2, i / 2, *color);
            backward.put_pixel(1 - i % 2, 1 - i / 2, *color);
        }

        assert_eq!(
            distinct_colors(&DynamicImage::ImageRgb8(forward)),
            distinct_colors(&DynamicImage::ImageRgb8(backward)),
        );
    }

    #[test]
    fn test_alpha_distinguishes_colors() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
        image.put_pixel(1, 0, Rgba([10, 20, 30, 0]));
        assert_eq!(distinct_colors(&DynamicImage::ImageRgba8(image)), 2);
    }

    #[test]
    fn test_grayscale_counts_as_rgb() {
        let image = GrayImage::new(4, 4);
        assert_eq!(distinct_colors(&DynamicImage::ImageLuma8(image)), 1);
    }
}
