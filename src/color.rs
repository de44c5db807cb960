//! Mapping between color indices and RGB values.
//!
//! Every 24-bit color is identified by an index in `0..ALL_COLORS_COUNT`,
//! packed as `r << 16 | g << 8 | b`. Walking the index range in any order
//! that visits each index once enumerates the whole color space.

use image::Rgb;

/// Number of distinct 24-bit RGB colors (2^24).
pub const ALL_COLORS_COUNT: usize = 256 * 256 * 256;

/// Map a color index to its RGB value.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn color_from_index(index: u32) -> Rgb<u8> {
    Rgb([(index >> 16) as u8, (index >> 8) as u8, index as u8])
}

/// Map an RGB value back to its color index.
#[inline]
pub fn index_from_color(color: Rgb<u8>) -> u32 {
    let Rgb([r, g, b]) = color;
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}
