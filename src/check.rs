//! Pass/fail verdict for the all-RGB puzzle.

use std::fmt;
use std::path::Path;

use image::DynamicImage;

use crate::census::distinct_colors;
use crate::color::ALL_COLORS_COUNT;
use crate::error::Result;
use crate::image::load_image;

/// Outcome of checking an image against the full 24-bit color space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    /// Number of distinct colors found, capped at [`ALL_COLORS_COUNT`].
    pub distinct: usize,
}

impl CheckReport {
    /// Whether the image contains every 24-bit color.
    pub fn is_complete(&self) -> bool {
        self.distinct == ALL_COLORS_COUNT
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_complete() {
            write!(
                f,
                "Congratulations, your image contains exactly 2^24 = {ALL_COLORS_COUNT} unique colors"
            )
        } else {
            write!(
                f,
                "Failed. Your image contains {} unique colors instead of 2^24 = {ALL_COLORS_COUNT}",
                self.distinct
            )
        }
    }
}

/// Check an already-decoded image.
pub fn check(image: &DynamicImage) -> CheckReport {
    CheckReport {
        distinct: distinct_colors(image),
    }
}

/// Load the image at `path` and check it.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn check_image<P: AsRef<Path>>(path: P) -> Result<CheckReport> {
    let image = load_image(path)?;
    Ok(check(&image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_failure_message() {
        let image = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        let report = check(&DynamicImage::ImageRgb8(image));

        assert!(!report.is_complete());
        assert_eq!(
            report.to_string(),
            "Failed. Your image contains 1 unique colors instead of 2^24 = 16777216"
        );
    }

    #[test]
    fn test_success_message() {
        let report = CheckReport {
            distinct: ALL_COLORS_COUNT,
        };

        assert!(report.is_complete());
        assert_eq!(
            report.to_string(),
            "Congratulations, your image contains exactly 2^24 = 16777216 unique colors"
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(check_image("no-such-image.png").is_err());
    }
}
