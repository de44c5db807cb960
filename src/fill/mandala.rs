//! Radial mandala fill.

use image::RgbImage;

use super::{ColorFeed, FillStrategy};

/// Stamps colors along bending radial arms around a center point, then
/// sweeps up whatever the arms missed.
pub struct MandalaFill {
    arms: u32,
    center: Option<(u32, u32)>,
}

impl MandalaFill {
    /// Arm counts below 1 are clamped up. `center` defaults to the middle
    /// of the image.
    pub fn new(arms: u32, center: Option<(u32, u32)>) -> Self {
        Self {
            arms: arms.max(1),
            center,
        }
    }
}

impl FillStrategy for MandalaFill {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn fill(&self, image: &mut RgbImage, feed: &mut ColorFeed) {
        let (width, height) = image.dimensions();
        let (cx, cy) = self.center.unwrap_or((width / 2, height / 2));
        let (cx, cy) = (i64::from(cx), i64::from(cy));

        let mut filled = vec![false; width as usize * height as usize];

        let max_radius = f64::from(width).hypot(f64::from(height));
        let full = std::f64::consts::TAU;
        let sector_angle = full / f64::from(self.arms);

        for r in 0..=(max_radius as u32) {
            let steps = (self.arms * 8).max((f64::from(r) * 0.35) as u32 + 1);

            for s in 0..steps {
                let angle = full * f64::from(s) / f64::from(steps);

                // bend each arm slightly so the spokes curve
                let arm = (angle / sector_angle) as u32;
                let local = angle - f64::from(arm) * sector_angle;
                let normalized = local / sector_angle - 0.5;
                let final_angle = angle - normalized * 0.12;

                let x = cx + (f64::from(r) * final_angle.cos()) as i64;
                let y = cy + (f64::from(r) * final_angle.sin()) as i64;

                stamp(image, &mut filled, x, y, feed);
            }
        }

        // the arms leave gaps; fill the rest row-major
        for y in 0..height {
            for x in 0..width {
                let slot = y as usize * width as usize + x as usize;
                if !filled[slot] {
                    image.put_pixel(x, y, feed.next_color());
                    filled[slot] = true;
                }
            }
        }
    }
}

/// Write a 2x2 stamp at (x, y), skipping pixels already filled or outside
/// the image.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn stamp(image: &mut RgbImage, filled: &mut [bool], x: i64, y: i64, feed: &mut ColorFeed) {
    let (width, height) = image.dimensions();

    for dy in 0..2i64 {
        for dx in 0..2i64 {
            let (xx, yy) = (x + dx, y + dy);
            if xx < 0 || xx >= i64::from(width) || yy < 0 || yy >= i64::from(height) {
                continue;
            }

            let slot = yy as usize * width as usize + xx as usize;
            if !filled[slot] {
                image.put_pixel(xx as u32, yy as u32, feed.next_color());
                filled[slot] = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_covers_every_pixel_once() {
        let mut image = RgbImage::new(24, 18);
        let mut feed = ColorFeed::new(None);
        MandalaFill::new(4, None).fill(&mut image, &mut feed);

        let distinct: HashSet<[u8; 3]> = image.pixels().map(|p| p.0).collect();
        assert_eq!(distinct.len(), 24 * 18);
    }

    #[test]
    fn test_off_center_still_covers() {
        let mut image = RgbImage::new(16, 16);
        let mut feed = ColorFeed::new(None);
        MandalaFill::new(6, Some((2, 2))).fill(&mut image, &mut feed);

        let distinct: HashSet<[u8; 3]> = image.pixels().map(|p| p.0).collect();
        assert_eq!(distinct.len(), 16 * 16);
    }
}
