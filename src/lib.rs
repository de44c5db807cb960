//! # AllTheColors
//!
//! A library for the "all RGB" generative-art puzzle: produce an image that
//! uses every 24-bit RGB color exactly once, then prove it.
//!
//! The checker decodes an image, counts its distinct colors, and compares
//! the count against the full 2^24 color space. The generator enumerates
//! all 16,777,216 colors into a pixel grid using one of several fill
//! strategies.
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> allthecolors::Result<()> {
//! let report = allthecolors::check_image("trivial.png")?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod census;
pub mod check;
pub mod color;
pub mod error;
pub mod fill;
pub mod generate;
pub mod image;

pub use check::{check_image, CheckReport};
pub use color::ALL_COLORS_COUNT;
pub use error::{Error, Result};
pub use generate::{Config, Generator};
