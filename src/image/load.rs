//! Image loading utilities.

use std::path::Path;

use image::{DynamicImage, GenericImageView};

use crate::error::{Error, Result};

/// Load an image from disk.
///
/// The format is detected from the file contents by the decoder.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or not a supported
/// image format.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = img.dimensions();
    tracing::debug!("Loaded {} ({width}x{height})", path.display());

    Ok(img)
}
