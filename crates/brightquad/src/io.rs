//! Image file boundary backed by the `image` crate.
//!
//! Decoding sniffs the format from the file contents, so the extension does
//! not have to match, and converts to 8-bit luma. Encoding picks the format
//! from the file extension.

use core::fmt;
use std::path::{Path, PathBuf};

use bq_core::{Error, Image, Rgb8};
use image::{DynamicImage, ImageError, ImageReader, RgbImage};

#[derive(Debug)]
pub enum IoError {
    /// The file is missing, unreadable, or not a decodable image.
    Decode { path: PathBuf, source: ImageError },
    /// The raster could not be written to `path`.
    Encode { path: PathBuf, source: ImageError },
    /// Decoded buffer and dimensions disagree.
    Layout(Error),
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { path, source } => write!(
                f,
                "image file '{}' not found or unreadable: {source}",
                path.display()
            ),
            Self::Encode { path, source } => {
                write!(f, "failed to write image '{}': {source}", path.display())
            }
            Self::Layout(err) => write!(f, "image layout: {err}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } | Self::Encode { source, .. } => Some(source),
            Self::Layout(err) => Some(err),
        }
    }
}

impl From<Error> for IoError {
    fn from(err: Error) -> Self {
        Self::Layout(err)
    }
}

/// Loads `path` as an 8-bit grayscale grid.
pub fn load_gray(path: &Path) -> Result<Image<u8>, IoError> {
    let dyn_img = decode(path).map_err(|source| IoError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let luma = dyn_img.into_luma8();
    let (w, h) = luma.dimensions();

    tracing::debug!(path = %path.display(), width = w, height = h, "decoded grayscale image");

    Ok(Image::from_vec(w as usize, h as usize, luma.into_raw())?)
}

fn decode(path: &Path) -> Result<DynamicImage, ImageError> {
    ImageReader::open(path)
        .map_err(ImageError::IoError)?
        .with_guessed_format()
        .map_err(ImageError::IoError)?
        .decode()
}

/// Converts an RGB raster into an `image::RgbImage`.
pub fn to_rgb_image(raster: &Image<Rgb8>) -> Result<RgbImage, IoError> {
    let flat: Vec<u8> = raster.data().iter().flatten().copied().collect();
    let actual = flat.len();
    RgbImage::from_raw(raster.width() as u32, raster.height() as u32, flat).ok_or(
        IoError::Layout(Error::SizeMismatch {
            expected: raster.width() * raster.height() * 3,
            actual,
        }),
    )
}

/// Writes an RGB raster to `path`; the extension selects the format.
pub fn save_rgb(path: &Path, raster: &Image<Rgb8>) -> Result<(), IoError> {
    let rgb = to_rgb_image(raster)?;
    rgb.save(path).map_err(|source| IoError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        width = raster.width(),
        height = raster.height(),
        "wrote overlay"
    );
    Ok(())
}
