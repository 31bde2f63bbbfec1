//! Decode, orientation, resize, and encode operations

use crate::io::error::{MosaicError, Result, imaging_error};
use image::imageops::FilterType;
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader, RgbaImage};
use std::io::Cursor;
use std::path::PathBuf;

/// Raster format of the encoded output buffer
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// Portable Network Graphics, lossless with alpha
    #[default]
    Png,
    /// JPEG, lossy; alpha is dropped by conversion to RGB
    Jpeg,
}

impl OutputFormat {
    /// The corresponding `image` crate format identifier
    pub const fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }

    /// Canonical file extension for the format
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

/// Decode encoded image bytes and normalize their EXIF orientation
///
/// # Errors
///
/// Returns a [`MosaicError::Imaging`] when the bytes are not a decodable
/// image, or a [`MosaicError::FileSystem`] when format detection fails.
pub fn decode_oriented(bytes: &[u8]) -> Result<DynamicImage> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| MosaicError::FileSystem {
            path: PathBuf::from("<memory>"),
            operation: "detect image format",
            source: e,
        })?;
    let mut decoder = reader
        .into_decoder()
        .map_err(|e| imaging_error("decode", e))?;
    let orientation = decoder
        .orientation()
        .map_err(|e| imaging_error("orientation", e))?;
    let mut image =
        DynamicImage::from_decoder(decoder).map_err(|e| imaging_error("decode", e))?;
    image.apply_orientation(orientation);
    Ok(image)
}

/// Resize to the given width, preserving the aspect ratio
///
/// # Errors
///
/// Returns an error when the target width is zero or the image has no
/// pixels to scale from.
pub fn resize_to_width(image: &DynamicImage, width: u32) -> Result<DynamicImage> {
    if width == 0 {
        return Err(crate::io::error::invalid_parameter(
            "output_width",
            &width,
            &"must be greater than zero",
        ));
    }
    let (source_width, source_height) = (image.width(), image.height());
    if source_width == 0 || source_height == 0 {
        return Err(MosaicError::InvalidSource {
            reason: "image has zero dimensions".to_string(),
        });
    }
    let height = ((f64::from(source_height) * f64::from(width) / f64::from(source_width)).round()
        as u32)
        .max(1);
    Ok(image.resize_exact(width, height, FilterType::Triangle))
}

/// Resize to exact dimensions, ignoring the aspect ratio
pub fn resize_exact_rgba(image: &DynamicImage, width: u32, height: u32) -> RgbaImage {
    image
        .resize_exact(width, height, FilterType::Triangle)
        .into_rgba8()
}

/// Encode the canvas into the requested raster format
///
/// JPEG has no alpha channel, so the canvas is flattened to RGB first.
///
/// # Errors
///
/// Returns a [`MosaicError::Imaging`] when the encoder rejects the canvas.
pub fn encode(canvas: &RgbaImage, format: OutputFormat) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    let written = match format {
        OutputFormat::Png => canvas.write_to(&mut cursor, ImageFormat::Png),
        OutputFormat::Jpeg => DynamicImage::ImageRgba8(canvas.clone())
            .to_rgb8()
            .write_to(&mut cursor, ImageFormat::Jpeg),
    };
    written.map_err(|e| imaging_error("encode", e))?;
    Ok(cursor.into_inner())
}
