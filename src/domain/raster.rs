// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/raster.rs
//
// Loaded raster image, read-only for the selection and surface pipeline.

use std::path::Path;

use image::{ColorType, DynamicImage, GenericImageView, ImageReader};

use super::error::ImageLoadFailure;

/// Channel layout of a raster image, ignoring bit depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Grayscale,
    GrayscaleAlpha,
    Rgb,
    Rgba,
}

impl ColorMode {
    #[must_use]
    pub fn is_single_channel(self) -> bool {
        matches!(self, Self::Grayscale | Self::GrayscaleAlpha)
    }
}

/// Represents a decoded raster image (PNG, JPEG, BMP, GIF, TIFF, ...).
#[derive(Debug, Clone)]
pub struct RasterImage {
    /// The decoded pixels.
    document: DynamicImage,
}

impl RasterImage {
    /// Wrap an image decoded by the host.
    pub fn new(document: DynamicImage) -> Self {
        Self { document }
    }

    /// Load a raster image from disk.
    pub fn open(path: &Path) -> Result<Self, ImageLoadFailure> {
        let decode = || -> image::ImageResult<DynamicImage> {
            ImageReader::open(path)?.with_guessed_format()?.decode()
        };
        let document = decode().map_err(|source| ImageLoadFailure {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { document })
    }

    /// Returns the native pixel dimensions (width, height).
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.document.dimensions()
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.document.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.document.height()
    }

    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        match self.document.color() {
            ColorType::L8 | ColorType::L16 => ColorMode::Grayscale,
            ColorType::La8 | ColorType::La16 => ColorMode::GrayscaleAlpha,
            ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => ColorMode::Rgb,
            _ => ColorMode::Rgba,
        }
    }

    /// Bits per channel (8, 16 or 32 for float images).
    #[must_use]
    pub fn bit_depth(&self) -> u16 {
        let color = self.document.color();
        color.bits_per_pixel() / u16::from(color.channel_count())
    }

    /// Borrow the decoded pixels.
    #[must_use]
    pub fn pixels(&self) -> &DynamicImage {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage, Rgba};

    #[test]
    fn reports_mode_and_depth() {
        let gray = RasterImage::new(DynamicImage::ImageLuma8(GrayImage::new(4, 3)));
        assert_eq!(gray.dimensions(), (4, 3));
        assert_eq!(gray.color_mode(), ColorMode::Grayscale);
        assert_eq!(gray.bit_depth(), 8);

        let rgb = RasterImage::new(DynamicImage::ImageRgb8(RgbImage::new(2, 2)));
        assert_eq!(rgb.color_mode(), ColorMode::Rgb);
        assert!(!rgb.color_mode().is_single_channel());

        let wide: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::new(1, 1);
        assert_eq!(RasterImage::new(DynamicImage::ImageLuma16(wide)).bit_depth(), 16);

        let rgba: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::new(1, 1);
        assert_eq!(RasterImage::new(DynamicImage::ImageRgba8(rgba)).color_mode(), ColorMode::Rgba);
    }

    #[test]
    fn open_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        RgbImage::from_pixel(3, 2, Rgb([10, 20, 30])).save(&path).unwrap();

        let raster = RasterImage::open(&path).unwrap();
        assert_eq!(raster.dimensions(), (3, 2));
        assert_eq!(raster.color_mode(), ColorMode::Rgb);
    }

    #[test]
    fn open_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");
        let err = RasterImage::open(&path).unwrap_err();
        assert_eq!(err.path, path);
        assert!(err.to_string().contains("missing.png"));
    }
}
