// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/surface/builder.rs
//
// Map a raster image and a selection to a height field and default view.

use image::{DynamicImage, GenericImageView, Pixel, Rgb};

use super::{HeightField, ViewSpec};
use crate::constant::{LUMA_ROUND, LUMA_WEIGHTS, LUMA_WEIGHTS_F32};
use crate::domain::error::BuildError;
use crate::domain::raster::RasterImage;
use crate::domain::selection::SelectionRect;

/// Build the height field for `rect` and the default presentation for it.
///
/// Multi-channel sources are reduced to BT.601 luma; single-channel sources
/// pass through. Alpha is ignored. The result only depends on the inputs.
pub fn build(image: &RasterImage, rect: &SelectionRect) -> Result<(HeightField, ViewSpec), BuildError> {
    if rect.is_empty() {
        return Err(BuildError::EmptySelection);
    }

    let (image_width, image_height) = image.dimensions();
    if !rect.fits_within(image_width, image_height) {
        return Err(BuildError::RectOutOfBounds {
            rect: *rect,
            image_width,
            image_height,
        });
    }

    let (values, max_value) = match image.pixels() {
        DynamicImage::ImageLuma8(buf) => (sample(buf, rect, |p| f32::from(p.0[0])), 255.0),
        DynamicImage::ImageLumaA8(buf) => (sample(buf, rect, |p| f32::from(p.0[0])), 255.0),
        DynamicImage::ImageRgb8(buf) => (sample(buf, rect, |p| luma_u8(p.to_rgb())), 255.0),
        DynamicImage::ImageRgba8(buf) => (sample(buf, rect, |p| luma_u8(p.to_rgb())), 255.0),
        DynamicImage::ImageLuma16(buf) => (sample(buf, rect, |p| f32::from(p.0[0])), 65535.0),
        DynamicImage::ImageLumaA16(buf) => (sample(buf, rect, |p| f32::from(p.0[0])), 65535.0),
        DynamicImage::ImageRgb16(buf) => (sample(buf, rect, |p| luma_u16(p.to_rgb())), 65535.0),
        DynamicImage::ImageRgba16(buf) => (sample(buf, rect, |p| luma_u16(p.to_rgb())), 65535.0),
        DynamicImage::ImageRgb32F(buf) => (sample(buf, rect, |p| luma_f32(p.to_rgb())), 1.0),
        DynamicImage::ImageRgba32F(buf) => (sample(buf, rect, |p| luma_f32(p.to_rgb())), 1.0),
        other => {
            let rgb = other.to_rgb8();
            (sample(&rgb, rect, |p| luma_u8(*p)), 255.0)
        }
    };

    let field = HeightField::from_values(rect.width(), rect.height(), values, max_value)
        .ok_or(BuildError::EmptySelection)?;

    log::debug!(
        "Built {}x{} height field from {} ({:?}, {} bit)",
        field.width(),
        field.height(),
        rect,
        image.color_mode(),
        image.bit_depth()
    );

    Ok((field, ViewSpec::default()))
}

/// Collect one value per pixel of `rect`, row-major from `(left, top)`.
fn sample<I, F>(buf: &I, rect: &SelectionRect, mut f: F) -> Vec<f32>
where
    I: GenericImageView,
    F: FnMut(&I::Pixel) -> f32,
{
    let mut values = Vec::with_capacity(rect.width() as usize * rect.height() as usize);
    for y in rect.top..rect.bottom {
        for x in rect.left..rect.right {
            values.push(f(&buf.get_pixel(x, y)));
        }
    }
    values
}

fn luma_u8(px: Rgb<u8>) -> f32 {
    let [r, g, b] = px.0.map(u32::from);
    let l = (r * LUMA_WEIGHTS[0] + g * LUMA_WEIGHTS[1] + b * LUMA_WEIGHTS[2] + LUMA_ROUND) >> 16;
    l as f32
}

fn luma_u16(px: Rgb<u16>) -> f32 {
    let [r, g, b] = px.0.map(u64::from);
    let [wr, wg, wb] = LUMA_WEIGHTS.map(u64::from);
    let l = (r * wr + g * wg + b * wb + u64::from(LUMA_ROUND)) >> 16;
    l as f32
}

fn luma_f32(px: Rgb<f32>) -> f32 {
    let [r, g, b] = px.0;
    r * LUMA_WEIGHTS_F32[0] + g * LUMA_WEIGHTS_F32[1] + b * LUMA_WEIGHTS_F32[2]
}
