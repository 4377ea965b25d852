// SPDX-License-Identifier: GPL-3.0-or-later
// src/render/preview.rs
//
// Flat false-color preview of a height field written to an image file.

use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use image::{Rgb, RgbImage};

use super::SurfaceRenderer;
use crate::constant::MAX_PREVIEW_PIXELS;
use crate::domain::error::RenderPresentationError;
use crate::domain::surface::{HeightField, ViewSpec};

/// Writes a top-down colormapped image, `cell_size` pixels per grid cell.
///
/// Elevations are scaled by the source range, so the same gray level always
/// maps to the same color regardless of the selection.
#[derive(Debug, Clone)]
pub struct PreviewRenderer {
    output: PathBuf,
    cell_size: u32,
}

impl PreviewRenderer {
    pub fn new(output: impl Into<PathBuf>, cell_size: u32) -> Self {
        Self {
            output: output.into(),
            cell_size: cell_size.max(1),
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Output size in pixels, or an error when it would not fit in memory.
    fn output_size(&self, field: &HeightField) -> Result<(u32, u32), RenderPresentationError> {
        let cell = self.cell_size;
        let (width, height) = field.dimensions();
        let too_large = || {
            RenderPresentationError::new(anyhow!(
                "preview {width}x{height} cells at {cell} px is too large"
            ))
        };

        let out_w = width.checked_mul(cell).ok_or_else(too_large)?;
        let out_h = height.checked_mul(cell).ok_or_else(too_large)?;
        if u64::from(out_w) * u64::from(out_h) > MAX_PREVIEW_PIXELS {
            return Err(too_large());
        }
        Ok((out_w, out_h))
    }

    /// Rasterize without touching the filesystem.
    pub fn rasterize(&self, field: &HeightField, view: &ViewSpec) -> Result<RgbImage, RenderPresentationError> {
        let cell = self.cell_size;
        let (out_w, out_h) = self.output_size(field)?;
        Ok(RgbImage::from_fn(out_w, out_h, |px, py| {
            let t = field.normalized(px / cell, py / cell).unwrap_or(0.0);
            Rgb(view.colormap.sample(t))
        }))
    }
}

impl SurfaceRenderer for PreviewRenderer {
    fn present(&mut self, field: &HeightField, view: &ViewSpec) -> Result<(), RenderPresentationError> {
        let Some((low, high)) = field.min_max() else {
            return Err(RenderPresentationError::new(anyhow!(
                "nothing to draw for an empty height field"
            )));
        };

        let img = self.rasterize(field, view)?;
        img.save(&self.output)
            .with_context(|| format!("writing preview to {}", self.output.display()))
            .map_err(RenderPresentationError::new)?;

        log::info!(
            "Wrote {}x{} {} preview of \"{}\" (elevation {low}..{high}) to {}",
            img.width(),
            img.height(),
            view.colormap,
            view.title,
            self.output.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::colormap::Colormap;

    fn two_cells() -> HeightField {
        HeightField::from_values(2, 1, vec![0.0, 255.0], 255.0).unwrap()
    }

    #[test]
    fn rasterize_scales_cells_and_applies_colormap() {
        let renderer = PreviewRenderer::new("unused.png", 3);
        let view = ViewSpec::default().with_colormap(Colormap::Gray);
        let img = renderer.rasterize(&two_cells(), &view).unwrap();
        assert_eq!(img.dimensions(), (6, 3));
        assert_eq!(img.get_pixel(2, 2), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(3, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn present_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surface.png");
        let mut renderer = PreviewRenderer::new(&path, 2);
        renderer.present(&two_cells(), &ViewSpec::default()).unwrap();

        let written = image::open(&path).unwrap().to_rgb8();
        assert_eq!(written.dimensions(), (4, 2));
        assert_eq!(written.get_pixel(0, 0), &Rgb(Colormap::Jet.sample(0.0)));
    }

    #[test]
    fn present_reports_unwritable_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("surface.png");
        let mut renderer = PreviewRenderer::new(path, 1);
        let err = renderer.present(&two_cells(), &ViewSpec::default()).unwrap_err();
        assert!(err.to_string().contains("surface.png"));
    }

    #[test]
    fn oversized_cells_are_reported_not_panicked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surface.png");
        let view = ViewSpec::default();

        let renderer = PreviewRenderer::new(&path, u32::MAX / 2 + 1);
        assert!(renderer.rasterize(&two_cells(), &view).is_err());

        let mut renderer = PreviewRenderer::new(&path, u32::MAX);
        let err = renderer.present(&two_cells(), &view).unwrap_err();
        assert!(err.to_string().contains("too large"));
        assert!(!path.exists());
    }

    #[test]
    fn pixel_budget_caps_output_size() {
        // 2x1 cells at 20000 px fit in u32 but exceed the pixel budget.
        let renderer = PreviewRenderer::new("unused.png", 20_000);
        assert!(renderer.rasterize(&two_cells(), &ViewSpec::default()).is_err());
    }

    #[test]
    fn present_rejects_empty_field() {
        let empty = HeightField::from_values(0, 0, Vec::new(), 255.0).unwrap();
        let mut renderer = PreviewRenderer::new("unused.png", 1);
        assert!(renderer.present(&empty, &ViewSpec::default()).is_err());
    }
}
