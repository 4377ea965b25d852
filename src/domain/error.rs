// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/error.rs
//
// Error types for the selection and surface pipeline.

use std::path::PathBuf;

use thiserror::Error;

use super::selection::SelectionRect;

/// Recoverable user-input conditions raised while finishing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SelectionError {
    #[error("no drag in progress")]
    NoActiveDrag,

    #[error("selection {width:.1}x{height:.1} is too small (both edges must exceed {min} px)")]
    TooSmallSelection { width: f32, height: f32, min: u32 },
}

/// Contract violations detected by the surface builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("rect {rect} is outside the {image_width}x{image_height} image")]
    RectOutOfBounds {
        rect: SelectionRect,
        image_width: u32,
        image_height: u32,
    },

    #[error("selection has zero area")]
    EmptySelection,
}

/// Decoding a raster image from disk failed.
#[derive(Debug, Error)]
#[error("failed to load image {}: {source}", path.display())]
pub struct ImageLoadFailure {
    pub path: PathBuf,
    #[source]
    pub source: image::ImageError,
}

/// Opaque failure reported back by a surface renderer.
#[derive(Debug, Error)]
#[error("failed to present surface: {0:#}")]
pub struct RenderPresentationError(pub anyhow::Error);

impl RenderPresentationError {
    pub fn new<E: Into<anyhow::Error>>(err: E) -> Self {
        Self(err.into())
    }
}
