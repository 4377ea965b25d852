// SPDX-License-Identifier: GPL-3.0-or-later
// src/render/mod.rs
//
// Renderer seam: anything that can present a height field.

pub mod preview;

use crate::domain::error::RenderPresentationError;
use crate::domain::surface::{HeightField, ViewSpec};

pub use preview::PreviewRenderer;

/// Presents a height field as a surface.
///
/// Implementations own their display loop; errors are opaque to the caller.
pub trait SurfaceRenderer {
    fn present(&mut self, field: &HeightField, view: &ViewSpec) -> Result<(), RenderPresentationError>;
}
