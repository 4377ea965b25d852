// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/surface/view_spec.rs
//
// Camera and presentation parameters for the surface renderer.

use crate::constant::{DEFAULT_AZIMUTH, DEFAULT_ELEVATION, DEFAULT_TITLE};
use crate::domain::colormap::Colormap;

/// How the renderer should present a height field.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSpec {
    pub colormap: Colormap,
    /// Camera elevation above the base plane, degrees.
    pub elevation: f32,
    /// Camera azimuth around the vertical axis, degrees.
    pub azimuth: f32,
    pub show_ticks: bool,
    pub show_grid: bool,
    /// Background panes behind the axes.
    pub show_panes: bool,
    pub title: String,
    pub row_stride: u32,
    pub col_stride: u32,
    pub antialiased: bool,
}

impl Default for ViewSpec {
    fn default() -> Self {
        Self {
            colormap: Colormap::Jet,
            elevation: DEFAULT_ELEVATION,
            azimuth: DEFAULT_AZIMUTH,
            show_ticks: false,
            show_grid: false,
            show_panes: false,
            title: DEFAULT_TITLE.to_string(),
            row_stride: 1,
            col_stride: 1,
            antialiased: true,
        }
    }
}

impl ViewSpec {
    #[must_use]
    pub fn with_colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = colormap;
        self
    }

    #[must_use]
    pub fn with_camera(mut self, elevation: f32, azimuth: f32) -> Self {
        self.elevation = elevation;
        self.azimuth = azimuth;
        self
    }
}
