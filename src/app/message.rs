// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: events, user actions, and internal signals.

use std::path::PathBuf;

use crate::domain::raster::RasterImage;

#[derive(Debug, Clone)]
pub enum AppMessage {
    // Image loading.
    OpenPath(PathBuf),
    LoadImage(RasterImage),

    // Pointer, in canvas coordinates.
    PointerPressed {
        x: f32,
        y: f32,
    },
    PointerMoved {
        x: f32,
        y: f32,
    },
    PointerReleased {
        x: f32,
        y: f32,
    },

    // View / zoom.
    ViewerStateChanged {
        scale: f32,
        offset_x: f32,
        offset_y: f32,
    },

    // Surface.
    Render,

    // Errors.
    ClearError,
}
