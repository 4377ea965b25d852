// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Minimum selection edge length in image pixels (exclusive).
pub const MIN_SELECTION_SIZE: u32 = 5;

/// Default camera elevation in degrees.
pub const DEFAULT_ELEVATION: f32 = 60.0;

/// Default camera azimuth in degrees.
pub const DEFAULT_AZIMUTH: f32 = -45.0;

/// Default plot title handed to the renderer.
pub const DEFAULT_TITLE: &str = "3D Surface Plot of Selected Region";

/// BT.601 luma weights in 16.16 fixed point (R, G, B); they sum to 65536.
pub const LUMA_WEIGHTS: [u32; 3] = [19595, 38470, 7471];

/// Rounding bias added before the fixed-point shift.
pub const LUMA_ROUND: u32 = 0x8000;

/// BT.601 luma weights for float sources.
pub const LUMA_WEIGHTS_F32: [f32; 3] = [0.299, 0.587, 0.114];

/// Tolerance for zoom comparisons (float precision in viewport synchronization).
pub const SCALE_EPSILON: f32 = 0.0001;

/// Config directory name below the platform config dir.
pub const CONFIG_DIR: &str = "relief";

/// Config file name.
pub const CONFIG_FILE: &str = "config.json";

/// Default preview pixels per height-field cell.
pub const DEFAULT_CELL_SIZE: u32 = 4;

/// Largest preview image the renderer will allocate, in pixels.
pub const MAX_PREVIEW_PIXELS: u64 = 1 << 28;

/// Default preview file name when no output path is given.
pub const DEFAULT_PREVIEW_NAME: &str = "relief-preview.png";
