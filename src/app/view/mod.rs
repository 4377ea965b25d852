// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// Canvas-side state: selection tracking and the display transform.

pub mod crop;
pub mod viewport;

pub use viewport::Viewport;
