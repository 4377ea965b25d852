// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Domain layer: pure data and algorithms, no UI concerns.

pub mod colormap;
pub mod error;
pub mod raster;
pub mod selection;
pub mod surface;
