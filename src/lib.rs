// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Select a region of a raster image and lift it into a height-field surface.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;
pub mod i18n;
pub mod render;
