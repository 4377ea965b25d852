// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/surface/mod.rs
//
// Height-field surface construction.

pub mod builder;
mod height_field;
mod view_spec;

pub use builder::build;
pub use height_field::HeightField;
pub use view_spec::ViewSpec;
