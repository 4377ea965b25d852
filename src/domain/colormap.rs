// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/colormap.rs
//
// Colormap identifiers and piecewise-linear sampling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Built-in colormap names (case-insensitive on parse).
pub const SUPPORTED: &[&str] = &["jet", "gray"];

/// Colormap handed to the renderer alongside the height field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    /// Blue to red through cyan, green and yellow.
    #[default]
    Jet,
    Gray,
}

/// One channel's breakpoints: (position, intensity), positions increasing.
type Channel = &'static [(f32, f32)];

const JET: [Channel; 3] = [
    &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)],
    &[
        (0.0, 0.0),
        (0.125, 0.0),
        (0.375, 1.0),
        (0.64, 1.0),
        (0.91, 0.0),
        (1.0, 0.0),
    ],
    &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)],
];

const GRAY: [Channel; 3] = [
    &[(0.0, 0.0), (1.0, 1.0)],
    &[(0.0, 0.0), (1.0, 1.0)],
    &[(0.0, 0.0), (1.0, 1.0)],
];

impl Colormap {
    /// Identifier understood by renderers.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Jet => "jet",
            Self::Gray => "gray",
        }
    }

    /// Sample the colormap at `t` in `[0, 1]`; values outside are clamped.
    #[must_use]
    pub fn sample(self, t: f32) -> [u8; 3] {
        let channels = match self {
            Self::Jet => JET,
            Self::Gray => GRAY,
        };
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        channels.map(|stops| to_byte(interpolate(stops, t)))
    }
}

fn interpolate(stops: Channel, t: f32) -> f32 {
    for pair in stops.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if t <= x1 {
            let span = x1 - x0;
            if span <= f32::EPSILON {
                return y1;
            }
            return y0 + (y1 - y0) * (t - x0) / span;
        }
    }
    stops.last().map_or(0.0, |&(_, y)| y)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colormap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jet" => Ok(Self::Jet),
            "gray" | "grey" => Ok(Self::Gray),
            _ => Err(format!(
                "Unknown colormap '{}'. Supported: {}",
                s,
                SUPPORTED.join(", ")
            )),
        }
    }
}
