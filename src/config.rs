// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the application, persisted as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::constant::{CONFIG_DIR, CONFIG_FILE, DEFAULT_AZIMUTH, DEFAULT_CELL_SIZE, DEFAULT_ELEVATION};
use crate::domain::colormap::Colormap;
use crate::domain::surface::ViewSpec;

/// Global configuration for the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Optional default directory to open images from.
    pub default_image_dir: Option<PathBuf>,
    /// Directory previews are written to when no output path is given.
    pub output_dir: Option<PathBuf>,
    /// Colormap used for the surface.
    pub colormap: Colormap,
    /// Camera elevation in degrees.
    pub elevation: f32,
    /// Camera azimuth in degrees.
    pub azimuth: f32,
    /// Preview pixels per height-field cell.
    pub cell_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_image_dir: dirs::picture_dir().or_else(dirs::home_dir),
            output_dir: None,
            colormap: Colormap::Jet,
            elevation: DEFAULT_ELEVATION,
            azimuth: DEFAULT_AZIMUTH,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl AppConfig {
    /// Platform location of the config file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`, falling back to defaults when missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config {}: {e:#}", path.display());
                Self::default()
            }
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw).with_context(|| format!("writing {}", path.display()))
    }

    /// Apply the configured presentation on top of builder defaults.
    pub fn apply_to(&self, view: ViewSpec) -> ViewSpec {
        view.with_colormap(self.colormap)
            .with_camera(self.elevation, self.azimuth)
    }
}
