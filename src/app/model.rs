// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state.

use std::path::PathBuf;

use crate::app::view::Viewport;
use crate::app::view::crop::SelectionTracker;
use crate::config::AppConfig;
use crate::domain::raster::RasterImage;
use crate::domain::selection::SelectionRect;

// =============================================================================
// Enums
// =============================================================================

/// Result of the most recent finished drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionOutcome {
    #[default]
    None,
    TooSmall,
    Ready(SelectionRect),
}

// =============================================================================
// Model
// =============================================================================

pub struct AppModel {
    // Document.
    pub image: Option<RasterImage>,
    pub current_path: Option<PathBuf>,

    // View.
    pub viewport: Viewport,

    // Selection.
    pub tracker: SelectionTracker,
    pub outcome: SelectionOutcome,

    // Settings.
    pub config: AppConfig,

    // UI state.
    pub error: Option<String>,
}

impl AppModel {
    pub fn new(config: AppConfig) -> Self {
        Self {
            image: None,
            current_path: None,
            viewport: Viewport::default(),
            tracker: SelectionTracker::default(),
            outcome: SelectionOutcome::None,
            config,
            error: None,
        }
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Finalized selection, if the last drag produced one.
    pub fn selection(&self) -> Option<SelectionRect> {
        match self.outcome {
            SelectionOutcome::Ready(rect) => Some(rect),
            _ => None,
        }
    }

    /// Replace the image; coordinates from the previous one become meaningless.
    pub fn replace_image(&mut self, image: RasterImage, path: Option<PathBuf>) {
        let (width, height) = image.dimensions();
        self.tracker.attach(width, height);
        self.outcome = SelectionOutcome::None;
        self.image = Some(image);
        self.current_path = path;
    }
}
