// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/status.rs
//
// Status line and render enablement derived from the model.

use std::fmt;

use crate::app::model::{AppModel, SelectionOutcome};
use crate::domain::selection::SelectionRect;
use crate::fl;

/// What the user should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    AwaitingImage,
    AwaitingSelection,
    SelectionTooSmall,
    SelectionReady(SelectionRect),
}

impl Status {
    /// Localized status line.
    pub fn text(&self) -> String {
        match self {
            Self::AwaitingImage => fl!("awaiting-image"),
            Self::AwaitingSelection => fl!("awaiting-selection"),
            Self::SelectionTooSmall => fl!("selection-too-small"),
            Self::SelectionReady(rect) => fl!(
                "selection-ready",
                left = rect.left,
                top = rect.top,
                right = rect.right,
                bottom = rect.bottom
            ),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

pub fn status(model: &AppModel) -> Status {
    if model.image.is_none() {
        return Status::AwaitingImage;
    }
    match model.outcome {
        SelectionOutcome::None => Status::AwaitingSelection,
        SelectionOutcome::TooSmall => Status::SelectionTooSmall,
        SelectionOutcome::Ready(rect) => Status::SelectionReady(rect),
    }
}

/// Whether the render trigger should be enabled.
pub fn render_enabled(model: &AppModel) -> bool {
    model.image.is_some() && model.selection().is_some()
}
