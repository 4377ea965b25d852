// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/mod.rs
//
// Rectangle selection: drag state machine and live outline.

mod selection;

pub use selection::{DragState, LiveRect, SelectionTracker};
