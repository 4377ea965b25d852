// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/selection.rs
//
// Rectangle selection state machine driven by pointer drags.

use crate::constant::MIN_SELECTION_SIZE;
use crate::domain::error::SelectionError;
use crate::domain::selection::SelectionRect;

/// Float rectangle in image space used for live drag feedback.
///
/// May be degenerate while a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LiveRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl LiveRect {
    /// Normalized rect spanning two corner points.
    pub fn spanning((ax, ay): (f32, f32), (bx, by): (f32, f32)) -> Self {
        Self {
            left: ax.min(bx),
            top: ay.min(by),
            right: ax.max(bx),
            bottom: ay.max(by),
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Truncate to integer pixel edges. Edges are expected to be non-negative.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_pixels(&self) -> SelectionRect {
        SelectionRect::new(
            self.left as u32,
            self.top as u32,
            self.right as u32,
            self.bottom as u32,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        anchor: (f32, f32),
        current: (f32, f32),
    },
}

/// Turns press / move / release into a validated [`SelectionRect`].
///
/// Positions are image pixel coordinates and are clamped to the attached
/// image, so a finished selection always lies inside it.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    bounds: Option<(u32, u32)>,
    state: DragState,
}

impl SelectionTracker {
    /// Bind to a newly loaded image, dropping any drag in progress.
    pub fn attach(&mut self, width: u32, height: u32) {
        self.bounds = Some((width, height));
        self.state = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Current outline while dragging.
    pub fn live_rect(&self) -> Option<LiveRect> {
        match self.state {
            DragState::Dragging { anchor, current } => Some(LiveRect::spanning(anchor, current)),
            DragState::Idle => None,
        }
    }

    /// Start a new drag, abandoning any unfinished one.
    ///
    /// Without an attached image this does nothing and returns `None`.
    pub fn begin(&mut self, x: f32, y: f32) -> Option<LiveRect> {
        let anchor = self.clamp(x, y)?;
        self.state = DragState::Dragging {
            anchor,
            current: anchor,
        };
        self.live_rect()
    }

    /// Move the free corner. No validation; degenerate rects are fine here.
    pub fn update(&mut self, x: f32, y: f32) -> Option<LiveRect> {
        let point = self.clamp(x, y)?;
        match &mut self.state {
            DragState::Dragging { current, .. } => *current = point,
            DragState::Idle => return None,
        }
        self.live_rect()
    }

    /// Finish the drag and validate the selection.
    ///
    /// The tracker returns to idle whatever the outcome.
    pub fn end(&mut self, x: f32, y: f32) -> Result<SelectionRect, SelectionError> {
        let DragState::Dragging { anchor, .. } = std::mem::take(&mut self.state) else {
            return Err(SelectionError::NoActiveDrag);
        };
        let point = self.clamp(x, y).ok_or(SelectionError::NoActiveDrag)?;

        let live = LiveRect::spanning(anchor, point);
        let min = MIN_SELECTION_SIZE as f32;
        let too_small = SelectionError::TooSmallSelection {
            width: live.width(),
            height: live.height(),
            min: MIN_SELECTION_SIZE,
        };
        if live.width() <= min || live.height() <= min {
            return Err(too_small);
        }

        let rect = live.to_pixels();
        if rect.width() <= MIN_SELECTION_SIZE || rect.height() <= MIN_SELECTION_SIZE {
            return Err(too_small);
        }
        Ok(rect)
    }

    fn clamp(&self, x: f32, y: f32) -> Option<(f32, f32)> {
        let (width, height) = self.bounds?;
        let clamp_axis = |v: f32, max: u32| {
            if v.is_nan() { 0.0 } else { v.clamp(0.0, max as f32) }
        };
        Some((clamp_axis(x, width), clamp_axis(y, height)))
    }
}
