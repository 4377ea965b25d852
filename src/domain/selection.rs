// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/selection.rs
//
// Selection rectangle domain model.

use std::fmt;

/// Selected region in image pixel coordinates.
///
/// Edges are half-open: pixels in `[left, right) x [top, bottom)` belong to
/// the region. Pure domain model, no UI concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl SelectionRect {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width in pixels (0 for inverted rects).
    #[must_use]
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Height in pixels (0 for inverted rects).
    #[must_use]
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Check that the rect lies inside an image of the given size.
    #[must_use]
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left <= self.right
            && self.top <= self.bottom
            && self.right <= width
            && self.bottom <= height
    }
}

impl fmt::Display for SelectionRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
