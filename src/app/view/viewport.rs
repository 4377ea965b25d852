// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/viewport.rs
//
// Display <-> image coordinate transform shared by drawing and hit testing.

use crate::app::view::crop::LiveRect;
use crate::constant::SCALE_EPSILON;

/// Zoom and scroll state of the canvas showing the image.
///
/// The image is drawn at `display = image * scale - offset`, so pointer
/// positions must go through the inverse before they reach the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl Viewport {
    pub fn new(scale: f32, offset_x: f32, offset_y: f32) -> Self {
        Self {
            scale,
            offset_x,
            offset_y,
        }
    }

    fn effective_scale(&self) -> f32 {
        if self.scale > SCALE_EPSILON {
            self.scale
        } else {
            1.0
        }
    }

    /// Map a pointer position on the canvas to image pixel coordinates.
    pub fn screen_to_image(&self, x: f32, y: f32) -> (f32, f32) {
        let scale = self.effective_scale();
        ((x + self.offset_x) / scale, (y + self.offset_y) / scale)
    }

    /// Map image pixel coordinates to a canvas position.
    pub fn image_to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        let scale = self.effective_scale();
        (x * scale - self.offset_x, y * scale - self.offset_y)
    }

    /// Map an image-space outline to canvas space for drawing.
    pub fn rect_to_screen(&self, rect: LiveRect) -> LiveRect {
        let (left, top) = self.image_to_screen(rect.left, rect.top);
        let (right, bottom) = self.image_to_screen(rect.right, rect.bottom);
        LiveRect {
            left,
            top,
            right,
            bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_by_default() {
        let vp = Viewport::default();
        assert_eq!(vp.screen_to_image(12.5, 7.0), (12.5, 7.0));
    }

    #[test]
    fn scroll_and_zoom_round_trip() {
        let vp = Viewport::new(2.0, 30.0, 10.0);
        let (ix, iy) = vp.screen_to_image(50.0, 90.0);
        assert_eq!((ix, iy), (40.0, 50.0));
        assert_eq!(vp.image_to_screen(ix, iy), (50.0, 90.0));
    }

    #[test]
    fn degenerate_scale_falls_back_to_identity_zoom() {
        let vp = Viewport::new(0.0, 5.0, 0.0);
        assert_eq!(vp.screen_to_image(10.0, 10.0), (15.0, 10.0));
    }
}
