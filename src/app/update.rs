// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Message handling: one message at a time, mutating the model.

use crate::app::message::AppMessage;
use crate::app::model::{AppModel, SelectionOutcome};
use crate::app::status::render_enabled;
use crate::app::view::Viewport;
use crate::app::view::crop::LiveRect;
use crate::domain::error::SelectionError;
use crate::domain::raster::RasterImage;
use crate::domain::selection::SelectionRect;
use crate::domain::surface;
use crate::fl;
use crate::render::SurfaceRenderer;

/// What the host canvas should do after a message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Feedback {
    None,
    /// Draw or replace the selection outline (canvas coordinates).
    Outline(LiveRect),
    /// Remove the selection outline.
    ClearOutline,
    /// The renderer presented a new surface.
    Rendered,
}

pub fn update(
    model: &mut AppModel,
    message: AppMessage,
    renderer: &mut dyn SurfaceRenderer,
) -> Feedback {
    match message {
        AppMessage::OpenPath(path) => match RasterImage::open(&path) {
            Ok(image) => {
                log::info!(
                    "Loaded {} ({}x{}, {:?})",
                    path.display(),
                    image.width(),
                    image.height(),
                    image.color_mode()
                );
                model.replace_image(image, Some(path));
                model.clear_error();
                Feedback::ClearOutline
            }
            Err(e) => {
                log::error!("{e}");
                model.set_error(e.to_string());
                Feedback::None
            }
        },

        AppMessage::LoadImage(image) => {
            log::info!("Loaded {}x{} image from host", image.width(), image.height());
            model.replace_image(image, None);
            model.clear_error();
            Feedback::ClearOutline
        }

        AppMessage::PointerPressed { x, y } => {
            let (ix, iy) = model.viewport.screen_to_image(x, y);
            match model.tracker.begin(ix, iy) {
                Some(live) => {
                    log::debug!("Drag started at ({ix:.1}, {iy:.1})");
                    Feedback::Outline(model.viewport.rect_to_screen(live))
                }
                None => Feedback::None,
            }
        }

        AppMessage::PointerMoved { x, y } => {
            let (ix, iy) = model.viewport.screen_to_image(x, y);
            model
                .tracker
                .update(ix, iy)
                .map_or(Feedback::None, |live| {
                    Feedback::Outline(model.viewport.rect_to_screen(live))
                })
        }

        AppMessage::PointerReleased { x, y } => {
            let (ix, iy) = model.viewport.screen_to_image(x, y);
            match model.tracker.end(ix, iy) {
                Ok(rect) => {
                    log::info!("Selected region {rect}");
                    model.outcome = SelectionOutcome::Ready(rect);
                    Feedback::Outline(outline_for(&model.viewport, rect))
                }
                Err(e @ SelectionError::TooSmallSelection { .. }) => {
                    log::warn!("{e}");
                    model.outcome = SelectionOutcome::TooSmall;
                    Feedback::ClearOutline
                }
                Err(SelectionError::NoActiveDrag) => Feedback::None,
            }
        }

        AppMessage::ViewerStateChanged {
            scale,
            offset_x,
            offset_y,
        } => {
            model.viewport = Viewport::new(scale, offset_x, offset_y);
            if let Some(live) = model.tracker.live_rect() {
                Feedback::Outline(model.viewport.rect_to_screen(live))
            } else if let Some(rect) = model.selection() {
                Feedback::Outline(outline_for(&model.viewport, rect))
            } else {
                Feedback::None
            }
        }

        AppMessage::Render => render(model, renderer),

        AppMessage::ClearError => {
            model.clear_error();
            Feedback::None
        }
    }
}

fn render(model: &mut AppModel, renderer: &mut dyn SurfaceRenderer) -> Feedback {
    if !render_enabled(model) {
        log::warn!("Render requested without an image and a valid selection");
        model.set_error(fl!("render-not-ready"));
        return Feedback::None;
    }
    let (Some(image), Some(rect)) = (model.image.as_ref(), model.selection()) else {
        return Feedback::None;
    };

    let (field, view) = match surface::build(image, &rect) {
        Ok(built) => built,
        Err(e) => {
            log::error!("Surface build rejected {rect}: {e}");
            model.set_error(e.to_string());
            return Feedback::None;
        }
    };
    let view = model.config.apply_to(view);

    match renderer.present(&field, &view) {
        Ok(()) => {
            model.clear_error();
            Feedback::Rendered
        }
        Err(e) => {
            log::error!("{e}");
            model.set_error(e.to_string());
            Feedback::None
        }
    }
}

fn outline_for(viewport: &Viewport, rect: SelectionRect) -> LiveRect {
    viewport.rect_to_screen(LiveRect {
        left: rect.left as f32,
        top: rect.top as f32,
        right: rect.right as f32,
        bottom: rect.bottom as f32,
    })
}
