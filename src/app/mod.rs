// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Application layer: host-facing state machine over the domain pipeline.

pub mod message;
pub mod model;
pub mod status;
pub mod update;
pub mod view;

pub use message::AppMessage;
pub use model::{AppModel, SelectionOutcome};
pub use status::{Status, render_enabled, status};
pub use update::{Feedback, update};
