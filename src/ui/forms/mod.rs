//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `item_form`: The add-item form pane

mod field_renderer;
mod item_form;

pub use item_form::{draw_item_form, help_spans};
