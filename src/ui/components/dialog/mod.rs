//! Dialog components for TUI

mod base;

pub use base::{render_modal_frame, ModalConfig};
