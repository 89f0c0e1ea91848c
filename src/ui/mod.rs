//! UI module for rendering the TUI

mod components;
mod forms;
mod preview;

use crate::host::ItemModalHost;
use crate::modal::AddItemModal;
use components::{render_modal_frame, ModalConfig};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Color,
    Frame,
};

/// Main draw function: the add-item modal over an empty backdrop
pub fn draw<H: ItemModalHost>(frame: &mut Frame, modal: &AddItemModal<H>) {
    let inner = render_modal_frame(
        frame,
        ModalConfig {
            title: "Add new item",
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            hint: Some(forms::help_spans()),
            max_width: 110,
            max_height: 36,
        },
    );

    // Form (left) and preview (right)
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .margin(1)
        .split(inner);

    forms::draw_item_form(frame, panes[0], modal);
    preview::draw(frame, panes[1], &modal.preview());
}
