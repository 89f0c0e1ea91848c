//! Add-item form pane

use super::field_renderer::{draw_field, error_footer};
use crate::host::ItemModalHost;
use crate::modal::AddItemModal;
use crate::state::{Form, FormButton, ImageState, ItemField, ItemForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};

/// Validated field shown in each form slot
const SLOT_FIELDS: [(usize, ItemField); 6] = [
    (ItemForm::NAME, ItemField::Name),
    (ItemForm::CATEGORY, ItemField::Category),
    (ItemForm::DESCRIPTION, ItemField::Description),
    (ItemForm::LOCATION, ItemField::Location),
    (ItemForm::PHONE_NUMBER, ItemField::PhoneNumber),
    (ItemForm::VOIVODESHIP, ItemField::Voivodeship),
];

/// Draw the editable form
pub fn draw_item_form<H: ItemModalHost>(frame: &mut Frame, area: Rect, modal: &AddItemModal<H>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Category
            Constraint::Min(4),                // Description
            Constraint::Length(3),             // Location
            Constraint::Length(3),             // Phone number
            Constraint::Length(3),             // Region
            Constraint::Length(3),             // Image
            Constraint::Length(BUTTON_HEIGHT), // Buttons
        ])
        .split(area);

    let form = modal.form();
    let errors = modal.errors();

    for (slot, item_field) in SLOT_FIELDS {
        if let Some(field) = form.get_field(slot) {
            draw_field(
                frame,
                chunks[slot],
                field,
                form.active_field() == slot,
                errors.get(item_field).map(error_footer),
            );
        }
    }

    draw_field(
        frame,
        chunks[ItemForm::IMAGE],
        &form.image_path,
        form.is_image_field_active(),
        image_footer(modal.image_state(), form.image_path.as_text()),
    );

    draw_buttons(frame, chunks[ItemForm::BUTTONS], form);
}

/// Status of the image picker, shown under the path input
fn image_footer(state: &ImageState, path: &str) -> Option<Line<'static>> {
    match state {
        ImageState::Idle if path.trim().is_empty() => None,
        ImageState::Idle => Some(Line::from(Span::styled(
            " press Enter to load ",
            Style::default().fg(Color::DarkGray),
        ))),
        ImageState::Reading { .. } => Some(Line::from(Span::styled(
            " reading… ",
            Style::default().fg(Color::Yellow),
        ))),
        ImageState::Ready(image) => Some(Line::from(Span::styled(
            format!(" loaded {}x{} ", image.width, image.height),
            Style::default().fg(Color::Green),
        ))),
        ImageState::Failed { reason, .. } => {
            Some(error_footer(&format!("could not read image: {reason}")))
        }
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, form: &ItemForm) {
    let on_buttons = form.is_buttons_row_active();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_button(
        frame,
        chunks[0],
        FormButton::AddItem.label(),
        on_buttons && form.selected_button == FormButton::AddItem,
        Color::Green,
    );
    render_button(
        frame,
        chunks[1],
        FormButton::Close.label(),
        on_buttons && form.selected_button == FormButton::Close,
        Color::Red,
    );
}

/// Key binding hint for the modal's bottom border
pub fn help_spans() -> Vec<Span<'static>> {
    let key = Style::default().fg(Color::Cyan);
    vec![
        Span::raw(" "),
        Span::styled("Tab", key),
        Span::raw(": next field  "),
        Span::styled("←/→", key),
        Span::raw(": choose  "),
        Span::styled(crate::platform::SUBMIT_SHORTCUT, key),
        Span::raw(": add item  "),
        Span::styled("Esc", key),
        Span::raw(": close "),
    ]
}
