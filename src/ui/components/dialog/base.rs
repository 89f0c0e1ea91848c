//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear},
    Frame,
};

/// Configuration for rendering a modal frame
pub struct ModalConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title color
    pub title_color: Color,
    /// Border color
    pub border_color: Color,
    /// Hint text shown on the bottom border (e.g., key bindings)
    pub hint: Option<Vec<Span<'a>>>,
    /// Maximum width of the dialog
    pub max_width: u16,
    /// Maximum height of the dialog
    pub max_height: u16,
}

impl<'a> Default for ModalConfig<'a> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            title_color: Color::White,
            border_color: Color::White,
            hint: None,
            max_width: 60,
            max_height: 20,
        }
    }
}

/// Center a box of at most `width` x `height` inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render a centered modal overlay and return the area inside its border
pub fn render_modal_frame(frame: &mut Frame, config: ModalConfig) -> Rect {
    let dialog_area = centered_rect(frame.area(), config.max_width, config.max_height);

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let mut block = Block::default()
        .title(Line::from(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.border_color))
        .style(Style::default().bg(Color::Black));

    if let Some(hint_spans) = config.hint {
        block = block.title_bottom(Line::from(hint_spans));
    }

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}
