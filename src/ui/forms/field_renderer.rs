//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field using FormField from the domain layer
///
/// `footer` is rendered on the bottom border, used for validation errors and
/// image loading status.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    footer: Option<Line>,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let is_empty = field.as_text().is_empty();
    let value_style = if is_empty {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let display_str = match &field.value {
        FieldValue::Text(_) if is_empty && !is_active => field.placeholder.clone(),
        _ => field.display_value(),
    };

    // Choices are edited with arrows, so they get no text cursor
    let cursor = if is_active && !field.is_choice() {
        "▌"
    } else {
        ""
    };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(footer) = footer {
        block = block.title_bottom(footer);
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Red footer line for a validation message
pub fn error_footer(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {message} "),
        Style::default().fg(Color::Red),
    ))
}
