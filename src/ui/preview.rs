//! Live preview pane

use crate::state::ItemPreview;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn info_line<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
        Span::raw(value),
    ])
}

/// Draw the read-only preview card for the current draft
pub fn draw(frame: &mut Frame, area: Rect, preview: &ItemPreview) {
    let mut lines = Vec::new();

    if let Some(image) = &preview.image {
        lines.push(Line::from(vec![
            Span::styled("[image] ", Style::default().fg(Color::Magenta)),
            Span::raw(image.as_str()),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        preview.title.as_str(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(info_line("Category", &preview.category));
    lines.push(info_line("Location", &preview.location));
    lines.push(info_line("Region", &preview.voivodeship));
    if let Some(phone) = &preview.phone_number {
        lines.push(info_line("Phone", phone));
    }
    lines.push(Line::from(""));
    lines.extend(
        preview
            .description
            .split('\n')
            .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Gray)))),
    );

    let card = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Item preview ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(card, area);
}
