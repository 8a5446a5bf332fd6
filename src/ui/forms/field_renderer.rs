//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField, FormValues};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a text or select field in a bordered box
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    values: &FormValues,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value(values);
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let mut spans = Vec::new();
    match field.kind {
        FieldKind::Select if is_active => {
            spans.push(Span::styled("◀ ", style));
            spans.push(Span::styled(display_str, style));
            spans.push(Span::styled(" ▶", style));
        }
        _ => {
            spans.push(Span::styled(display_str, style));
            if is_active {
                spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            }
        }
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

/// Draw a field's validation message; nothing when it is empty
pub fn draw_field_error(frame: &mut Frame, area: Rect, message: &str) {
    if message.is_empty() {
        return;
    }
    let error = Paragraph::new(Line::from(Span::styled(
        format!(" {message}"),
        Style::default().fg(Color::Red),
    )));
    frame.render_widget(error, area);
}

/// Build the line for one topping checkbox
pub fn checkbox_line(field: &FormField, values: &FormValues, is_active: bool) -> Line<'static> {
    let mut style = if field.is_checked(values) {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    if is_active {
        style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
    }
    let pointer = if is_active { "› " } else { "  " };
    Line::from(Span::styled(
        format!("{pointer}{}", field.display_value(values)),
        style,
    ))
}

/// Draw help text for forms
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}
