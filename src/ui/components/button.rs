//! Bordered buttons: the order form's submit button and the nav links

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Border and label styles for a button.
/// A disabled button keeps its focus border but its label stays grey.
fn button_styles(focused: bool, enabled: bool) -> (Style, Style) {
    let border = Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray });
    let label = match (enabled, focused) {
        (false, _) => Style::default().fg(Color::DarkGray),
        (true, true) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        (true, false) => Style::default(),
    };
    (border, label)
}

/// Render the submit-style button
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool, enabled: bool) {
    let (border, label_style) = button_styles(focused, enabled);
    let button = Paragraph::new(Span::styled(label.to_string(), label_style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(button, area);
}

/// Render a nav link, e.g. `F2 Order`, highlighted when its route is current
pub fn render_nav_button(frame: &mut Frame, area: Rect, key: &str, label: &str, is_active: bool) {
    let (border, label_style) = button_styles(is_active, true);
    let link = Line::from(vec![
        Span::styled(key.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::styled(label.to_string(), label_style),
    ]);
    let button = Paragraph::new(link)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(button, area);
}
