//! Order form rendering

use super::field_renderer::{checkbox_line, draw_field, draw_field_error, draw_help_text};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{FieldName, Form, OrderForm, TOPPINGS};
use crate::ui::components::{
    render_banner, render_button, BannerKind, BANNER_HEIGHT, BUTTON_HEIGHT,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the submit button
const SUBMIT_WIDTH: u16 = 14;

/// Draw the order form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.order_form;

    let block = Block::default()
        .title(" Order Your Pizza ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height(&form.server_success)), // Success banner
            Constraint::Length(banner_height(&form.server_failure)), // Failure banner
            Constraint::Length(3),                                   // Full name
            Constraint::Length(1),                                   // Full name error
            Constraint::Length(3),                                   // Size
            Constraint::Length(1),                                   // Size error
            Constraint::Length(TOPPINGS.len() as u16 + 2),           // Toppings
            Constraint::Length(BUTTON_HEIGHT),                       // Submit
            Constraint::Length(1),                                   // Help text
            Constraint::Min(0),                                      // Remaining space
        ])
        .horizontal_margin(1)
        .split(inner);

    if !form.server_success.is_empty() {
        render_banner(frame, chunks[0], BannerKind::Success, &form.server_success);
    }
    if !form.server_failure.is_empty() {
        render_banner(frame, chunks[1], BannerKind::Failure, &form.server_failure);
    }

    let fields = OrderForm::fields();
    let active = form.active_field();

    draw_field(frame, chunks[2], &fields[0], &form.values, active == 0);
    draw_field_error(frame, chunks[3], form.errors.get(FieldName::FullName));
    draw_field(frame, chunks[4], &fields[1], &form.values, active == 1);
    draw_field_error(frame, chunks[5], form.errors.get(FieldName::Size));

    draw_toppings(frame, chunks[6], form);

    let submit_area = Rect {
        width: SUBMIT_WIDTH.min(chunks[7].width),
        ..chunks[7]
    };
    render_button(
        frame,
        submit_area,
        "Submit",
        form.is_submit_active(),
        !form.disabled,
    );

    let help = if form.disabled {
        "Enter a name (3-20 characters) and pick a size to submit".to_string()
    } else {
        format!("Ready to order. Press {} to submit", SUBMIT_SHORTCUT)
    };
    draw_help_text(frame, chunks[8], &help);
}

/// Rows taken by a banner, collapsed when there is no message
fn banner_height(message: &str) -> u16 {
    if message.is_empty() {
        0
    } else {
        BANNER_HEIGHT
    }
}

/// Draw the topping checkbox group
fn draw_toppings(frame: &mut Frame, area: Rect, form: &OrderForm) {
    let focused = OrderForm::fields()
        .iter()
        .enumerate()
        .any(|(idx, f)| f.is_checkbox() && idx == form.active_field());
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines: Vec<_> = OrderForm::fields()
        .iter()
        .enumerate()
        .filter(|(_, f)| f.is_checkbox())
        .map(|(idx, f)| checkbox_line(f, &form.values, idx == form.active_field()))
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Toppings ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);
}
