//! Layout components (nav bar, status bar)

use super::components::{render_nav_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of a nav link button
const NAV_LINK_WIDTH: u16 = 14;

/// Split the screen into nav bar, main content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Nav bar
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the nav bar with one link per route, highlighting the active one
pub fn draw_nav(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints: Vec<Constraint> = View::ALL
        .iter()
        .map(|_| Constraint::Length(NAV_LINK_WIDTH))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (idx, view) in View::ALL.iter().enumerate() {
        render_nav_button(
            frame,
            chunks[idx],
            &format!("F{}", idx + 1),
            view.label(),
            app.state.is_active_link(*view),
        );
    }

    // Current route on the right
    let path = Paragraph::new(Line::from(vec![
        Span::styled("route ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.state.current_view.path(),
            Style::default().fg(Color::Cyan),
        ),
    ]))
    .alignment(Alignment::Right);
    let path_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(chunks[View::ALL.len()]);
    frame.render_widget(path, path_rows[1]);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = get_view_hints(&app.state.current_view);
    let spans = vec![
        Span::raw(" "),
        Span::styled(hints, Style::default().fg(Color::Gray)),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Home => "Enter/o:order  q:quit  F1/F2:switch page".to_string(),
        View::Order => format!(
            "Tab/↑↓:move  ←→:size  Space:topping  {}:submit  Esc:back",
            SUBMIT_SHORTCUT
        ),
    }
}
