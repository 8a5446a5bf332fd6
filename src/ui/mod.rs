//! UI module for rendering the TUI
//!
//! Every frame is a projection of the current `App` state; nothing here
//! mutates state.

mod components;
mod forms;
mod home;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (nav_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_nav(frame, nav_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::Order => forms::draw_order_form(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}
