//! Banner component for submission feedback

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Height of a rendered banner
pub const BANNER_HEIGHT: u16 = 3;

/// Kind of banner, picks the colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Failure,
}

impl BannerKind {
    fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Failure => Color::Red,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Success => " Success ",
            Self::Failure => " Failure ",
        }
    }
}

/// Render a bordered one-line message
pub fn render_banner(frame: &mut Frame, area: Rect, kind: BannerKind, message: &str) {
    let color = kind.color();
    let block = Block::default()
        .title(kind.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, area);
}
