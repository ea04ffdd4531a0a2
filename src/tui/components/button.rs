//! # Button Component
//!
//! A bordered, single-line label. Three looks:
//!
//! - **normal**: white label, gray border
//! - **disabled**: everything dimmed
//! - **focused**: cyan border (only while keyboard focus is showing)

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

/// Buttons are always one line of text plus a border.
pub const BUTTON_HEIGHT: u16 = 3;

pub struct Button<'a> {
    pub label: &'a str,
    pub disabled: bool,
    pub focused: bool,
    pub accent: Color,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            disabled: false,
            focused: false,
            accent: Color::White,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    /// Display width including the border and one column of padding each side.
    pub fn width(&self) -> u16 {
        self.label.width() as u16 + 4
    }
}

impl Component for Button<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (label_style, border_style) = if self.disabled {
            let dim = Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM);
            (dim, dim)
        } else if self.focused {
            (
                Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Gray),
            )
        };

        let border_type = if self.focused && !self.disabled {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };

        let paragraph = Paragraph::new(self.label)
            .style(label_style)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(border_type)
                    .border_style(border_style),
            );
        frame.render_widget(paragraph, area);
    }
}
