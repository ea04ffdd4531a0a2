//! # Story Page Component
//!
//! One story page: the illustration panel on top, the text below, and a
//! "Read Again" button on the last page.
//!
//! A terminal can't show the artwork itself, so the panel shows its
//! description. Clicking anywhere in the panel turns the page.
//!
//! ```text
//! ┌ Illustration ──────────────────────┐
//! │                                    │
//! │  A rainbow stretching across ...   │
//! │       click to turn the page       │
//! └────────────────────────────────────┘
//!   When they stepped outside, a ...
//!
//!           ╭──────────────╮
//!           │ ↺ Read Again │   (last page only)
//!           ╰──────────────╯
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::book::Page;
use crate::tui::component::Component;
use crate::tui::components::button::{BUTTON_HEIGHT, Button};

pub struct StoryPage<'a> {
    pub page: &'a Page,
    pub is_last: bool,
    pub restart_focused: bool,
    /// Filled in by `render()`.
    pub illustration_area: Rect,
    /// Filled in by `render()` on the last page.
    pub restart_button: Option<Rect>,
}

impl<'a> StoryPage<'a> {
    pub fn new(page: &'a Page, is_last: bool, restart_focused: bool) -> Self {
        Self {
            page,
            is_last,
            restart_focused,
            illustration_area: Rect::default(),
            restart_button: None,
        }
    }
}

impl Component for StoryPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = Paragraph::new(self.page.text)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::horizontal(2)));
        let text_height = text.line_count(area.width) as u16;
        let button_height = if self.is_last { BUTTON_HEIGHT + 1 } else { 0 };

        let [illustration_area, _, text_area, button_row] = Layout::vertical([
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(text_height),
            Constraint::Length(button_height),
        ])
        .areas(area);

        self.render_illustration(frame, illustration_area);
        self.illustration_area = illustration_area;

        frame.render_widget(text, text_area);

        if self.is_last {
            let mut button = Button::new("↺ Read Again")
                .focused(self.restart_focused)
                .accent(Color::LightMagenta);
            let [_, row] =
                Layout::vertical([Constraint::Length(1), Constraint::Length(BUTTON_HEIGHT)])
                    .areas(button_row);
            let [button_area] = Layout::horizontal([Constraint::Length(button.width())])
                .flex(Flex::Center)
                .areas(row);
            button.render(frame, button_area);
            self.restart_button = Some(button_area);
        } else {
            self.restart_button = None;
        }
    }
}

impl StoryPage<'_> {
    fn render_illustration(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            self.page.illustration.alt,
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::ITALIC),
        ))];
        if !self.is_last {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "click to turn the page",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let block = Block::bordered()
            .title(" Illustration ")
            .border_style(Style::default().fg(Color::Green))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let content_height = (paragraph.line_count(inner.width) as u16).min(inner.height);
        let [content_area] = Layout::vertical([Constraint::Length(content_height)])
            .flex(Flex::Center)
            .areas(inner);
        frame.render_widget(paragraph, content_area);
    }
}
