//! # Navigation Controls
//!
//! The bottom bar on story pages: Previous button, page counter, Next button.
//! Not rendered at all on the cover.
//!
//! After `render()`, `previous_button` and `next_button` hold the buttons'
//! screen areas for hit testing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::components::button::{BUTTON_HEIGHT, Button};
use crate::tui::ui::HitTarget;

pub const CONTROLS_HEIGHT: u16 = BUTTON_HEIGHT;

pub struct NavControls {
    pub counter: String,
    pub previous_disabled: bool,
    pub next_disabled: bool,
    pub focused: Option<HitTarget>,
    pub previous_button: Rect,
    pub next_button: Rect,
}

impl NavControls {
    pub fn new(
        counter: String,
        previous_disabled: bool,
        next_disabled: bool,
        focused: Option<HitTarget>,
    ) -> Self {
        Self {
            counter,
            previous_disabled,
            next_disabled,
            focused,
            previous_button: Rect::default(),
            next_button: Rect::default(),
        }
    }
}

impl Component for NavControls {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut previous = Button::new("◀ Previous")
            .disabled(self.previous_disabled)
            .focused(self.focused == Some(HitTarget::Previous));
        let mut next = Button::new("Next ▶")
            .disabled(self.next_disabled)
            .focused(self.focused == Some(HitTarget::Next));
        let counter_width = self.counter.width() as u16 + 4;

        let [previous_area, counter_area, next_area] = Layout::horizontal([
            Constraint::Length(previous.width()),
            Constraint::Length(counter_width),
            Constraint::Length(next.width()),
        ])
        .flex(Flex::SpaceBetween)
        .areas(area);

        previous.render(frame, previous_area);
        next.render(frame, next_area);
        self.previous_button = previous_area;
        self.next_button = next_area;

        // Counter sits on the button's label row
        let [_, counter_row, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(counter_area);
        frame.render_widget(
            Paragraph::new(self.counter.as_str())
                .style(
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center),
            counter_row,
        );
    }
}
