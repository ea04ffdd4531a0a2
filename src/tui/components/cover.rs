//! # Cover Page Component
//!
//! Title, subtitle, a little dinosaur and the "Start Reading" button.
//! No navigation controls are shown here.
//!
//! After `render()`, `start_button` holds the button's screen area for hit
//! testing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::button::{BUTTON_HEIGHT, Button};

const DINO: &[&str] = &[
    "               __",
    "              / _)",
    "     _.----._/ /",
    "    /         /",
    " __/ (  | (  |",
    "/__.-'|_|--|_|",
];

pub struct CoverPage<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub start_focused: bool,
    pub start_button: Rect,
}

impl<'a> CoverPage<'a> {
    pub fn new(title: &'a str, subtitle: &'a str, start_focused: bool) -> Self {
        Self {
            title,
            subtitle,
            start_focused,
            start_button: Rect::default(),
        }
    }
}

impl Component for CoverPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let art_height = DINO.len() as u16;

        let [art_area, _, title_area, subtitle_area, _, button_row, hint_area] =
            Layout::vertical([
                Constraint::Length(art_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(BUTTON_HEIGHT),
                Constraint::Length(1),
            ])
            .flex(Flex::Center)
            .areas(area);

        // The art lines share a left edge, so pad them to a common width
        // before centering or the dinosaur comes apart.
        let art_width = DINO.iter().map(|l| l.len()).max().unwrap_or(0);
        let art: Vec<Line> = DINO
            .iter()
            .map(|l| {
                Line::from(Span::styled(
                    format!("{:<art_width$}", l),
                    Style::default().fg(Color::Green),
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(art).alignment(Alignment::Center), art_area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                self.title,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                self.subtitle,
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center),
            subtitle_area,
        );

        let mut button = Button::new("Start Reading")
            .focused(self.start_focused)
            .accent(Color::LightGreen);
        let [button_area] = Layout::horizontal([Constraint::Length(button.width())])
            .flex(Flex::Center)
            .areas(button_row);
        button.render(frame, button_area);
        self.start_button = button_area;

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Press Enter, → or Space to begin",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
            hint_area,
        );
    }
}
