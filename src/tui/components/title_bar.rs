//! # TitleBar Component
//!
//! Top line: the book's title on the left, key hints on the right.
//!
//! Purely presentational. It receives all data as props and has no
//! internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.book.title, app.navigator.is_cover());
//! title_bar.render(frame, area);
//! ```
//!
//! On the cover only quitting is hinted, since the cover has its own
//! "press Enter" line.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

const STORY_HINTS: &str = "←/→ turn · Home restart · Tab focus · q quit";
const COVER_HINTS: &str = "q quit";

pub struct TitleBar<'a> {
    pub title: &'a str,
    pub on_cover: bool,
}

impl<'a> TitleBar<'a> {
    pub fn new(title: &'a str, on_cover: bool) -> Self {
        Self { title, on_cover }
    }

    fn hints(&self) -> &'static str {
        if self.on_cover { COVER_HINTS } else { STORY_HINTS }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, hints_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

        frame.render_widget(
            Paragraph::new(format!("📖 {}", self.title)).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(self.hints())
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Right),
            hints_area,
        );
    }
}
