//! # Surprise Overlay
//!
//! The easter-egg popup. Drawn on top of everything while visible, but it
//! doesn't take input: clicks and keys keep going to the book underneath.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::easter_egg::SURPRISE_MESSAGE;
use crate::tui::component::Component;

pub struct SurpriseOverlay;

impl Component for SurpriseOverlay {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = popup_rect(SURPRISE_MESSAGE.width() as u16 + 6, 5, area);

        frame.render_widget(Clear, overlay);

        let paragraph = Paragraph::new(SURPRISE_MESSAGE)
            .style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Magenta).bg(Color::LightYellow))
                    .padding(Padding::new(2, 2, 1, 0)),
            );
        frame.render_widget(paragraph, overlay);
    }
}

/// A `width` x `height` rect centered in `outer`, clamped to fit.
fn popup_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    Rect::new(
        outer.x + (outer.width - width) / 2,
        outer.y + (outer.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_popup_rect_is_centered_and_clamped() {
        let outer = Rect::new(0, 0, 80, 24);
        let rect = popup_rect(40, 5, outer);
        assert_eq!(rect, Rect::new(20, 9, 40, 5));

        let small = popup_rect(100, 50, Rect::new(0, 0, 30, 10));
        assert_eq!(small, Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn test_overlay_shows_message() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                SurpriseOverlay.render(f, area)
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("found"));
        assert!(text.contains("secret!"));
    }
}
