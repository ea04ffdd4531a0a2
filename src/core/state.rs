//! # Application State
//!
//! Core reading-session state. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── book: Book                 // the story being read
//! ├── navigator: Navigator       // current page + last transition
//! └── surprise: ClickCounter     // easter egg click counter
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::time::Duration;

use crate::core::book::Book;
use crate::core::config::ResolvedConfig;
use crate::core::easter_egg::ClickCounter;
use crate::core::navigator::Navigator;

pub struct App {
    pub book: Book,
    pub navigator: Navigator,
    pub surprise: ClickCounter,
}

impl App {
    pub fn new(book: Book) -> Self {
        let navigator = Navigator::new(book.len());
        Self {
            book,
            navigator,
            surprise: ClickCounter::default(),
        }
    }

    pub fn from_config(book: Book, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(book);
        app.surprise = ClickCounter::new(
            config.surprise_clicks,
            Duration::from_secs(config.surprise_duration_secs),
        );
        app
    }

    pub fn current_page(&self) -> usize {
        self.navigator.current_page()
    }
}
