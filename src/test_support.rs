//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io;

use crate::core::book::Book;
use crate::core::state::App;
use crate::tui::cue::Cue;

/// Creates a test App on the cover of the default ten-page book.
pub fn test_app() -> App {
    App::new(Book::default())
}

/// A cue that counts how often it was played, optionally failing every time.
#[derive(Default)]
pub struct CountingCue {
    pub plays: usize,
    pub fail: bool,
}

impl Cue for CountingCue {
    fn play(&mut self) -> io::Result<()> {
        self.plays += 1;
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::Unsupported, "no audio"));
        }
        Ok(())
    }
}
