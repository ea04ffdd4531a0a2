//! # Navigator
//!
//! The single authority for which page is showing. Every transition goes
//! through here so the view can never disagree with the state.
//!
//! ```text
//!            start                 next              next
//!   ┌───┐ ─────────────► ┌───┐ ──────────► ┌───┐ ─ ─ ─► ┌───┐
//!   │ 0 │                │ 1 │             │ 2 │        │ N │
//!   └───┘ ◄───────────── └───┘ ◄────────── └───┘ ◄─ ─ ─ └───┘
//!   cover    restart (*)        previous
//! ```
//!
//! `previous` stops at page 1. Only `restart` goes back to the cover.
//!
//! Input adapters never call these methods directly. They produce a
//! [`NavCommand`], which is applied through the [`NavigationSink`] trait.

/// The last successful page switch, read by the view to replay the entrance
/// animation. `generation` increases even when the same page is shown again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transition {
    pub page: usize,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    current_page: usize,
    total_pages: usize,
    transition: Transition,
}

impl Navigator {
    /// Creates a navigator on the cover of a book with `total_pages` story pages.
    pub fn new(total_pages: usize) -> Self {
        Self {
            current_page: 0,
            total_pages,
            transition: Transition::default(),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn is_cover(&self) -> bool {
        self.current_page == 0
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page == self.total_pages
    }

    /// Shows page `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index > self.total_pages {
            log::debug!("go_to({index}) ignored: book has {} pages", self.total_pages);
            return false;
        }
        self.current_page = index;
        self.transition = Transition {
            page: index,
            generation: self.transition.generation + 1,
        };
        log::debug!(
            "Showing page {} (generation {})",
            index,
            self.transition.generation
        );
        true
    }

    pub fn next(&mut self) -> bool {
        if self.current_page >= self.total_pages {
            return false;
        }
        self.go_to(self.current_page + 1)
    }

    pub fn previous(&mut self) -> bool {
        if self.current_page <= 1 {
            return false;
        }
        self.go_to(self.current_page - 1)
    }

    pub fn start(&mut self) -> bool {
        self.go_to(1)
    }

    pub fn restart(&mut self) -> bool {
        self.go_to(0)
    }

    // ------------------------------------------------------------------------
    // Derived UI state
    // ------------------------------------------------------------------------

    pub fn controls_visible(&self) -> bool {
        self.current_page != 0
    }

    pub fn previous_disabled(&self) -> bool {
        self.current_page == 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current_page == self.total_pages
    }

    /// `"Page k of N"` on story pages, `None` on the cover.
    pub fn page_counter(&self) -> Option<String> {
        (self.current_page > 0)
            .then(|| format!("Page {} of {}", self.current_page, self.total_pages))
    }
}

/// Receiver for the four navigation operations.
///
/// Each method returns `true` if a page transition happened.
pub trait NavigationSink {
    fn on_next(&mut self) -> bool;
    fn on_previous(&mut self) -> bool;
    fn on_start(&mut self) -> bool;
    fn on_restart(&mut self) -> bool;
}

impl NavigationSink for Navigator {
    fn on_next(&mut self) -> bool {
        self.next()
    }

    fn on_previous(&mut self) -> bool {
        self.previous()
    }

    fn on_start(&mut self) -> bool {
        self.start()
    }

    fn on_restart(&mut self) -> bool {
        self.restart()
    }
}

/// What every input adapter boils down to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Start,
    Next,
    Previous,
    Restart,
}

impl NavCommand {
    /// "Forward" means start on the cover and next everywhere else.
    pub fn forward_from(page: usize) -> Self {
        if page == 0 {
            NavCommand::Start
        } else {
            NavCommand::Next
        }
    }

    pub fn apply_to<S: NavigationSink + ?Sized>(self, sink: &mut S) -> bool {
        match self {
            NavCommand::Start => sink.on_start(),
            NavCommand::Next => sink.on_next(),
            NavCommand::Previous => sink.on_previous(),
            NavCommand::Restart => sink.on_restart(),
        }
    }
}
