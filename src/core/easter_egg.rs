//! # Easter Egg
//!
//! Counts every click anywhere in the book. On the Nth click a surprise
//! message pops up for a few seconds and the count starts over.
//!
//! Time is passed in rather than read, so the whole thing stays pure.

use std::time::{Duration, Instant};

pub const DEFAULT_SURPRISE_CLICKS: u32 = 10;
pub const DEFAULT_SURPRISE_DURATION: Duration = Duration::from_secs(3);
pub const SURPRISE_MESSAGE: &str = "🎉 You found the secret! Great reading! 🦕";

#[derive(Debug, Clone)]
pub struct ClickCounter {
    clicks: u32,
    threshold: u32,
    duration: Duration,
    surprise: Visibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visibility {
    Hidden,
    Until(Instant),
    /// The duration doesn't fit in an `Instant`, so it never runs out.
    Forever,
}

impl ClickCounter {
    pub fn new(threshold: u32, duration: Duration) -> Self {
        Self {
            clicks: 0,
            threshold: threshold.max(1),
            duration,
            surprise: Visibility::Hidden,
        }
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    /// Registers one click. Returns `true` when this click revealed the surprise.
    pub fn record_click(&mut self, now: Instant) -> bool {
        self.clicks += 1;
        if self.clicks < self.threshold {
            return false;
        }
        self.clicks = 0;
        self.surprise = match now.checked_add(self.duration) {
            Some(until) => Visibility::Until(until),
            None => Visibility::Forever,
        };
        log::info!("Easter egg revealed");
        true
    }

    /// Hides the surprise once its time is up.
    pub fn expire(&mut self, now: Instant) {
        if matches!(self.surprise, Visibility::Until(until) if now >= until) {
            self.surprise = Visibility::Hidden;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.surprise != Visibility::Hidden
    }
}

impl Default for ClickCounter {
    fn default() -> Self {
        Self::new(DEFAULT_SURPRISE_CLICKS, DEFAULT_SURPRISE_DURATION)
    }
}
