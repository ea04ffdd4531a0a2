//! Entrance animation for the active page.
//!
//! The navigator bumps a transition generation on every page switch. This
//! watches that number and slides the page in from the right whenever it
//! changes, so re-showing the same page replays the animation too.

use std::time::{Duration, Instant};

use crate::core::navigator::Transition;

pub const ENTRANCE_DURATION: Duration = Duration::from_millis(600);
/// How far right (in columns) a page starts before sliding into place.
pub const SLIDE_COLUMNS: f32 = 8.0;

#[derive(Debug, Default)]
pub struct EntranceAnimation {
    seen_generation: Option<u64>,
    started: Option<Instant>,
}

impl EntranceAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restarts the animation if `transition` is one we haven't shown yet.
    pub fn observe(&mut self, transition: Transition, now: Instant) {
        if self.seen_generation != Some(transition.generation) {
            self.seen_generation = Some(transition.generation);
            self.started = Some(now);
        }
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.started
            .is_some_and(|s| now.saturating_duration_since(s) < ENTRANCE_DURATION)
    }

    /// Columns the page is currently shifted to the right.
    pub fn offset(&self, now: Instant) -> u16 {
        let Some(started) = self.started else {
            return 0;
        };
        let t = now.saturating_duration_since(started).as_secs_f32()
            / ENTRANCE_DURATION.as_secs_f32();
        if t >= 1.0 {
            return 0;
        }
        ((1.0 - ease_out(t)) * SLIDE_COLUMNS).round() as u16
    }
}

/// Exponential ease-out: fast start, long settle.
fn ease_out(t: f32) -> f32 {
    1.0 - 2f32.powf(-10.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(generation: u64) -> Transition {
        Transition {
            page: 1,
            generation,
        }
    }

    #[test]
    fn test_first_observation_starts_animation() {
        let mut anim = EntranceAnimation::new();
        let now = Instant::now();
        assert!(!anim.is_running(now));
        anim.observe(transition(0), now);
        assert!(anim.is_running(now));
        assert_eq!(anim.offset(now), SLIDE_COLUMNS as u16);
    }

    #[test]
    fn test_offset_settles_to_zero() {
        let mut anim = EntranceAnimation::new();
        let now = Instant::now();
        anim.observe(transition(1), now);
        let mid = anim.offset(now + Duration::from_millis(100));
        assert!(mid < SLIDE_COLUMNS as u16);
        assert_eq!(anim.offset(now + ENTRANCE_DURATION), 0);
        assert!(!anim.is_running(now + ENTRANCE_DURATION));
    }

    #[test]
    fn test_same_generation_does_not_restart() {
        let mut anim = EntranceAnimation::new();
        let now = Instant::now();
        anim.observe(transition(1), now);
        let later = now + Duration::from_secs(1);
        anim.observe(transition(1), later);
        assert!(!anim.is_running(later));

        anim.observe(transition(2), later);
        assert!(anim.is_running(later));
    }
}
