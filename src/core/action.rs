//! # Actions
//!
//! Everything that can happen in the storybook becomes an `Action`.
//! User presses the right arrow? That's `Action::Navigate(NavCommand::Next)`.
//! User clicks anywhere? That's `Action::Click(now)`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the adapter should perform. No side effects here. The bell is
//! rung elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::time::Instant;

use log::debug;

use crate::core::navigator::NavCommand;
use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Navigate(NavCommand),
    /// A click anywhere on screen, for the easter egg.
    Click(Instant),
    /// Periodic clock tick used to expire timed overlays.
    Tick(Instant),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A page transition happened; give audible feedback.
    PlayCue,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(command) => {
            let from = app.navigator.current_page();
            if command.apply_to(&mut app.navigator) {
                debug!(
                    "{:?}: page {} -> {}",
                    command,
                    from,
                    app.navigator.current_page()
                );
                Effect::PlayCue
            } else {
                debug!("{:?} ignored on page {}", command, from);
                Effect::None
            }
        }
        Action::Click(now) => {
            app.surprise.record_click(now);
            Effect::None
        }
        Action::Tick(now) => {
            app.surprise.expire(now);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use std::time::Duration;

    fn nav(app: &mut App, command: NavCommand) -> Effect {
        update(app, Action::Navigate(command))
    }

    #[test]
    fn test_successful_navigation_plays_cue() {
        let mut app = test_app();
        assert_eq!(nav(&mut app, NavCommand::Start), Effect::PlayCue);
        assert_eq!(nav(&mut app, NavCommand::Next), Effect::PlayCue);
        assert_eq!(nav(&mut app, NavCommand::Previous), Effect::PlayCue);
        assert_eq!(nav(&mut app, NavCommand::Restart), Effect::PlayCue);
    }

    #[test]
    fn test_noop_navigation_is_silent() {
        let mut app = test_app();
        assert_eq!(nav(&mut app, NavCommand::Previous), Effect::None);
        nav(&mut app, NavCommand::Start);
        assert_eq!(nav(&mut app, NavCommand::Previous), Effect::None);
        app.navigator.go_to(10);
        assert_eq!(nav(&mut app, NavCommand::Next), Effect::None);
        assert_eq!(app.current_page(), 10);
    }

    #[test]
    fn test_full_read_through_scenario() {
        let mut app = test_app();
        nav(&mut app, NavCommand::Start);
        assert_eq!(app.current_page(), 1);
        assert_eq!(app.navigator.page_counter().as_deref(), Some("Page 1 of 10"));
        assert!(app.navigator.previous_disabled());
        assert!(!app.navigator.next_disabled());

        for _ in 0..9 {
            nav(&mut app, NavCommand::Next);
        }
        assert_eq!(app.current_page(), 10);
        assert!(app.navigator.next_disabled());

        assert_eq!(nav(&mut app, NavCommand::Next), Effect::None);
        assert_eq!(app.current_page(), 10);

        nav(&mut app, NavCommand::Restart);
        assert_eq!(app.current_page(), 0);
        assert!(!app.navigator.controls_visible());
    }

    #[test]
    fn test_clicks_do_not_navigate() {
        let mut app = test_app();
        let now = Instant::now();
        for _ in 0..10 {
            assert_eq!(update(&mut app, Action::Click(now)), Effect::None);
        }
        assert_eq!(app.current_page(), 0);
        assert!(app.surprise.is_visible());

        update(&mut app, Action::Tick(now + Duration::from_secs(3)));
        assert!(!app.surprise.is_visible());
    }

    #[test]
    fn test_click_with_huge_configured_duration_does_not_panic() {
        use crate::core::book::Book;
        use crate::core::config::{CliOverrides, parse_config, resolve};

        let contents = "[easter_egg]\nclicks = 1\nduration_secs = 9223372036854775807\n";
        let config = parse_config(contents).unwrap();
        let resolved = resolve(&config, &CliOverrides::default());
        let mut app = App::from_config(Book::default(), &resolved);
        let now = Instant::now();
        assert_eq!(update(&mut app, Action::Click(now)), Effect::None);
        assert!(app.surprise.is_visible());
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        assert_eq!(app.current_page(), 0);
    }
}
