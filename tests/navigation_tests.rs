//! End-to-end reading sessions driven through the same input routing the
//! terminal uses, without a terminal.

use std::time::Instant;

use ratatui::layout::Rect;
use storybook::core::action::{Action, Effect, update};
use storybook::core::book::Book;
use storybook::core::config::{CliOverrides, StorybookConfig, resolve};
use storybook::core::navigator::NavCommand;
use storybook::core::state::App;
use storybook::tui::event::TuiEvent;
use storybook::tui::input::InputState;
use storybook::tui::ui::{HitMap, HitTarget};

struct Session {
    app: App,
    input: InputState,
    hits: HitMap,
    cues: usize,
}

impl Session {
    fn new() -> Self {
        let config = resolve(&StorybookConfig::default(), &CliOverrides::default());
        Self {
            app: App::from_config(Book::default(), &config),
            input: InputState::new(&config),
            hits: HitMap::default(),
            cues: 0,
        }
    }

    fn send(&mut self, event: TuiEvent) {
        let actions = self
            .input
            .route(&event, &self.app.navigator, &self.hits, Instant::now());
        for action in actions {
            if update(&mut self.app, action) == Effect::PlayCue {
                self.cues += 1;
            }
        }
    }

    fn drag(&mut self, from: u16, to: u16) {
        self.send(TuiEvent::MouseDown(from, 10));
        self.send(TuiEvent::MouseUp(to, 10));
    }

    fn page(&self) -> usize {
        self.app.current_page()
    }
}

#[test]
fn test_read_through_with_keyboard() {
    let mut s = Session::new();

    s.send(TuiEvent::Enter);
    assert_eq!(s.page(), 1);
    assert_eq!(
        s.app.navigator.page_counter().as_deref(),
        Some("Page 1 of 10")
    );
    assert!(s.app.navigator.previous_disabled());
    assert!(!s.app.navigator.next_disabled());

    for _ in 0..9 {
        s.send(TuiEvent::ArrowRight);
    }
    assert_eq!(s.page(), 10);
    assert!(s.app.navigator.next_disabled());

    s.send(TuiEvent::Space);
    assert_eq!(s.page(), 10);

    s.send(TuiEvent::Home);
    assert_eq!(s.page(), 0);
    assert!(!s.app.navigator.controls_visible());

    // start + 9 next + restart; the no-op Space stays silent
    assert_eq!(s.cues, 11);
}

#[test]
fn test_left_arrow_stops_at_first_page() {
    let mut s = Session::new();
    s.send(TuiEvent::ArrowRight);
    s.send(TuiEvent::ArrowRight);
    assert_eq!(s.page(), 2);

    s.send(TuiEvent::ArrowLeft);
    s.send(TuiEvent::ArrowLeft);
    s.send(TuiEvent::ArrowLeft);
    assert_eq!(s.page(), 1);
    assert_eq!(s.cues, 3);
}

#[test]
fn test_enter_does_nothing_inside_the_story() {
    let mut s = Session::new();
    s.send(TuiEvent::Space);
    s.send(TuiEvent::Enter);
    assert_eq!(s.page(), 1);
}

#[test]
fn test_swipes_turn_pages_and_short_drags_do_not() {
    let mut s = Session::new();

    // 6 columns at 8 units each = 48 units: below the threshold
    s.drag(40, 34);
    assert_eq!(s.page(), 0);

    // Swipe left from the cover starts the story
    s.drag(60, 20);
    assert_eq!(s.page(), 1);

    s.drag(60, 20);
    assert_eq!(s.page(), 2);

    // Swipe right goes back, but never to the cover
    s.drag(20, 60);
    s.drag(20, 60);
    assert_eq!(s.page(), 1);
}

#[test]
fn test_clicking_illustration_turns_page_until_the_end() {
    let mut s = Session::new();
    s.app.navigator.go_to(9);
    s.hits
        .push(HitTarget::Illustration, Rect::new(0, 2, 80, 15), true);

    s.drag(10, 10);
    assert_eq!(s.page(), 10);

    s.drag(10, 10);
    assert_eq!(s.page(), 10);
}

#[test]
fn test_tenth_click_reveals_surprise_without_navigating() {
    let mut s = Session::new();
    for _ in 0..9 {
        s.drag(5, 5);
    }
    assert!(!s.app.surprise.is_visible());
    s.drag(5, 5);
    assert!(s.app.surprise.is_visible());
    assert_eq!(s.page(), 0);
    assert_eq!(s.app.surprise.clicks(), 0);
}

#[test]
fn test_direct_commands_from_any_state() {
    let mut app = App::new(Book::default());
    for page in 0..=10 {
        app.navigator.go_to(page);
        update(&mut app, Action::Navigate(NavCommand::Start));
        assert_eq!(app.current_page(), 1);

        app.navigator.go_to(page);
        update(&mut app, Action::Navigate(NavCommand::Restart));
        assert_eq!(app.current_page(), 0);
    }
}

#[test]
fn test_quick_double_click_on_start_turns_one_page() {
    let mut s = Session::new();
    // Both clicks are routed before the next frame replaces the cover's hit map
    s.hits.push(HitTarget::Start, Rect::new(30, 9, 17, 3), true);

    s.drag(35, 35);
    s.drag(35, 35);
    assert_eq!(s.page(), 1);
    assert_eq!(s.cues, 1);
    assert_eq!(s.app.navigator.transition().generation, 1);
    assert_eq!(s.app.surprise.clicks(), 2);
}
