//! # Input Adapters
//!
//! Turns keyboard, mouse clicks and mouse drags into [`NavCommand`]s.
//! None of these hold state except the in-progress drag and the
//! keyboard-focus ring, both purely presentational.
//!
//! | Input                     | Cover   | Story page k            |
//! |---------------------------|---------|-------------------------|
//! | → / Space / swipe left    | start   | next                    |
//! | ← / swipe right           | -       | previous                |
//! | Home                      | restart | restart                 |
//! | Enter                     | start   | -                       |
//! | click illustration        | -       | next (none on last)     |

use std::time::Instant;

use log::debug;

use crate::core::action::Action;
use crate::core::config::ResolvedConfig;
use crate::core::navigator::{NavCommand, Navigator};
use crate::tui::event::TuiEvent;
use crate::tui::ui::{HitMap, HitTarget};

// ============================================================================
// Keyboard
// ============================================================================

pub fn keyboard_command(event: &TuiEvent, page: usize) -> Option<NavCommand> {
    match event {
        TuiEvent::ArrowRight | TuiEvent::Space => Some(NavCommand::forward_from(page)),
        TuiEvent::ArrowLeft => Some(NavCommand::Previous),
        TuiEvent::Home => Some(NavCommand::Restart),
        TuiEvent::Enter if page == 0 => Some(NavCommand::Start),
        _ => None,
    }
}

// ============================================================================
// Pointer
// ============================================================================

/// What a click on `target` does. Disabled buttons and the last page's
/// illustration do nothing.
///
/// Several clicks can be routed against one frame's hit map, so a target
/// only counts while the page that draws it is still showing.
pub fn pointer_command(target: HitTarget, nav: &Navigator) -> Option<NavCommand> {
    match target {
        HitTarget::Start if nav.is_cover() => Some(NavCommand::Start),
        HitTarget::Previous if !nav.is_cover() && !nav.previous_disabled() => {
            Some(NavCommand::Previous)
        }
        HitTarget::Next if !nav.is_cover() && !nav.next_disabled() => Some(NavCommand::Next),
        HitTarget::Restart if nav.is_last_page() => Some(NavCommand::Restart),
        HitTarget::Illustration if !nav.is_cover() && !nav.is_last_page() => {
            Some(NavCommand::Next)
        }
        _ => None,
    }
}

// ============================================================================
// Swipe
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Result of a press/release pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Swipe(SwipeDirection),
    Tap,
}

/// Classifies a horizontal movement. `start - end > 0` means the pointer
/// moved left. Movements of `threshold` or less are not swipes.
pub fn classify_swipe(start: i64, end: i64, threshold: u32) -> Option<SwipeDirection> {
    let diff = start - end;
    if diff.unsigned_abs() <= u64::from(threshold) {
        return None;
    }
    if diff > 0 {
        Some(SwipeDirection::Left)
    } else {
        Some(SwipeDirection::Right)
    }
}

pub fn swipe_command(direction: SwipeDirection, page: usize) -> NavCommand {
    match direction {
        SwipeDirection::Left => NavCommand::forward_from(page),
        SwipeDirection::Right => NavCommand::Previous,
    }
}

/// Tracks a mouse drag between button-down and button-up.
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    threshold: u32,
    units_per_column: u32,
    start_column: Option<u16>,
}

impl SwipeDetector {
    pub fn new(threshold: u32, units_per_column: u32) -> Self {
        Self {
            threshold,
            units_per_column: units_per_column.max(1),
            start_column: None,
        }
    }

    pub fn press(&mut self, column: u16) {
        self.start_column = Some(column);
    }

    /// Ends the drag. `None` if there was no matching press.
    pub fn release(&mut self, column: u16) -> Option<Gesture> {
        let start = self.start_column.take()?;
        let units = i64::from(self.units_per_column);
        let gesture = match classify_swipe(
            i64::from(start) * units,
            i64::from(column) * units,
            self.threshold,
        ) {
            Some(direction) => Gesture::Swipe(direction),
            None => Gesture::Tap,
        };
        Some(gesture)
    }
}

// ============================================================================
// Focus visibility
// ============================================================================

/// Whether the user is driving with the keyboard (focus outlines shown) or
/// the mouse (outlines hidden).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusMode {
    #[default]
    Pointer,
    Keyboard,
}

/// Next focusable target after `current`, wrapping around.
pub fn cycle_focus(current: Option<HitTarget>, focusable: &[HitTarget]) -> Option<HitTarget> {
    if focusable.is_empty() {
        return None;
    }
    let next = current
        .and_then(|c| focusable.iter().position(|t| *t == c))
        .map(|i| (i + 1) % focusable.len())
        .unwrap_or(0);
    Some(focusable[next])
}

// ============================================================================
// Routing
// ============================================================================

/// Per-session input state: the drag in progress and the focus ring.
pub struct InputState {
    pub swipe: SwipeDetector,
    pub focus_mode: FocusMode,
    pub focused: Option<HitTarget>,
}

impl InputState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            swipe: SwipeDetector::new(config.swipe_threshold, config.units_per_column),
            focus_mode: FocusMode::default(),
            focused: None,
        }
    }

    /// Forgets the focused button once it no longer does anything on the
    /// current page (disabled, or gone with the page that drew it).
    pub fn drop_stale_focus(&mut self, nav: &Navigator) {
        if self
            .focused
            .is_some_and(|target| pointer_command(target, nav).is_none())
        {
            debug!("Dropping focus from {:?}", self.focused);
            self.focused = None;
        }
    }

    /// The focused target, if outlines are currently shown.
    pub fn visible_focus(&self) -> Option<HitTarget> {
        match self.focus_mode {
            FocusMode::Keyboard => self.focused,
            FocusMode::Pointer => None,
        }
    }

    /// Route one terminal event into zero or more core actions.
    ///
    /// `hits` is the hit map from the most recent frame.
    pub fn route(
        &mut self,
        event: &TuiEvent,
        nav: &Navigator,
        hits: &HitMap,
        now: Instant,
    ) -> Vec<Action> {
        match *event {
            TuiEvent::Quit | TuiEvent::ForceQuit => vec![Action::Quit],
            TuiEvent::Tab => {
                self.focus_mode = FocusMode::Keyboard;
                self.focused = cycle_focus(self.focused, &hits.focusable());
                debug!("Keyboard focus on {:?}", self.focused);
                Vec::new()
            }
            TuiEvent::MouseDown(column, _row) => {
                self.focus_mode = FocusMode::Pointer;
                self.swipe.press(column);
                Vec::new()
            }
            TuiEvent::MouseUp(column, row) => match self.swipe.release(column) {
                Some(Gesture::Swipe(direction)) => {
                    debug!("Swipe {:?}", direction);
                    vec![Action::Navigate(swipe_command(
                        direction,
                        nav.current_page(),
                    ))]
                }
                Some(Gesture::Tap) => {
                    let mut actions = vec![Action::Click(now)];
                    if let Some(command) = hits
                        .hit_test(column, row)
                        .and_then(|target| pointer_command(target, nav))
                    {
                        actions.push(Action::Navigate(command));
                    }
                    actions
                }
                None => Vec::new(),
            },
            TuiEvent::Resize => Vec::new(),
            _ => keyboard_command(event, nav.current_page())
                .map(Action::Navigate)
                .into_iter()
                .collect(),
        }
    }
}
