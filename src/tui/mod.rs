//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the book,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (page entrance, surprise popup up): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! One extra frame is drawn when animating stops so the last frame is the
//! settled one.

mod animation;
mod component;
mod components;
pub mod cue;
pub mod event;
pub mod input;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::book::Book;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::preload::{Preloader, spawn_preload};
use crate::tui::animation::EntranceAnimation;
use crate::tui::cue::{build_cue, ring};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};
use crate::tui::input::InputState;
use crate::tui::ui::HitMap;

/// TUI-specific presentation state (not part of core reading logic)
pub struct TuiState {
    pub input: InputState,
    /// Clickable regions from the most recent frame
    pub hit_map: HitMap,
    pub animation: EntranceAnimation,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            input: InputState::new(config),
            hit_map: HitMap::default(),
            animation: EntranceAnimation::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(book: Book, config: ResolvedConfig) -> std::io::Result<()> {
    if config.preload_enabled {
        spawn_preload(
            Preloader::new(Duration::from_secs(config.preload_timeout_secs)),
            book.illustration_urls(),
        );
    } else {
        info!("Illustration preloading disabled");
    }

    let mut app = App::from_config(book, &config);
    let mut tui = TuiState::new(&config);
    let mut cue = build_cue(&config);

    let mut terminal = ratatui::init();
    let mouse_guard = TerminalModeGuard::new()
        .map_err(|e| warn!("Mouse capture unavailable: {}", e))
        .ok();

    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;
    let mut was_animating = false;

    loop {
        let now = Instant::now();
        update(&mut app, Action::Tick(now));
        tui.animation.observe(app.navigator.transition(), now);

        let animating = tui.animation.is_running(now) || app.surprise.is_visible();
        if animating || was_animating {
            needs_redraw = true;
        }
        was_animating = animating;

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, now))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let actions = tui
                .input
                .route(&event, &app.navigator, &tui.hit_map, Instant::now());
            for action in actions {
                debug!("Event loop action: {:?}", action);
                match update(&mut app, action) {
                    Effect::PlayCue => ring(cue.as_mut()),
                    Effect::Quit => should_quit = true,
                    Effect::None => {}
                }
            }
            if should_quit {
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Closing the book on page {}", app.current_page());
    drop(mouse_guard);
    ratatui::restore();
    Ok(())
}
