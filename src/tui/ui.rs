use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CONTROLS_HEIGHT, CoverPage, NavControls, StoryPage, SurpriseOverlay, TitleBar,
};

/// Things on screen that react to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Start,
    Previous,
    Next,
    Restart,
    Illustration,
}

impl HitTarget {
    /// Buttons take keyboard focus; the illustration doesn't.
    pub fn is_button(self) -> bool {
        !matches!(self, HitTarget::Illustration)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub target: HitTarget,
    pub area: Rect,
    pub enabled: bool,
}

/// Where clickable things were drawn in the last frame, in draw order.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<HitRegion>,
}

impl HitMap {
    pub fn push(&mut self, target: HitTarget, area: Rect, enabled: bool) {
        self.regions.push(HitRegion {
            target,
            area,
            enabled,
        });
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Topmost target under the given cell. Later regions win.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|r| r.area.contains(position))
            .map(|r| r.target)
    }

    /// Enabled buttons, in tab order.
    pub fn focusable(&self) -> Vec<HitTarget> {
        self.regions
            .iter()
            .filter(|r| r.enabled && r.target.is_button())
            .map(|r| r.target)
            .collect()
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    use Constraint::{Length, Min};

    let nav = &app.navigator;
    let controls_height = if nav.controls_visible() { CONTROLS_HEIGHT } else { 0 };
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(controls_height)]);
    let [title_area, _, main_area, controls_area] = layout.areas(frame.area());

    tui.hit_map.clear();
    tui.input.drop_stale_focus(nav);
    let focus = tui.input.visible_focus();

    TitleBar::new(app.book.title, nav.is_cover()).render(frame, title_area);

    // Entrance animation: the page slides in from the right
    let offset = tui.animation.offset(now).min(main_area.width);
    let page_area = Rect {
        x: main_area.x + offset,
        width: main_area.width - offset,
        ..main_area
    };

    match app.book.page(nav.current_page()) {
        None => {
            let mut cover = CoverPage::new(
                app.book.title,
                app.book.subtitle,
                focus == Some(HitTarget::Start),
            );
            cover.render(frame, page_area);
            tui.hit_map.push(HitTarget::Start, cover.start_button, true);
        }
        Some(page) => {
            let mut story =
                StoryPage::new(page, nav.is_last_page(), focus == Some(HitTarget::Restart));
            story.render(frame, page_area);
            tui.hit_map
                .push(HitTarget::Illustration, story.illustration_area, true);
            if let Some(area) = story.restart_button {
                tui.hit_map.push(HitTarget::Restart, area, true);
            }
        }
    }

    if let Some(counter) = nav.page_counter() {
        let mut controls = NavControls::new(
            counter,
            nav.previous_disabled(),
            nav.next_disabled(),
            focus,
        );
        controls.render(frame, controls_area);
        tui.hit_map.push(
            HitTarget::Previous,
            controls.previous_button,
            !nav.previous_disabled(),
        );
        tui.hit_map
            .push(HitTarget::Next, controls.next_button, !nav.next_disabled());
    }

    if app.surprise.is_visible() {
        let area = frame.area();
        SurpriseOverlay.render(frame, area);
    }
}
