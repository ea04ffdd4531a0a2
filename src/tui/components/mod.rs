//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Every component is a props struct implementing [`Component`]:
//! built fresh each frame from `App` state, rendered once, dropped.
//!
//! - `TitleBar`: book title and key hints
//! - `CoverPage`: title screen with the Start Reading button
//! - `StoryPage`: illustration panel, text, and Read Again on the last page
//! - `NavControls`: Previous / page counter / Next
//! - `SurpriseOverlay`: the easter-egg popup
//! - `Button`: shared by all of the above
//!
//! Components that contain clickable things write the screen areas of those
//! things back into public fields during `render()`. `ui::draw_ui` collects
//! them into the frame's hit map.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── button.rs
//! ├── cover.rs
//! ├── nav_controls.rs
//! ├── story_page.rs
//! ├── surprise.rs
//! └── title_bar.rs
//! ```
//!
//! [`Component`]: crate::tui::component::Component

pub mod button;
pub mod cover;
pub mod nav_controls;
pub mod story_page;
pub mod surprise;
mod title_bar;

pub use cover::CoverPage;
pub use nav_controls::{CONTROLS_HEIGHT, NavControls};
pub use story_page::StoryPage;
pub use surprise::SurpriseOverlay;
pub use title_bar::TitleBar;
