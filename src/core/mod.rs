//! # Core Application Logic
//!
//! This module contains the storybook's reading logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Book (content)       │
//!                    │  • Navigator (pages)    │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ NavCommand
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │  Keyboard  │      │   Mouse    │      │   Drag     │
//!     │  adapter   │      │  buttons / │      │  (swipe)   │
//!     │            │      │ illustr.   │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`navigator`]: current page, the four transitions, derived controls
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`state`]: the `App` struct, one per reading session
//! - [`book`]: story text and illustration URLs
//! - [`easter_egg`]: the click-counting surprise
//! - [`config`]: settings from `~/.storybook/config.toml`
//!
//! `config` is the one exception to "no I/O": it reads and writes the
//! config file.

pub mod action;
pub mod book;
pub mod config;
pub mod easter_egg;
pub mod navigator;
pub mod state;
