//! Storybook library exports for testing

pub mod core;
pub mod preload;
pub mod tui;

#[cfg(test)]
pub mod test_support;
