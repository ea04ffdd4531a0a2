//! Audible feedback for page turns.
//!
//! The terminal bell is the only sound a terminal reliably has. Playing it
//! can fail (closed stdout, odd terminals); that must never get in the way of
//! turning the page, so [`ring`] swallows the error.

use std::io::{self, Write};

use log::debug;

use crate::core::config::ResolvedConfig;

pub trait Cue {
    fn play(&mut self) -> io::Result<()>;
}

/// Writes BEL to stdout.
pub struct TerminalBell;

impl Cue for TerminalBell {
    fn play(&mut self) -> io::Result<()> {
        let mut out = io::stdout();
        out.write_all(b"\x07")?;
        out.flush()
    }
}

/// Used when sound is turned off.
pub struct Silent;

impl Cue for Silent {
    fn play(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn build_cue(config: &ResolvedConfig) -> Box<dyn Cue> {
    if config.sound_enabled {
        Box::new(TerminalBell)
    } else {
        Box::new(Silent)
    }
}

/// Plays the cue, ignoring failures.
pub fn ring(cue: &mut dyn Cue) {
    if let Err(e) = cue.play() {
        debug!("Cue failed: {}", e);
    }
}
