//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.storybook/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::easter_egg::{DEFAULT_SURPRISE_CLICKS, DEFAULT_SURPRISE_DURATION};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorybookConfig {
    #[serde(default)]
    pub sound: SoundConfig,
    #[serde(default)]
    pub gestures: GestureConfig,
    #[serde(default)]
    pub easter_egg: EasterEggConfig,
    #[serde(default)]
    pub preload: PreloadConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SoundConfig {
    pub enabled: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GestureConfig {
    pub swipe_threshold: Option<u32>,
    pub units_per_column: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EasterEggConfig {
    pub clicks: Option<u32>,
    pub duration_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PreloadConfig {
    pub enabled: Option<bool>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SWIPE_THRESHOLD: u32 = 50;
pub const DEFAULT_UNITS_PER_COLUMN: u32 = 8;
pub const DEFAULT_PRELOAD_TIMEOUT_SECS: u64 = 10;
/// Longest the surprise may stay up. Anything larger is clamped.
pub const MAX_SURPRISE_DURATION_SECS: u64 = 3600;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub sound_enabled: bool,
    pub swipe_threshold: u32,
    pub units_per_column: u32,
    pub surprise_clicks: u32,
    pub surprise_duration_secs: u64,
    pub preload_enabled: bool,
    pub preload_timeout_secs: u64,
}

/// Flags from the command line. `false` means "not specified".
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub mute: bool,
    pub no_preload: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.storybook/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".storybook").join("config.toml"))
}

/// Load config from `~/.storybook/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `StorybookConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<StorybookConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(StorybookConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(StorybookConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<StorybookConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Storybook Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [sound]
# enabled = true                 # Terminal bell on page turns (STORYBOOK_MUTE=1 or --mute to silence)

# [gestures]
# swipe_threshold = 50           # Drag distance (in units) before a drag counts as a swipe
# units_per_column = 8           # Units per terminal column (roughly pixels per cell)

# [easter_egg]
# clicks = 10
# duration_secs = 3

# [preload]
# enabled = true                 # STORYBOOK_NO_PRELOAD=1 or --no-preload to skip
# timeout_secs = 10
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &StorybookConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Sound: CLI mute → env mute → config → on
    let sound_enabled = !cli.mute
        && !env_flag("STORYBOOK_MUTE")
        && config.sound.enabled.unwrap_or(true);

    // Preload: CLI → env → config → on
    let preload_enabled = !cli.no_preload
        && !env_flag("STORYBOOK_NO_PRELOAD")
        && config.preload.enabled.unwrap_or(true);

    ResolvedConfig {
        sound_enabled,
        swipe_threshold: config
            .gestures
            .swipe_threshold
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD),
        units_per_column: config
            .gestures
            .units_per_column
            .unwrap_or(DEFAULT_UNITS_PER_COLUMN)
            .max(1),
        surprise_clicks: config.easter_egg.clicks.unwrap_or(DEFAULT_SURPRISE_CLICKS),
        surprise_duration_secs: config
            .easter_egg
            .duration_secs
            .unwrap_or(DEFAULT_SURPRISE_DURATION.as_secs())
            .min(MAX_SURPRISE_DURATION_SECS),
        preload_enabled,
        preload_timeout_secs: config
            .preload
            .timeout_secs
            .unwrap_or(DEFAULT_PRELOAD_TIMEOUT_SECS),
    }
}

/// An env var counts as set when it's present and not "0"/"false"/empty.
fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| is_truthy(&v))
        .unwrap_or(false)
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no"
    )
}
