//! Per-demo settings
//!
//! Read once at startup from an optional JSON file next to the binary's
//! working directory. Fields left out of the file keep the demo's defaults.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use glam::UVec2;
use serde::Deserialize;

use crate::consts::{TICKS_PER_SECOND, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::Result;

/// Settings file read by the ball demo
pub const BOUNCING_BALL_FILE: &str = "bouncing_ball.json";
/// Settings file read by the fruit-catch demo
pub const FRUIT_CATCH_FILE: &str = "fruit_catch.json";

/// Window and runtime configuration for one demo
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Initial window width (logical pixels)
    pub window_width: u32,
    /// Initial window height (logical pixels)
    pub window_height: u32,
    pub title: String,
    /// Update rate of the host loop
    pub ticks_per_second: u32,
    /// Fixed RNG seed; the clock is used when absent
    pub seed: Option<u64>,
    /// Directory holding `<name>.png` sprites
    pub asset_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            title: String::new(),
            ticks_per_second: TICKS_PER_SECOND,
            seed: None,
            asset_dir: PathBuf::from("assets/images"),
        }
    }
}

/// What a settings file may contain. Every field is optional.
#[derive(Debug, Default, Deserialize)]
struct Overrides {
    window_width: Option<u32>,
    window_height: Option<u32>,
    title: Option<String>,
    ticks_per_second: Option<u32>,
    seed: Option<u64>,
    asset_dir: Option<PathBuf>,
}

impl Settings {
    /// Defaults for the ball demo
    pub fn bouncing_ball() -> Self {
        Self {
            title: "Bouncing Ball".to_string(),
            ..Self::default()
        }
    }

    /// Defaults for the fruit-catch demo
    pub fn fruit_catch() -> Self {
        Self {
            title: "Fruit Catch".to_string(),
            ..Self::default()
        }
    }

    /// Initial window size
    pub fn window_size(&self) -> UVec2 {
        UVec2::new(self.window_width, self.window_height)
    }

    /// Load settings from `path`, falling back to `defaults` if the file
    /// does not exist. A file that exists but does not parse is an error.
    pub fn load(path: &Path, defaults: Settings) -> Result<Self> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No {} found, using default settings", path.display());
                return Ok(defaults);
            }
            Err(e) => return Err(e.into()),
        };

        let settings = Self::from_json(&json, defaults)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Apply the fields present in `json` on top of `defaults`
    pub fn from_json(json: &str, defaults: Settings) -> Result<Self> {
        let overrides: Overrides = serde_json::from_str(json)?;
        Ok(defaults.apply(overrides))
    }

    fn apply(self, o: Overrides) -> Self {
        Self {
            window_width: o.window_width.unwrap_or(self.window_width),
            window_height: o.window_height.unwrap_or(self.window_height),
            title: o.title.unwrap_or(self.title),
            ticks_per_second: o.ticks_per_second.unwrap_or(self.ticks_per_second).max(1),
            seed: o.seed.or(self.seed),
            asset_dir: o.asset_dir.unwrap_or(self.asset_dir),
        }
    }
}
