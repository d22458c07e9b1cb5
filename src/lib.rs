//! Pocket Arcade - two small arcade demos on a shared frame loop
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, fruit-catch rules)
//! - `renderer`: CPU frame buffer drawing plus WebGPU presentation
//! - `platform`: Window, key polling and the fixed-rate host loop
//! - `assets`: Sprite loading
//! - `settings`: Per-demo configuration
//! - `demos`: The two games on the host loop

pub mod assets;
pub mod demos;
pub mod error;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use demos::{BouncingBall, FruitCatch};
pub use error::{Error, Result};
pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Host loop rate (updates per second)
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Maximum catch-up updates per rendered frame
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame delta fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default window size for both demos
    pub const WINDOW_WIDTH: u32 = 1024;
    pub const WINDOW_HEIGHT: u32 = 768;

    /// Ball demo
    pub const BALL_SIZE: u32 = 100;
    pub const BALL_START_X: i32 = 10;
    pub const BALL_START_VX: f32 = 5.0;
    /// Added to vertical velocity every airborne frame
    pub const GRAVITY: f32 = 1.0;
    /// Fraction of downward speed kept (and inverted) on a ground bounce
    pub const BOUNCE_DAMPING: f32 = 0.6;
    /// Charge rate while the jump key is held on the ground
    pub const JUMP_CHARGE_STEP: f32 = 2.0;
    /// Most negative velocity a charged jump can reach
    pub const JUMP_FLOOR: f32 = -28.0;
    /// Velocity scale used for the squash effect (twice the jump floor)
    pub const SQUASH_RANGE: f32 = 56.0;

    /// Fruit-catch demo
    pub const SPAWN_INTERVAL_FRAMES: u64 = 120;
    pub const BASKET_BASE_SPEED: f32 = 7.0;
    pub const FRUIT_BASE_GRAVITY: f32 = 3.0;
    pub const FRUIT_GRAVITY_PER_LEVEL: f32 = 2.0;
    pub const SCORE_PER_LEVEL: u32 = 10;

    /// Background color shared by both demos
    pub const SKY: [u8; 4] = [145, 209, 255, 255];
}
