//! Platform abstraction layer
//!
//! Handles everything outside the simulation:
//! - Window creation and resize (winit)
//! - Keyboard state for polling
//! - Fixed-rate tick scheduling
//! - Handing frames to the GPU presenter

pub mod clock;
pub mod host;
pub mod keymap;

pub use clock::FixedStep;
pub use host::{Game, UpdateContext, run};
