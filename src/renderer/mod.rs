//! Rendering module
//!
//! Scenes are drawn on the CPU into a [`Frame`]; [`FramePresenter`] puts the
//! finished frame on screen through WebGPU.

pub mod font;
pub mod frame;
pub mod present;
pub mod scenes;
pub mod sprite;

pub use frame::{DrawOptions, Frame};
pub use image::Rgba;
pub use present::FramePresenter;
pub use scenes::{draw_bounce, draw_catch};
pub use sprite::{Sprite, filled_circle};
