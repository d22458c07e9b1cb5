//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call = one frame)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod bounce;
pub mod catch;
pub mod fruit;
pub mod input;
pub mod rect;

pub use bounce::Ball;
pub use catch::{Basket, CatchEvent, CatchPhase, CatchState, SpriteSizes};
pub use fruit::{Fruit, FruitKind};
pub use input::{HeldKeys, Key, KeyState};
pub use rect::Rect;
