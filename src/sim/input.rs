//! Key polling
//!
//! The simulation only asks "is this key held right now?". The host feeds
//! press/release events into a [`HeldKeys`] and hands it over as a
//! [`KeyState`] each update.

use std::collections::HashSet;

/// Logical keys the demos react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Jump,
    Pause,
    Confirm,
}

/// Capability set: which keys are currently held
pub trait KeyState {
    fn is_pressed(&self, key: Key) -> bool;
}

/// Set of currently held keys
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    down: HashSet<Key>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release
    pub fn set(&mut self, key: Key, pressed: bool) {
        if pressed {
            self.down.insert(key);
        } else {
            self.down.remove(&key);
        }
    }

    /// Release everything (window lost focus)
    pub fn clear(&mut self) {
        self.down.clear();
    }
}

impl KeyState for HeldKeys {
    fn is_pressed(&self, key: Key) -> bool {
        self.down.contains(&key)
    }
}

impl<const N: usize> From<[Key; N]> for HeldKeys {
    fn from(keys: [Key; N]) -> Self {
        Self {
            down: keys.into_iter().collect(),
        }
    }
}
