//! Physical keyboard keys to logical game keys

use winit::keyboard::KeyCode;

use crate::sim::Key;

/// Logical keys driven by a physical key. Space both jumps (ball demo)
/// and confirms (fruit-catch).
pub fn logical_keys(code: KeyCode) -> &'static [Key] {
    match code {
        KeyCode::ArrowLeft | KeyCode::KeyA => &[Key::Left],
        KeyCode::ArrowRight | KeyCode::KeyD => &[Key::Right],
        KeyCode::Space => &[Key::Jump, Key::Confirm],
        KeyCode::Enter | KeyCode::NumpadEnter => &[Key::Confirm],
        KeyCode::KeyP | KeyCode::Escape => &[Key::Pause],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping() {
        assert_eq!(logical_keys(KeyCode::ArrowLeft), &[Key::Left]);
        assert_eq!(logical_keys(KeyCode::KeyD), &[Key::Right]);
        assert!(logical_keys(KeyCode::Space).contains(&Key::Jump));
        assert!(logical_keys(KeyCode::Space).contains(&Key::Confirm));
        assert_eq!(logical_keys(KeyCode::Escape), &[Key::Pause]);
        assert!(logical_keys(KeyCode::KeyQ).is_empty());
    }
}
