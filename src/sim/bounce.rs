//! Bouncing ball physics
//!
//! One ball, integer position, float velocity. Runs once per host tick
//! with a fixed timestep of one frame.

use glam::UVec2;

use super::input::{Key, KeyState};
use crate::consts::*;

/// The ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Top-left corner in pixels
    pub x: i32,
    pub y: i32,
    /// Horizontal velocity (pixels/frame)
    pub vx: f32,
    /// Vertical velocity (pixels/frame, positive is down)
    pub vy: f32,
    /// Sprite dimensions used for edge tests
    pub size: UVec2,
    /// Jump key held while grounded this frame
    pub charging: bool,
}

impl Ball {
    /// Ball resting on the floor near the left edge, drifting right
    pub fn new(size: UVec2, window: UVec2) -> Self {
        Self {
            x: BALL_START_X,
            y: window.y as i32 - size.y as i32,
            vx: BALL_START_VX,
            vy: 0.0,
            size,
            charging: false,
        }
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.size.y as i32
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.size.x as i32
    }

    /// Lower edge at or past the bottom of the window
    pub fn is_grounded(&self, window: UVec2) -> bool {
        self.bottom() >= window.y as i32
    }

    /// Touching the wall it is moving toward
    pub fn is_hitting_wall(&self, window: UVec2) -> bool {
        let right_wall = self.right() >= window.x as i32 && self.vx > 0.0;
        let left_wall = self.x <= 0 && self.vx < 0.0;
        right_wall || left_wall
    }

    /// Vertical squash while charging a jump, 1.0 otherwise
    pub fn squash(&self) -> f32 {
        if self.charging {
            (SQUASH_RANGE + self.vy) / SQUASH_RANGE
        } else {
            1.0
        }
    }
}

/// Advance the ball by one frame
pub fn step(ball: &mut Ball, keys: &dyn KeyState, window: UVec2) {
    let grounded = ball.is_grounded(window);
    let hit_wall = ball.is_hitting_wall(window);

    log::trace!("ball bottom {} vy {}", ball.bottom(), ball.vy);

    // Charging a jump pins the ball in place
    if grounded && keys.is_pressed(Key::Jump) {
        if ball.vy > 0.0 {
            ball.vy = 0.0;
        }
        if ball.vy > JUMP_FLOOR {
            ball.vy = (ball.vy - JUMP_CHARGE_STEP).max(JUMP_FLOOR);
        }
        ball.charging = true;
        return;
    }
    ball.charging = false;

    if !grounded {
        ball.vy += GRAVITY;
    } else if ball.vy > 0.0 {
        ball.vy *= -BOUNCE_DAMPING;
    }

    if hit_wall {
        ball.vx = -ball.vx;
    }

    ball.x += ball.vx as i32;
    ball.y += ball.vy as i32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::HeldKeys;
    use proptest::prelude::*;

    const WINDOW: UVec2 = UVec2::new(1024, 768);
    const SIZE: UVec2 = UVec2::new(100, 100);

    fn airborne(vy: f32) -> Ball {
        Ball {
            x: 400,
            y: 200,
            vx: 5.0,
            vy,
            size: SIZE,
            charging: false,
        }
    }

    #[test]
    fn test_new_ball_rests_on_floor() {
        let ball = Ball::new(SIZE, WINDOW);
        assert_eq!(ball.bottom(), 768);
        assert!(ball.is_grounded(WINDOW));
        assert_eq!(ball.x, 10);
        assert_eq!(ball.vx, 5.0);
    }

    #[test]
    fn test_resting_ball_only_drifts() {
        let mut ball = Ball::new(SIZE, WINDOW);
        let keys = HeldKeys::new();
        step(&mut ball, &keys, WINDOW);
        assert_eq!(ball.vy, 0.0);
        assert_eq!(ball.x, 15);
        assert_eq!(ball.bottom(), 768);
    }

    #[test]
    fn test_bounce_inverts_and_damps() {
        let mut ball = Ball::new(SIZE, WINDOW);
        ball.vy = 10.0;
        step(&mut ball, &HeldKeys::new(), WINDOW);
        assert!((ball.vy - -6.0).abs() < 1e-6);
        assert_eq!(ball.bottom(), 768 - 6);
    }

    #[test]
    fn test_jump_charge_reaches_floor_and_stops() {
        let mut ball = Ball::new(SIZE, WINDOW);
        ball.vy = 3.0;
        let keys = HeldKeys::from([Key::Jump]);
        let start = (ball.x, ball.y);

        for _ in 0..40 {
            step(&mut ball, &keys, WINDOW);
            assert!(ball.charging);
            assert!(ball.vy >= JUMP_FLOOR);
        }
        assert_eq!(ball.vy, JUMP_FLOOR);
        // Pinned while charging
        assert_eq!((ball.x, ball.y), start);
        assert!((ball.squash() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_release_launches_ball() {
        let mut ball = Ball::new(SIZE, WINDOW);
        let held = HeldKeys::from([Key::Jump]);
        for _ in 0..5 {
            step(&mut ball, &held, WINDOW);
        }
        assert_eq!(ball.vy, -10.0);

        step(&mut ball, &HeldKeys::new(), WINDOW);
        assert!(!ball.charging);
        assert_eq!(ball.squash(), 1.0);
        // Grounded with upward velocity: no bounce, no gravity, just lift off
        assert_eq!(ball.vy, -10.0);
        assert_eq!(ball.bottom(), 758);

        step(&mut ball, &HeldKeys::new(), WINDOW);
        assert_eq!(ball.vy, -9.0);
    }

    #[test]
    fn test_jump_ignored_in_air() {
        let mut ball = airborne(-4.0);
        step(&mut ball, &HeldKeys::from([Key::Jump]), WINDOW);
        assert!(!ball.charging);
        assert_eq!(ball.vy, -3.0);
    }

    #[test]
    fn test_right_wall_flips_once_per_contact() {
        let mut ball = airborne(0.0);
        ball.x = WINDOW.x as i32 - SIZE.x as i32 - 2;
        ball.y = WINDOW.y as i32 - SIZE.y as i32;
        let keys = HeldKeys::new();

        let mut flips = 0;
        let mut last_vx = ball.vx;
        for _ in 0..10 {
            step(&mut ball, &keys, WINDOW);
            if ball.vx.signum() != last_vx.signum() {
                flips += 1;
            }
            last_vx = ball.vx;
        }
        assert_eq!(flips, 1);
        assert!(ball.vx < 0.0);
    }

    #[test]
    fn test_no_oscillation_when_window_shrinks_past_ball() {
        let mut ball = airborne(0.0);
        ball.x = 900;
        ball.y = 300;
        // Window now ends well inside the ball's span
        let narrow = UVec2::new(600, 768);
        let keys = HeldKeys::new();

        step(&mut ball, &keys, narrow);
        assert!(ball.vx < 0.0);
        for _ in 0..5 {
            step(&mut ball, &keys, narrow);
            assert!(ball.vx < 0.0, "must keep heading back inside");
        }
    }

    #[test]
    fn test_left_wall_reflects() {
        let mut ball = airborne(0.0);
        ball.x = 0;
        ball.vx = -5.0;
        step(&mut ball, &HeldKeys::new(), WINDOW);
        assert_eq!(ball.vx, 5.0);
        assert_eq!(ball.x, 5);
    }

    proptest! {
        #[test]
        fn prop_gravity_applies_while_airborne(vy in -28.0f32..20.0, y in 0i32..600) {
            let mut ball = airborne(vy);
            ball.y = y;
            prop_assume!(!ball.is_grounded(WINDOW));
            step(&mut ball, &HeldKeys::from([Key::Jump]), WINDOW);
            prop_assert!((ball.vy - (vy + GRAVITY)).abs() < 1e-4);
        }

        #[test]
        fn prop_bounce_never_positive(vy in 0.001f32..60.0, sink in 0i32..40) {
            let mut ball = Ball::new(SIZE, WINDOW);
            ball.y += sink;
            ball.vy = vy;
            step(&mut ball, &HeldKeys::new(), WINDOW);
            prop_assert!((ball.vy - (-BOUNCE_DAMPING * vy)).abs() < 1e-4);
            prop_assert!(ball.vy <= 0.0);
        }
    }
}
