//! Catch-the-fruit game rules
//!
//! Phases:
//! - `Playing`: basket moves, fruit spawns and falls
//! - `Paused`: everything frozen until confirm
//! - `GameOver`: a bomb was caught; confirm restarts with an empty field

use glam::{UVec2, Vec2};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::fruit::{Fruit, FruitKind};
use super::input::{Key, KeyState};
use super::rect::Rect;
use crate::consts::*;

/// Current phase of the fruit-catch game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchPhase {
    Playing,
    Paused,
    GameOver,
}

/// Things that happened during one step (for logging and scorekeeping)
#[derive(Debug, Clone, PartialEq)]
pub enum CatchEvent {
    Spawned { id: u32, kind: FruitKind },
    Caught { id: u32, kind: FruitKind },
    Expired { id: u32, kind: FruitKind },
    GameOver { score: u32 },
    Paused,
    Resumed,
    Restarted,
}

/// Sprite dimensions the rules need for bounds tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSizes {
    pub basket: Vec2,
    fruits: [Vec2; FruitKind::ALL.len()],
}

impl SpriteSizes {
    pub fn new(basket: Vec2, fruit: impl Fn(FruitKind) -> Vec2) -> Self {
        Self {
            basket,
            fruits: FruitKind::ALL.map(fruit),
        }
    }

    pub fn fruit(&self, kind: FruitKind) -> Vec2 {
        self.fruits[kind as usize]
    }
}

/// The player's basket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basket {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Basket {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Does this fruit land in the basket?
    pub fn catches(&self, fruit: &Fruit) -> bool {
        fruit.pos.y > self.pos.y && self.rect().contains_span_x(&fruit.rect())
    }
}

/// Complete fruit-catch state
#[derive(Debug, Clone)]
pub struct CatchState {
    pub phase: CatchPhase,
    /// Playing frames since the last (re)start
    pub frame: u64,
    pub score: u32,
    pub level: u32,
    pub basket: Basket,
    /// Active fruit in spawn order
    pub fruits: Vec<Fruit>,
    sizes: SpriteSizes,
    rng: Pcg32,
    next_id: u32,
}

impl CatchState {
    /// Fresh game with the basket centred on the floor
    pub fn new(seed: u64, sizes: SpriteSizes, window: UVec2) -> Self {
        let window = window.as_vec2();
        Self {
            phase: CatchPhase::Playing,
            frame: 0,
            score: 0,
            level: 0,
            basket: Basket {
                pos: Vec2::new(
                    ((window.x - sizes.basket.x) / 2.0).max(0.0),
                    window.y - sizes.basket.y,
                ),
                size: sizes.basket,
            },
            fruits: Vec::new(),
            sizes,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn sizes(&self) -> &SpriteSizes {
        &self.sizes
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one random fruit just above the top edge
    pub fn spawn_fruit(&mut self, window_width: f32) -> &Fruit {
        let kind = FruitKind::random(&mut self.rng);
        let size = self.sizes.fruit(kind);
        let max_x = (window_width - size.x).max(0.0);
        let x = self.rng.random_range(0.0..=max_x);
        let id = self.next_entity_id();

        self.fruits.push(Fruit {
            id,
            kind,
            pos: Vec2::new(x, -size.y),
            size,
            gravity: FRUIT_BASE_GRAVITY + self.level as f32 * FRUIT_GRAVITY_PER_LEVEL,
        });
        &self.fruits[self.fruits.len() - 1]
    }

    /// Back to an empty field with zero score
    pub fn restart(&mut self) {
        self.score = 0;
        self.level = 0;
        self.frame = 0;
        self.fruits.clear();
        self.phase = CatchPhase::Playing;
    }

    /// Basket speed for the current level
    pub fn basket_speed(&self) -> f32 {
        BASKET_BASE_SPEED + self.level as f32
    }
}

/// Advance the game by one frame
pub fn step(state: &mut CatchState, keys: &dyn KeyState, window: UVec2) -> Vec<CatchEvent> {
    let mut events = Vec::new();

    // Frozen phases only listen for confirm
    match state.phase {
        CatchPhase::Paused => {
            if keys.is_pressed(Key::Confirm) {
                state.phase = CatchPhase::Playing;
                events.push(CatchEvent::Resumed);
            }
            return events;
        }
        CatchPhase::GameOver => {
            if keys.is_pressed(Key::Confirm) {
                state.restart();
                events.push(CatchEvent::Restarted);
            }
            return events;
        }
        CatchPhase::Playing => {}
    }

    if keys.is_pressed(Key::Pause) {
        state.phase = CatchPhase::Paused;
        events.push(CatchEvent::Paused);
        return events;
    }

    let window = window.as_vec2();
    move_basket(state, keys, window);

    state.frame += 1;
    if state.frame % SPAWN_INTERVAL_FRAMES == 0 {
        let fruit = state.spawn_fruit(window.x);
        events.push(CatchEvent::Spawned {
            id: fruit.id,
            kind: fruit.kind,
        });
    }

    update_fruits(state, window, &mut events);

    state.level = state.score / SCORE_PER_LEVEL;
    events
}

fn move_basket(state: &mut CatchState, keys: &dyn KeyState, window: Vec2) {
    // Stay on the floor and on screen even if the window was resized
    let max_x = (window.x - state.basket.size.x).max(0.0);
    state.basket.pos.x = state.basket.pos.x.clamp(0.0, max_x);
    state.basket.pos.y = window.y - state.basket.size.y;

    let speed = state.basket_speed();
    for (key, dx) in [(Key::Left, -speed), (Key::Right, speed)] {
        if !keys.is_pressed(key) {
            continue;
        }
        let mut moved = state.basket.rect();
        moved.pos.x += dx;
        if moved.within_width(window.x) {
            state.basket.pos.x = moved.pos.x;
        }
    }
}

/// Move every fruit once and resolve catches and misses.
///
/// The list is rebuilt in order, so removals never skip or repeat a fruit.
/// A bomb ends processing immediately; fruit behind it keep their state.
fn update_fruits(state: &mut CatchState, window: Vec2, events: &mut Vec<CatchEvent>) {
    let basket = state.basket;
    let mut pending = std::mem::take(&mut state.fruits).into_iter();
    let mut kept = Vec::with_capacity(pending.len());

    while let Some(mut fruit) = pending.next() {
        fruit.fall();

        if basket.catches(&fruit) {
            if !fruit.kind.scores() {
                log::debug!("bomb {} caught at score {}", fruit.id, state.score);
                state.phase = CatchPhase::GameOver;
                events.push(CatchEvent::GameOver { score: state.score });
                kept.extend(pending);
                break;
            }
            state.score += 1;
            events.push(CatchEvent::Caught {
                id: fruit.id,
                kind: fruit.kind,
            });
            continue;
        }

        if fruit.pos.y > window.y {
            events.push(CatchEvent::Expired {
                id: fruit.id,
                kind: fruit.kind,
            });
            continue;
        }

        kept.push(fruit);
    }

    state.fruits = kept;
}
