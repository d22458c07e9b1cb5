//! The two demos, wired onto the host loop

use glam::{UVec2, Vec2};

use crate::assets::CatchSprites;
use crate::error::Result;
use crate::highscores::HighScores;
use crate::platform::{Game, UpdateContext};
use crate::renderer::{Frame, Sprite, draw_bounce, draw_catch};
use crate::sim::{Ball, CatchEvent, CatchState, SpriteSizes, bounce, catch};

/// A ball that bounces around the window and jumps on demand
pub struct BouncingBall {
    pub ball: Ball,
    sprite: Sprite,
}

impl BouncingBall {
    pub fn new(sprite: Sprite, window: UVec2) -> Self {
        Self {
            ball: Ball::new(UVec2::from(sprite.dimensions()), window),
            sprite,
        }
    }
}

impl Game for BouncingBall {
    fn update(&mut self, ctx: &UpdateContext<'_>) -> Result<()> {
        bounce::step(&mut self.ball, ctx.keys, ctx.window);
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        draw_bounce(frame, &self.ball, &self.sprite);
    }
}

/// Catch falling fruit, avoid the bombs
pub struct FruitCatch {
    pub state: CatchState,
    pub highscores: HighScores,
    /// Board position of the run that just ended
    pub last_rank: Option<usize>,
    sprites: CatchSprites,
}

impl FruitCatch {
    pub fn new(sprites: CatchSprites, seed: u64, window: UVec2) -> Self {
        let sizes = SpriteSizes::new(sprite_size(&sprites.basket), |kind| {
            sprite_size(sprites.fruit(kind))
        });
        Self {
            state: CatchState::new(seed, sizes, window),
            highscores: HighScores::new(),
            last_rank: None,
            sprites,
        }
    }

    fn record(&mut self, event: &CatchEvent) {
        match *event {
            CatchEvent::Spawned { id, kind } => log::debug!("spawned {kind:?} #{id}"),
            CatchEvent::Caught { id, kind } => {
                log::debug!("caught {kind:?} #{id}, score {}", self.state.score)
            }
            CatchEvent::Expired { id, kind } => log::debug!("missed {kind:?} #{id}"),
            CatchEvent::GameOver { score } => {
                self.last_rank = self.highscores.record(score, self.state.level);
                match self.last_rank {
                    Some(rank) => log::info!("Game over with {score} points (rank #{rank})"),
                    None => log::info!("Game over with {score} points"),
                }
            }
            CatchEvent::Paused => log::info!("Paused"),
            CatchEvent::Resumed => log::info!("Resumed"),
            CatchEvent::Restarted => {
                self.last_rank = None;
                log::info!("Restarted");
            }
        }
    }
}

impl Game for FruitCatch {
    fn update(&mut self, ctx: &UpdateContext<'_>) -> Result<()> {
        for event in catch::step(&mut self.state, ctx.keys, ctx.window) {
            self.record(&event);
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        draw_catch(
            frame,
            &self.state,
            &self.sprites,
            self.highscores.best(),
            self.last_rank,
        );
    }
}

fn sprite_size(sprite: &Sprite) -> Vec2 {
    UVec2::from(sprite.dimensions()).as_vec2()
}
