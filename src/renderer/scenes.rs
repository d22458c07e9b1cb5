//! Per-demo scene drawing
//!
//! Pure projection of simulation state onto a [`Frame`]; nothing here
//! feeds back into the simulation.

use glam::{UVec2, Vec2};
use image::Rgba;

use super::font;
use super::frame::{DrawOptions, Frame};
use super::sprite::Sprite;
use crate::assets::CatchSprites;
use crate::consts::SKY;
use crate::highscores::HighScoreEntry;
use crate::sim::{Ball, CatchPhase, CatchState};

pub const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const TEXT_SCALE: u32 = 2;
const LINE_HEIGHT: u32 = (font::GLYPH_HEIGHT + 2) * TEXT_SCALE;
const SHADE: Rgba<u8> = Rgba([0, 0, 0, 140]);
const BACKGROUND: Rgba<u8> = Rgba(SKY);

/// Ball demo: sky, size readout, squashed ball
pub fn draw_bounce(frame: &mut Frame, ball: &Ball, sprite: &Sprite) {
    frame.fill(BACKGROUND);

    let size = frame.size();
    frame.draw_text(
        &format!("screen size: {}*{}", size.x, size.y),
        UVec2::ZERO,
        TEXT_SCALE,
        TEXT_COLOR,
    );

    // Keep the bottom edge planted while squashed
    let squash = ball.squash();
    let sink = (sprite.height() as f32 * (1.0 - squash)) as i32;
    frame.draw_sprite(
        sprite,
        DrawOptions {
            scale: Vec2::new(1.0, squash),
            translate: Vec2::new(ball.x as f32, (ball.y + sink) as f32),
        },
    );
}

/// Fruit-catch demo: fruit, basket, HUD and phase banners.
/// `rank` is where the run that just ended landed on the session board.
pub fn draw_catch(
    frame: &mut Frame,
    state: &CatchState,
    sprites: &CatchSprites,
    best: Option<HighScoreEntry>,
    rank: Option<usize>,
) {
    frame.fill(BACKGROUND);

    for fruit in &state.fruits {
        frame.draw_sprite(sprites.fruit(fruit.kind), DrawOptions::at(fruit.pos));
    }
    frame.draw_sprite(&sprites.basket, DrawOptions::at(state.basket.pos));

    let size = frame.size();
    let hud = format!(
        "Score: {}\nLevel: {}\nscreen size: {}*{}",
        state.score, state.level, size.x, size.y
    );
    frame.draw_text(&hud, UVec2::ZERO, TEXT_SCALE, TEXT_COLOR);

    match state.phase {
        CatchPhase::Playing => {}
        CatchPhase::Paused => banner(frame, &["PAUSED - press Enter"]),
        CatchPhase::GameOver => {
            let mut lines = vec![
                "GAME OVER - press Enter".to_string(),
                format!("Score: {}", state.score),
            ];
            if let Some(rank) = rank {
                lines.push(format!("Rank #{rank} this session"));
            }
            if let Some(best) = best {
                lines.push(format!("Best: {} (level {})", best.score, best.level));
            }
            banner(frame, &lines);
        }
    }
}

/// Dim the screen and centre some lines of text
fn banner<S: AsRef<str>>(frame: &mut Frame, lines: &[S]) {
    let size = frame.size();
    frame.fill_rect(Vec2::ZERO, size.as_vec2(), SHADE);

    let block_height = lines.len() as u32 * LINE_HEIGHT;
    let mut y = size.y.saturating_sub(block_height) / 2;
    for line in lines.iter().map(AsRef::as_ref) {
        let x = size.x.saturating_sub(font::text_width(line, TEXT_SCALE)) / 2;
        frame.draw_text(line, UVec2::new(x, y), TEXT_SCALE, TEXT_COLOR);
        y += LINE_HEIGHT;
    }
}
