//! Bouncing Ball entry point
//!
//! Hold Space on the ground to charge a jump, release to launch.

use std::path::Path;

use pocket_arcade::consts::BALL_SIZE;
use pocket_arcade::platform;
use pocket_arcade::renderer::{Rgba, filled_circle};
use pocket_arcade::settings::{BOUNCING_BALL_FILE, Settings};
use pocket_arcade::{BouncingBall, Result};

const BALL_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = Settings::load(Path::new(BOUNCING_BALL_FILE), Settings::bouncing_ball())?;

    let sprite = filled_circle(BALL_SIZE, BALL_COLOR);
    let game = BouncingBall::new(sprite, settings.window_size());

    platform::run(game, &settings)
}
