//! Fruit Catch entry point
//!
//! Move the basket with the arrow keys (or A/D), catch fruit, avoid bombs.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use pocket_arcade::assets::CatchSprites;
use pocket_arcade::platform;
use pocket_arcade::settings::{FRUIT_CATCH_FILE, Settings};
use pocket_arcade::{FruitCatch, Result};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = Settings::load(Path::new(FRUIT_CATCH_FILE), Settings::fruit_catch())?;
    let sprites = CatchSprites::load(&settings.asset_dir)?;

    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("RNG seed {seed}");

    let game = FruitCatch::new(sprites, seed, settings.window_size());
    platform::run(game, &settings)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
