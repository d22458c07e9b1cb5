//! Sprite loading
//!
//! Images live under `<asset_dir>/<name>.png`. Any missing or corrupt file is
//! an error; callers treat it as fatal.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::renderer::Sprite;
use crate::sim::FruitKind;

pub const BASKET_ASSET: &str = "basket";

/// Path of a named image inside the asset directory
pub fn asset_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.png"))
}

/// Decode a PNG (or any format `image` recognises) into a [`Sprite`]
pub fn load_sprite(path: &Path) -> Result<Sprite> {
    let sprite = image::open(path)
        .map_err(|source| Error::Asset {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgba8();
    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        sprite.width(),
        sprite.height()
    );
    Ok(sprite)
}

/// Every image the fruit-catch demo draws
#[derive(Debug, Clone)]
pub struct CatchSprites {
    pub basket: Sprite,
    /// Indexed by `FruitKind as usize`
    fruits: Vec<Sprite>,
}

impl CatchSprites {
    /// Load the basket and one image per fruit kind
    pub fn load(dir: &Path) -> Result<Self> {
        let basket = load_sprite(&asset_path(dir, BASKET_ASSET))?;
        let mut fruits = Vec::with_capacity(FruitKind::ALL.len());
        for kind in FruitKind::ALL {
            fruits.push(load_sprite(&asset_path(dir, kind.asset_name()))?);
        }
        log::info!("loaded {} sprites from {}", fruits.len() + 1, dir.display());

        Ok(Self { basket, fruits })
    }

    /// Assemble from already-built sprites
    pub fn from_parts(basket: Sprite, fruit: impl Fn(FruitKind) -> Sprite) -> Self {
        Self {
            basket,
            fruits: FruitKind::ALL.into_iter().map(fruit).collect(),
        }
    }

    pub fn fruit(&self, kind: FruitKind) -> &Sprite {
        &self.fruits[kind as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_path() {
        let path = asset_path(Path::new("assets/images"), "apple");
        assert_eq!(path, PathBuf::from("assets/images/apple.png"));
    }

    #[test]
    fn test_missing_file_is_asset_error() {
        let err = load_sprite(Path::new("does/not/exist.png")).unwrap_err();
        match err {
            Error::Asset { path, .. } => assert_eq!(path, PathBuf::from("does/not/exist.png")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_round_trips_pixels() {
        let dir = std::env::temp_dir().join(format!("pocket-arcade-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = asset_path(&dir, "dot");

        let mut img = image::RgbaImage::new(3, 2);
        img.put_pixel(2, 1, image::Rgba([10, 20, 30, 255]));
        img.save(&path).unwrap();

        let sprite = load_sprite(&path).unwrap();
        assert_eq!(sprite.width(), 3);
        assert_eq!(sprite.height(), 2);
        assert_eq!(sprite.get_pixel(2, 1), &image::Rgba([10, 20, 30, 255]));
        assert_eq!(sprite.get_pixel(0, 0), &image::Rgba([0, 0, 0, 0]));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_shipped_assets_load() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/images");
        let sprites = CatchSprites::load(&dir).unwrap();
        assert!(sprites.basket.width() > sprites.fruit(FruitKind::Apple).width());
    }
}
