//! Fruit kinds and falling fruit entities

use glam::Vec2;
use rand::Rng;

use super::rect::Rect;

/// Everything that can fall from the sky
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FruitKind {
    Apple,
    Banana,
    Cherry,
    Grape,
    Orange,
    /// Ends the run when caught
    Bomb,
}

impl FruitKind {
    pub const ALL: [FruitKind; 6] = [
        FruitKind::Apple,
        FruitKind::Banana,
        FruitKind::Cherry,
        FruitKind::Grape,
        FruitKind::Orange,
        FruitKind::Bomb,
    ];

    /// Per-frame increase of fall speed
    pub fn weight(self) -> f32 {
        match self {
            FruitKind::Apple => 0.10,
            FruitKind::Banana => 0.08,
            FruitKind::Cherry => 0.05,
            FruitKind::Grape => 0.06,
            FruitKind::Orange => 0.09,
            FruitKind::Bomb => 0.12,
        }
    }

    pub fn scores(self) -> bool {
        self != FruitKind::Bomb
    }

    /// Image file stem under the asset directory
    pub fn asset_name(self) -> &'static str {
        match self {
            FruitKind::Apple => "apple",
            FruitKind::Banana => "banana",
            FruitKind::Cherry => "cherry",
            FruitKind::Grape => "grape",
            FruitKind::Orange => "orange",
            FruitKind::Bomb => "bomb",
        }
    }

    /// Uniform pick over [`FruitKind::ALL`]
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A falling fruit
#[derive(Debug, Clone, PartialEq)]
pub struct Fruit {
    pub id: u32,
    pub kind: FruitKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Current fall speed (pixels/frame)
    pub gravity: f32,
}

impl Fruit {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Accelerate, then fall
    pub fn fall(&mut self) {
        self.gravity += self.kind.weight();
        self.pos.y += self.gravity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_only_bomb_is_non_scoring() {
        for kind in FruitKind::ALL {
            assert_eq!(kind.scores(), kind != FruitKind::Bomb);
            assert!(kind.weight() > 0.0);
        }
    }

    #[test]
    fn test_fall_accelerates() {
        let mut fruit = Fruit {
            id: 1,
            kind: FruitKind::Apple,
            pos: Vec2::new(0.0, 0.0),
            size: Vec2::splat(64.0),
            gravity: 3.0,
        };
        fruit.fall();
        assert!((fruit.gravity - 3.1).abs() < 1e-6);
        assert!((fruit.pos.y - 3.1).abs() < 1e-6);
        fruit.fall();
        assert!((fruit.gravity - 3.2).abs() < 1e-6);
        assert!((fruit.pos.y - 6.3).abs() < 1e-5);
    }

    #[test]
    fn test_random_covers_every_kind() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(FruitKind::random(&mut rng));
        }
        assert_eq!(seen.len(), FruitKind::ALL.len());
    }
}
