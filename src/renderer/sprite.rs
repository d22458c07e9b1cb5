//! Images owned by the renderer
//!
//! Sprites are plain `image` buffers, straight alpha, row-major RGBA8.

use image::{Rgba, RgbaImage};

/// A decoded or generated image
pub type Sprite = RgbaImage;

/// Anti-aliased disc filling a `diameter` square
pub fn filled_circle(diameter: u32, color: Rgba<u8>) -> Sprite {
    const SAMPLES: u32 = 4;
    let r = diameter as f32 / 2.0;

    RgbaImage::from_fn(diameter, diameter, |x, y| {
        let mut covered = 0;
        for sy in 0..SAMPLES {
            for sx in 0..SAMPLES {
                let px = x as f32 + (sx as f32 + 0.5) / SAMPLES as f32 - r;
                let py = y as f32 + (sy as f32 + 0.5) / SAMPLES as f32 - r;
                if px * px + py * py <= r * r {
                    covered += 1;
                }
            }
        }
        let alpha = color[3] as u32 * covered / (SAMPLES * SAMPLES);
        Rgba([color[0], color[1], color[2], alpha as u8])
    })
}
