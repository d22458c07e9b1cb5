//! Off-screen RGBA frame buffer
//!
//! Scenes draw here every frame; the presenter uploads the finished buffer
//! to the GPU. Coordinates are pixels with the origin at the top-left.

use glam::{UVec2, Vec2};
use image::{Pixel, Rgba, RgbaImage};

use super::font;
use super::sprite::Sprite;

const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Scale-then-translate transform for [`Frame::draw_sprite`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawOptions {
    pub scale: Vec2,
    pub translate: Vec2,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            scale: Vec2::ONE,
            translate: Vec2::ZERO,
        }
    }
}

impl DrawOptions {
    pub fn at(pos: Vec2) -> Self {
        Self {
            translate: pos,
            ..Default::default()
        }
    }
}

/// The frame being drawn
#[derive(Debug, Clone)]
pub struct Frame {
    image: RgbaImage,
}

impl Frame {
    pub fn new(size: UVec2) -> Self {
        Self {
            image: RgbaImage::from_pixel(size.x, size.y, CLEAR),
        }
    }

    pub fn resize(&mut self, size: UVec2) {
        self.image = RgbaImage::from_pixel(size.x, size.y, CLEAR);
    }

    pub fn size(&self) -> UVec2 {
        UVec2::from(self.image.dimensions())
    }

    /// Raw RGBA8 bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn fill(&mut self, color: Rgba<u8>) {
        for px in self.image.pixels_mut() {
            *px = color;
        }
    }

    /// Blend a solid rectangle, clipped to the frame
    pub fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba<u8>) {
        let (x0, x1) = clip_span(pos.x, pos.x + size.x, self.image.width());
        let (y0, y1) = clip_span(pos.y, pos.y + size.y, self.image.height());
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, color);
            }
        }
    }

    /// Draw a sprite scaled about its top-left corner, then translated.
    /// Nearest-neighbour sampling, source-over alpha.
    pub fn draw_sprite(&mut self, sprite: &Sprite, opts: DrawOptions) {
        let (w, h) = sprite.dimensions();
        if opts.scale.cmple(Vec2::ZERO).any() || w == 0 || h == 0 {
            return;
        }
        let dest = Vec2::new(w as f32, h as f32) * opts.scale;
        let (x0, x1) = clip_span(opts.translate.x, opts.translate.x + dest.x, self.image.width());
        let (y0, y1) = clip_span(opts.translate.y, opts.translate.y + dest.y, self.image.height());

        for y in y0..y1 {
            let sy = ((y as f32 + 0.5 - opts.translate.y) / opts.scale.y) as u32;
            let sy = sy.min(h - 1);
            for x in x0..x1 {
                let sx = ((x as f32 + 0.5 - opts.translate.x) / opts.scale.x) as u32;
                let sx = sx.min(w - 1);
                self.blend(x, y, *sprite.get_pixel(sx, sy));
            }
        }
    }

    /// Draw ASCII text with the debug font; `\n` starts a new line
    pub fn draw_text(&mut self, text: &str, pos: UVec2, scale: u32, color: Rgba<u8>) {
        let mut cursor = pos;
        for ch in text.chars() {
            if ch == '\n' {
                cursor.x = pos.x;
                cursor.y += (font::GLYPH_HEIGHT + 2) * scale;
                continue;
            }
            if let Some(rows) = font::glyph(ch) {
                for row in 0..font::GLYPH_HEIGHT {
                    for col in 0..font::GLYPH_WIDTH {
                        if font::is_set(rows, col, row) {
                            let px = Vec2::new(
                                (cursor.x + col * scale) as f32,
                                (cursor.y + row * scale) as f32,
                            );
                            self.fill_rect(px, Vec2::splat(scale as f32), color);
                        }
                    }
                }
            }
            cursor.x += font::ADVANCE * scale;
        }
    }

    fn blend(&mut self, x: u32, y: u32, src: Rgba<u8>) {
        self.image.get_pixel_mut(x, y).blend(&src);
    }
}

fn clip_span(start: f32, end: f32, limit: u32) -> (u32, u32) {
    let lo = start.floor().clamp(0.0, limit as f32) as u32;
    let hi = end.ceil().clamp(0.0, limit as f32) as u32;
    (lo, hi.max(lo))
}
