//! Off-screen RGBA8 drawing surface for the track strips.
//!
//! Shapes are rasterized on the CPU with a small supersampling grid so the
//! output is deterministic: the same calls always yield the same bytes.
//! Pixels are straight (non-premultiplied) RGBA, matching
//! `peniko::Format::Rgba8`.

use std::sync::Arc;

use floem::kurbo::Rect;
use floem::peniko::{self, Blob};

use crate::color::SolidColor;
use crate::constants;
use crate::style::LineCap;

pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    /// Allocate a transparent surface. Returns `None` for zero-sized requests.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels: vec![0u8; (width * height * 4) as usize],
        })
    }

    #[cfg(test)]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let o = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[o],
            self.pixels[o + 1],
            self.pixels[o + 2],
            self.pixels[o + 3],
        ]
    }

    /// Axis-aligned filled rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: SolidColor) {
        self.cover(rect, color, |x, y| {
            x >= rect.x0 && x < rect.x1 && y >= rect.y0 && y < rect.y1
        });
    }

    /// Horizontal line from `x0` to `x1` at height `y`, `thickness` wide,
    /// with `cap` applied at both ends.
    pub fn stroke_hline(
        &mut self,
        x0: f64,
        x1: f64,
        y: f64,
        thickness: f64,
        cap: LineCap,
        color: SolidColor,
    ) {
        let r = thickness / 2.0;
        if r <= 0.0 {
            return;
        }
        match cap {
            LineCap::Round => {
                let bbox = Rect::new(x0 - r, y - r, x1 + r, y + r);
                self.cover(bbox, color, |px, py| {
                    let cx = px.clamp(x0.min(x1), x0.max(x1));
                    let (dx, dy) = (px - cx, py - y);
                    dx * dx + dy * dy <= r * r
                });
            }
            LineCap::Square => self.fill_rect(Rect::new(x0 - r, y - r, x1 + r, y + r), color),
            LineCap::Butt => self.fill_rect(Rect::new(x0, y - r, x1, y + r), color),
        }
    }

    /// Vertical butt-capped segment centered on `x`.
    pub fn stroke_vline(&mut self, x: f64, y0: f64, y1: f64, width: f64, color: SolidColor) {
        let half = width / 2.0;
        self.fill_rect(Rect::new(x - half, y0.min(y1), x + half, y0.max(y1)), color);
    }

    /// Blend `color` over every pixel of `bbox`, weighted by the fraction of
    /// subsamples for which `inside` holds.
    fn cover(&mut self, bbox: Rect, color: SolidColor, inside: impl Fn(f64, f64) -> bool) {
        if color.is_transparent() {
            return;
        }
        let px0 = bbox.x0.floor().max(0.0) as u32;
        let py0 = bbox.y0.floor().max(0.0) as u32;
        let px1 = (bbox.x1.ceil().max(0.0) as u32).min(self.width);
        let py1 = (bbox.y1.ceil().max(0.0) as u32).min(self.height);
        let n = constants::SUPERSAMPLE;
        let total = (n * n) as f64;

        for py in py0..py1 {
            for px in px0..px1 {
                let mut hits = 0u32;
                for j in 0..n {
                    let sy = py as f64 + (j as f64 + 0.5) / n as f64;
                    for i in 0..n {
                        let sx = px as f64 + (i as f64 + 0.5) / n as f64;
                        if inside(sx, sy) {
                            hits += 1;
                        }
                    }
                }
                if hits > 0 {
                    self.blend(px, py, color, hits as f64 / total);
                }
            }
        }
    }

    /// Source-over in straight alpha.
    fn blend(&mut self, x: u32, y: u32, color: SolidColor, coverage: f64) {
        let o = ((y * self.width + x) * 4) as usize;
        let sa = color.a().clamp(0.0, 1.0) * coverage;
        let da = self.pixels[o + 3] as f64 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return;
        }
        let src = [color.r(), color.g(), color.b()];
        for (c, s) in src.iter().enumerate() {
            let d = self.pixels[o + c] as f64 / 255.0;
            let v = (s.clamp(0.0, 1.0) * sa + d * da * (1.0 - sa)) / out_a;
            self.pixels[o + c] = (v * 255.0).round() as u8;
        }
        self.pixels[o + 3] = (out_a * 255.0).round() as u8;
    }

    /// Hand the pixels to the renderer, consuming the surface.
    pub fn into_image(self) -> peniko::Image {
        let blob = Blob::new(Arc::new(self.pixels));
        peniko::Image::new(blob, peniko::Format::Rgba8, self.width, self.height)
    }
}
