//! Packed 1-bit frame the watchface renders into.
//!
//! Follows the usual e-paper buffer layout: each row is `(width+7)/8` bytes,
//! MSB-first, bit 1 = white and bit 0 = ink. That convention makes the 1-bit
//! compositing rule a literal byte-wise AND — white is the identity, so ink
//! from every layer survives into the composite.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

/// A monochrome framebuffer-like surface.
///
/// Implements [`DrawTarget`] so `embedded-graphics` primitives draw straight
/// into it; `BinaryColor::On` is ink, `Off` is background.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonoFrame {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl MonoFrame {
    /// Create an all-white frame.
    pub fn new(width: u32, height: u32) -> Self {
        let bytes_per_row = width.div_ceil(8);
        Self {
            width,
            height,
            bytes: vec![0xFF; (bytes_per_row * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Packed rows, ready to hand to a display compositor. Trailing bits in
    /// the last byte of a row are padding.
    pub fn data(&self) -> &[u8] {
        &self.bytes
    }

    /// Reset every pixel to white.
    pub fn clear(&mut self) {
        self.bytes.fill(0xFF);
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: BinaryColor) {
        if x >= self.width || y >= self.height {
            return;
        }
        let bytes_per_row = self.width.div_ceil(8);
        let index = (y * bytes_per_row + x / 8) as usize;
        let mask = 0x80 >> (x % 8);
        match color {
            BinaryColor::On => self.bytes[index] &= !mask,
            BinaryColor::Off => self.bytes[index] |= mask,
        }
    }

    /// True when the pixel carries ink. Out-of-bounds reads are white.
    pub fn is_inked(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let bytes_per_row = self.width.div_ceil(8);
        let index = (y * bytes_per_row + x / 8) as usize;
        self.bytes[index] & (0x80 >> (x % 8)) == 0
    }

    /// AND-composite another layer into this one. With white as 1, ink as 0,
    /// this is exactly the 1-bit translucency approximation: a pixel stays
    /// white only if every layer left it white.
    pub fn intersect(&mut self, other: &MonoFrame) {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        for (dst, src) in self.bytes.iter_mut().zip(&other.bytes) {
            *dst &= src;
        }
    }

    /// Invert every pixel.
    pub fn invert(&mut self) {
        for byte in &mut self.bytes {
            *byte = !*byte;
        }
    }

    /// Number of inked pixels.
    pub fn ink_count(&self) -> usize {
        let mut count = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_inked(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Even-odd scanline fill of an arbitrary polygon.
    ///
    /// Vertices may repeat and edges may be degenerate; a zero-area spike
    /// contributes two coincident crossings that cancel out. Scanlines sample
    /// pixel centres, so integer vertices never sit exactly on a sample row.
    pub fn fill_polygon(&mut self, vertices: &[Point], color: BinaryColor) {
        if vertices.len() < 3 {
            return;
        }

        let y_min = vertices.iter().map(|v| v.y).min().unwrap().max(0);
        let y_max = vertices
            .iter()
            .map(|v| v.y)
            .max()
            .unwrap()
            .min(self.height as i32 - 1);

        let mut crossings: Vec<f32> = Vec::with_capacity(vertices.len());
        for y in y_min..=y_max {
            let scan = y as f32 + 0.5;
            crossings.clear();
            for i in 0..vertices.len() {
                let a = vertices[i];
                let b = vertices[(i + 1) % vertices.len()];
                let (ay, by) = (a.y as f32, b.y as f32);
                // half-open rule: count the edge only when it straddles the
                // scanline, which also skips horizontal edges
                if (ay <= scan) == (by <= scan) {
                    continue;
                }
                let t = (scan - ay) / (by - ay);
                crossings.push(a.x as f32 + t * (b.x as f32 - a.x as f32));
            }
            crossings.sort_by(|p, q| p.partial_cmp(q).unwrap());
            for pair in crossings.chunks_exact(2) {
                let start = ((pair[0] - 0.5).ceil() as i32).max(0);
                let end = ((pair[1] - 0.5).floor() as i32).min(self.width as i32 - 1);
                for x in start..=end {
                    self.set_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}

impl OriginDimensions for MonoFrame {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for MonoFrame {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                self.set_pixel(point.x as u32, point.y as u32, color);
            }
        }
        Ok(())
    }
}
